//! HTTP handlers and route configuration.

mod health;
mod pages;
mod posts;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::NotFound(err.to_string()).into()),
    )
    .app_data(
        web::FormConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    // Posts
    .route("/", web::get().to(posts::list_posts))
    .route("/post/{id}", web::get().to(posts::show_post))
    .service(
        web::resource("/new-post")
            .route(web::get().to(posts::new_post_form))
            .route(web::post().to(posts::create_post)),
    )
    .service(
        web::resource("/edit-post/{id}")
            .route(web::get().to(posts::edit_post_form))
            .route(web::post().to(posts::update_post)),
    )
    .route("/delete/{id}", web::get().to(posts::delete_post))
    // Static pages
    .route("/about", web::get().to(pages::about))
    .route("/contact", web::get().to(pages::contact))
    // Operations
    .route("/health", web::get().to(health::health_check))
    .default_service(web::to(pages::not_found));
}
