//! Static informational pages.

use actix_web::{HttpResponse, http::StatusCode, web};
use tera::Context;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /about
pub async fn about(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state.templates.page(StatusCode::OK, "about.html", &Context::new())
}

/// GET /contact
pub async fn contact(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state.templates.page(StatusCode::OK, "contact.html", &Context::new())
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppResult<HttpResponse> {
    Err(AppError::NotFound("Page not found".to_string()))
}
