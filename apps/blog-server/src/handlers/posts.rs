//! Post handlers: list, view, create, edit, delete.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header, web};
use serde::Serialize;
use tera::Context;

use blog_core::DomainError;
use blog_core::domain::{Post, PostDraft, PostId};
use blog_core::validation::FieldErrors;
use blog_shared::PostForm;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Which form is being shown: the create form or the edit form of one post.
#[derive(Debug, Clone, Copy)]
enum FormMode {
    New,
    Edit(PostId),
}

impl FormMode {
    fn heading(self) -> &'static str {
        match self {
            FormMode::New => "New Post",
            FormMode::Edit(_) => "Edit Post",
        }
    }

    fn target(self) -> String {
        match self {
            FormMode::New => "/new-post".to_string(),
            FormMode::Edit(id) => format!("/edit-post/{}", id),
        }
    }
}

/// One input of the post form, as the template sees it.
#[derive(Debug, Serialize)]
struct FormField<'a> {
    name: &'static str,
    label: &'static str,
    input: &'static str,
    value: &'a str,
    errors: Vec<&'a str>,
}

fn form_fields<'a>(form: &'a PostForm, errors: &'a FieldErrors) -> Vec<FormField<'a>> {
    let field = move |name: &'static str, label: &'static str, input: &'static str, value: &'a str| FormField {
        name,
        label,
        input,
        value,
        errors: errors.for_field(name),
    };
    vec![
        field("title", "Blog Post Title", "text", &form.title),
        field("subtitle", "Subtitle", "text", &form.subtitle),
        field("author", "Your Name", "text", &form.author),
        field("img_url", "Blog Image URL", "url", &form.img_url),
        field("body", "Blog Content", "textarea", &form.body),
    ]
}

fn draft_from_form(form: PostForm) -> PostDraft {
    PostDraft {
        title: form.title,
        subtitle: form.subtitle,
        body: form.body,
        author: form.author,
        img_url: form.img_url,
    }
}

fn form_from_post(post: &Post) -> PostForm {
    PostForm {
        title: post.title.clone(),
        subtitle: post.subtitle.clone(),
        author: post.author.clone(),
        img_url: post.img_url.clone(),
        body: post.body.clone(),
    }
}

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn render_form(
    state: &AppState,
    status: StatusCode,
    mode: FormMode,
    form: &PostForm,
    errors: &FieldErrors,
) -> AppResult<HttpResponse> {
    let mut context = Context::new();
    context.insert("action", mode.heading());
    context.insert("form_action", &mode.target());
    context.insert("fields", &form_fields(form, errors));
    state.templates.page(status, "make-post.html", &context)
}

/// Re-render the submitted form for errors the submitter can fix; anything
/// else becomes an error page.
fn reject_submission(
    state: &AppState,
    mode: FormMode,
    form: &PostForm,
    err: DomainError,
) -> AppResult<HttpResponse> {
    let Some(errors) = err.field_errors() else {
        return Err(err.into());
    };
    let status = AppError::from(err).status_code();
    tracing::debug!(%errors, status = status.as_u16(), "Post form rejected");
    render_form(state, status, mode, form, &errors)
}

/// GET /
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_all().await?;

    let mut context = Context::new();
    context.insert("posts", &posts);
    state.templates.page(StatusCode::OK, "index.html", &context)
}

/// GET /post/{id}
///
/// An unknown id renders the post page in its empty state with a 404.
pub async fn show_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let (status, post) = match state.posts.get_by_id(id).await {
        Ok(post) => (StatusCode::OK, Some(post)),
        Err(DomainError::NotFound { .. }) => {
            tracing::debug!(post_id = id, "Requested post does not exist");
            (StatusCode::NOT_FOUND, None)
        }
        Err(e) => return Err(e.into()),
    };

    let mut context = Context::new();
    context.insert("post", &post);
    state.templates.page(status, "post.html", &context)
}

/// GET /new-post
pub async fn new_post_form(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    render_form(
        &state,
        StatusCode::OK,
        FormMode::New,
        &PostForm::default(),
        &FieldErrors::new(),
    )
}

/// POST /new-post
pub async fn create_post(
    state: web::Data<AppState>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();
    match state.posts.create(draft_from_form(form.clone())).await {
        Ok(_) => Ok(redirect("/")),
        Err(err) => reject_submission(&state, FormMode::New, &form, err),
    }
}

/// GET /edit-post/{id}
pub async fn edit_post_form(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state.posts.get_by_id(id).await?;
    render_form(
        &state,
        StatusCode::OK,
        FormMode::Edit(id),
        &form_from_post(&post),
        &FieldErrors::new(),
    )
}

/// POST /edit-post/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let form = form.into_inner();
    match state.posts.update(id, draft_from_form(form.clone())).await {
        Ok(post) => Ok(redirect(&format!("/post/{}", post.id))),
        Err(err) => reject_submission(&state, FormMode::Edit(id), &form, err),
    }
}

/// GET /delete/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.posts.delete(id).await?;
    Ok(redirect("/"))
}
