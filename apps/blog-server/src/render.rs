//! HTML rendering with Tera. Templates are compiled into the binary.

use actix_web::{HttpResponse, http::StatusCode, http::header::ContentType};
use tera::{Context, Tera};

use crate::middleware::error::AppResult;

const TEMPLATES: [(&str, &str); 6] = [
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("post.html", include_str!("../templates/post.html")),
    ("make-post.html", include_str!("../templates/make-post.html")),
    ("about.html", include_str!("../templates/about.html")),
    ("contact.html", include_str!("../templates/contact.html")),
];

/// Parsed page templates.
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Parse every embedded template. Fails on a syntax error.
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.to_vec())?;
        Ok(Self { tera })
    }

    /// Render `name` into an HTML response with the given status.
    pub fn page(&self, status: StatusCode, name: &str, context: &Context) -> AppResult<HttpResponse> {
        let html = self.tera.render(name, context)?;
        Ok(HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_templates_parse() {
        let templates = Templates::new().unwrap();
        let names: Vec<&str> = templates.tera.get_template_names().collect();
        assert_eq!(names.len(), TEMPLATES.len());
    }

    #[test]
    fn test_html_templates_autoescape() {
        let templates = Templates::new().unwrap();
        let mut context = Context::new();
        context.insert("posts", &vec![serde_json::json!({
            "id": 1,
            "title": "<b>bold</b>",
            "subtitle": "s",
            "date": "d",
            "author": "a",
        })]);
        let html = templates.tera.render("index.html", &context).unwrap();
        assert!(html.contains("&lt;b&gt;bold&lt;&#x2F;b&gt;"));
    }
}
