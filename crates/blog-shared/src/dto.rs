//! Data Transfer Objects - form payloads and JSON responses.

use serde::{Deserialize, Serialize};

/// The create/edit post form, as submitted (`application/x-www-form-urlencoded`).
///
/// Missing fields deserialize as empty strings so that validation, not the
/// extractor, reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostForm {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub img_url: String,
    /// Rich-text editor output (HTML).
    pub body: String,
}

/// Response of the health check endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let form: PostForm = serde_json::from_str(r#"{"title":"Hi"}"#).unwrap();
        assert_eq!(form.title, "Hi");
        assert!(form.body.is_empty());
        assert!(form.img_url.is_empty());
    }
}
