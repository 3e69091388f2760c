//! Field validation for post drafts.
//!
//! Validation rules are declared on [`PostDraft`] with the `validator` derive;
//! this module supplies the custom rules and flattens `validator`'s error map
//! into an ordered list of [`FieldError`]s that any rendering layer can show.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::PostDraft;

/// Form order, used to keep error lists stable.
const FIELD_ORDER: [&str; 5] = ["title", "subtitle", "author", "img_url", "body"];

const REQUIRED_MESSAGE: &str = "This field is required.";
const INVALID_URL_MESSAGE: &str = "Invalid URL.";

/// A single validation failure attached to a form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Ordered list of field-level validation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// A list holding one error.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Messages recorded against one field, in insertion order.
    pub fn for_field(&self, field: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }

    fn sort_by_form_order(&mut self) {
        let rank = |field: &str| {
            FIELD_ORDER
                .iter()
                .position(|f| *f == field)
                .unwrap_or(FIELD_ORDER.len())
        };
        self.0.sort_by_key(|e| rank(&e.field));
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({}).", error.code));
                out.push(field.to_string(), message);
            }
        }
        out.sort_by_form_order();
        out
    }
}

impl PostDraft {
    /// Check every field, returning all failures at once.
    pub fn validate_fields(&self) -> Result<(), FieldErrors> {
        self.validate().map_err(FieldErrors::from)
    }
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Required: non-empty after trimming whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("required", REQUIRED_MESSAGE));
    }
    Ok(())
}

/// Required, and an absolute `http`/`https` URL with a host.
pub fn required_web_url(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;

    let parsed = url::Url::parse(value.trim()).map_err(|_| error("url", INVALID_URL_MESSAGE))?;
    let web_scheme = matches!(parsed.scheme(), "http" | "https");
    let has_host = parsed.host_str().is_some_and(|h| !h.is_empty());
    if !web_scheme || !has_host {
        return Err(error("url", INVALID_URL_MESSAGE));
    }
    Ok(())
}
