//! Domain-level error types.

use thiserror::Error;

use crate::domain::PostId;
use crate::validation::FieldErrors;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: PostId },

    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Message shown against the title field when it is already in use.
pub const DUPLICATE_TITLE_MESSAGE: &str = "A post with this title already exists.";

impl DomainError {
    pub(crate) fn post_not_found(id: PostId) -> Self {
        DomainError::NotFound {
            entity_type: "Post",
            id,
        }
    }

    /// Field-level view of a write-path failure, for re-rendering a form.
    /// `None` for errors that are not the submitter's to fix.
    pub fn field_errors(&self) -> Option<FieldErrors> {
        match self {
            DomainError::Validation(errors) => Some(errors.clone()),
            DomainError::Duplicate(_) => Some(FieldErrors::single("title", DUPLICATE_TITLE_MESSAGE)),
            _ => None,
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
