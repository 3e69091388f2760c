//! The post store - lifecycle of blog posts on top of a [`PostRepository`].

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::domain::{NewPost, Post, PostDraft, PostId};
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;

/// Source of the creation date stamped on new posts.
pub type DateSource = fn() -> NaiveDate;

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Owns create/read/update/delete for posts.
///
/// Validation and title uniqueness are checked here; the repository's unique
/// constraint backs the uniqueness check when two writers race.
#[derive(Clone)]
pub struct PostStore {
    repo: Arc<dyn PostRepository>,
    today: DateSource,
}

impl PostStore {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self {
            repo,
            today: local_today,
        }
    }

    /// Use a fixed date source instead of the local clock.
    pub fn with_date_source(mut self, today: DateSource) -> Self {
        self.today = today;
        self
    }

    /// All posts in creation order.
    pub async fn list_all(&self) -> Result<Vec<Post>, DomainError> {
        self.repo.find_all().await.map_err(internal)
    }

    pub async fn get_by_id(&self, id: PostId) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(internal)?
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    /// Validate and persist a new post stamped with today's date.
    pub async fn create(&self, draft: PostDraft) -> Result<Post, DomainError> {
        draft.validate_fields().map_err(DomainError::Validation)?;
        self.ensure_title_free(&draft.title, None).await?;

        let new_post = NewPost::from_draft(draft, (self.today)());
        let post = self
            .repo
            .insert(new_post)
            .await
            .map_err(|e| write_error(e, None))?;

        tracing::info!(post_id = post.id, title = %post.title, "Post created");
        Ok(post)
    }

    /// Overwrite the editable fields of an existing post. `id` and `date` never change.
    pub async fn update(&self, id: PostId, draft: PostDraft) -> Result<Post, DomainError> {
        let mut post = self.get_by_id(id).await?;

        draft.validate_fields().map_err(DomainError::Validation)?;
        self.ensure_title_free(&draft.title, Some(id)).await?;

        post.apply(draft);
        let post = self
            .repo
            .update(post)
            .await
            .map_err(|e| write_error(e, Some(id)))?;

        tracing::info!(post_id = id, "Post updated");
        Ok(post)
    }

    /// Remove a post permanently.
    pub async fn delete(&self, id: PostId) -> Result<(), DomainError> {
        match self.repo.delete(id).await {
            Ok(()) => {
                tracing::info!(post_id = id, "Post deleted");
                Ok(())
            }
            Err(RepoError::NotFound) => Err(DomainError::post_not_found(id)),
            Err(e) => Err(internal(e)),
        }
    }

    async fn ensure_title_free(&self, title: &str, owner: Option<PostId>) -> Result<(), DomainError> {
        let existing = self.repo.find_by_title(title).await.map_err(internal)?;
        match existing {
            Some(other) if Some(other.id) != owner => {
                tracing::debug!(title = %title, existing_id = other.id, "Title already taken");
                Err(duplicate_title(title))
            }
            _ => Ok(()),
        }
    }
}

fn duplicate_title(title: &str) -> DomainError {
    DomainError::Duplicate(format!("post titled '{}' already exists", title))
}

fn write_error(err: RepoError, id: Option<PostId>) -> DomainError {
    match (err, id) {
        (RepoError::Constraint(msg), _) => {
            tracing::warn!(detail = %msg, "Unique constraint rejected post write");
            DomainError::Duplicate(msg)
        }
        (RepoError::NotFound, Some(id)) => DomainError::post_not_found(id),
        (err, _) => internal(err),
    }
}

fn internal(err: RepoError) -> DomainError {
    DomainError::Internal(err.to_string())
}
