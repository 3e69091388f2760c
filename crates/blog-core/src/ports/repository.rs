use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostId};
use crate::error::RepoError;

/// Generic repository trait defining the key-based operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID. Returns `RepoError::NotFound` if nothing was removed.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository.
///
/// Implementations must enforce title uniqueness and report violations as
/// `RepoError::Constraint`.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, PostId> {
    /// Every stored post, ordered by ascending id.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    async fn find_by_title(&self, title: &str) -> Result<Option<Post>, RepoError>;

    /// Insert a new post; the repository assigns the id.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Overwrite the stored row with the same id. `RepoError::NotFound` if it is gone.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;
}
