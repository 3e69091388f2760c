//! In-memory post repository - used when no database is configured.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::{NewPost, Post, PostId};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};

#[derive(Default)]
struct Table {
    rows: BTreeMap<PostId, Post>,
    last_id: PostId,
}

impl Table {
    fn title_taken(&self, title: &str, except: Option<PostId>) -> bool {
        self.rows
            .values()
            .any(|p| p.title == title && Some(p.id) != except)
    }
}

/// Post repository backed by a `BTreeMap` with an async RwLock.
///
/// Ids are never reused, matching an autoincrement column.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    table: RwLock<Table>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::default()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, PostId> for InMemoryPostRepository {
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        table.rows.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|p| p.title == title).cloned())
    }

    async fn insert(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;
        if table.title_taken(&new_post.title, None) {
            return Err(RepoError::Constraint(
                "UNIQUE constraint failed: blog_post.title".to_string(),
            ));
        }

        table.last_id += 1;
        let post = new_post.with_id(table.last_id);
        table.rows.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;
        if !table.rows.contains_key(&post.id) {
            return Err(RepoError::NotFound);
        }
        if table.title_taken(&post.title, Some(post.id)) {
            return Err(RepoError::Constraint(
                "UNIQUE constraint failed: blog_post.title".to_string(),
            ));
        }

        table.rows.insert(post.id, post.clone());
        Ok(post)
    }
}
