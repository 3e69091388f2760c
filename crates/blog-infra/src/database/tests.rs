#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::database::entity::post;
    use crate::database::sqlite_repo::SqlitePostRepository;
    use blog_core::domain::{NewPost, Post, PostDraft};
    use blog_core::error::RepoError;
    use blog_core::ports::{BaseRepository, PostRepository};
    use blog_core::{DomainError, PostStore};
    use sea_orm::{
        ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DbConn, MockDatabase, Schema,
    };

    fn model(id: i32, title: &str) -> post::Model {
        post::Model {
            id,
            title: title.to_owned(),
            subtitle: "Subtitle".to_owned(),
            date: "March 05, 2024".to_owned(),
            body: "<p>Content</p>".to_owned(),
            author: "Author".to_owned(),
            img_url: "https://example.com/cover.png".to_owned(),
        }
    }

    fn new_post(title: &str) -> NewPost {
        NewPost {
            title: title.to_owned(),
            subtitle: "Subtitle".to_owned(),
            date: "March 05, 2024".to_owned(),
            body: "<p>Content</p>".to_owned(),
            author: "Author".to_owned(),
            img_url: "https://example.com/cover.png".to_owned(),
        }
    }

    /// Fresh in-memory SQLite database with the `blog_post` table.
    /// One connection, since every `:memory:` connection is its own database.
    async fn sqlite_memory() -> DbConn {
        let opts = ConnectOptions::new("sqlite::memory:")
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false)
            .to_owned();
        let db = Database::connect(opts).await.unwrap();

        let backend = db.get_database_backend();
        let schema = Schema::new(backend);
        db.execute(backend.build(&schema.create_table_from_entity(post::Entity)))
            .await
            .unwrap();
        db
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results(vec![vec![model(3, "Test Post")]])
            .into_connection();

        let repo = SqlitePostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(3).await.unwrap();

        let post = result.unwrap();
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.id, 3);
        assert_eq!(post.date, "March 05, 2024");
    }

    #[tokio::test]
    async fn test_find_all_maps_every_row() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results(vec![vec![model(1, "First"), model(2, "Second")]])
            .into_connection();

        let repo = SqlitePostRepository::new(db);
        let posts = repo.find_all().await.unwrap();

        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn test_sqlite_insert_assigns_ids_in_order() {
        let repo = SqlitePostRepository::new(sqlite_memory().await);

        let a = repo.insert(new_post("a")).await.unwrap();
        let b = repo.insert(new_post("b")).await.unwrap();
        assert!(b.id > a.id);

        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![a, b]);
    }

    #[tokio::test]
    async fn test_sqlite_unique_title_is_a_constraint_error() {
        let repo = SqlitePostRepository::new(sqlite_memory().await);
        repo.insert(new_post("same")).await.unwrap();

        let err = repo.insert(new_post("same")).await.unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_sqlite_update_and_delete_missing_rows() {
        let repo = SqlitePostRepository::new(sqlite_memory().await);

        let ghost = new_post("ghost").with_id(999);
        assert!(matches!(repo.update(ghost).await, Err(RepoError::NotFound)));
        let deleted = BaseRepository::<Post, i32>::delete(&repo, 999).await;
        assert!(matches!(deleted, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_sqlite_find_by_title() {
        let repo = SqlitePostRepository::new(sqlite_memory().await);
        let stored = repo.insert(new_post("Findable")).await.unwrap();

        assert_eq!(repo.find_by_title("Findable").await.unwrap(), Some(stored));
        assert_eq!(repo.find_by_title("Missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_post_store_lifecycle_on_sqlite() {
        let repo = Arc::new(SqlitePostRepository::new(sqlite_memory().await));
        let store = PostStore::new(repo);

        let draft = PostDraft {
            title: "Hello".to_owned(),
            subtitle: "World".to_owned(),
            body: "<p>x</p>".to_owned(),
            author: "A".to_owned(),
            img_url: "http://example.com/i.png".to_owned(),
        };
        let created = store.create(draft.clone()).await.unwrap();
        let today = blog_core::domain::format_post_date(chrono::Local::now().date_naive());

        let posts = store.list_all().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Hello");
        assert_eq!(posts[0].date, today);

        let mut edited = draft.clone();
        edited.subtitle = "Everyone".to_owned();
        let updated = store.update(created.id, edited).await.unwrap();
        assert_eq!(updated.subtitle, "Everyone");
        assert_eq!(updated.date, created.date);
        assert_eq!(store.get_by_id(created.id).await.unwrap(), updated);

        assert!(matches!(
            store.create(draft).await,
            Err(DomainError::Duplicate(_))
        ));

        store.delete(created.id).await.unwrap();
        assert!(matches!(
            store.get_by_id(created.id).await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(store.list_all().await.unwrap().is_empty());
    }
}
