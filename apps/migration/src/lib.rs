//! Schema migrations for the blog database.

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_blog_post;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_blog_post::Migration)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm_migration::sea_orm::{ConnectOptions, Database};

    #[tokio::test]
    async fn test_up_creates_blog_post_table() {
        let opts = ConnectOptions::new("sqlite::memory:")
            .max_connections(1)
            .to_owned();
        let db = Database::connect(opts).await.unwrap();

        Migrator::up(&db, None).await.unwrap();

        let manager = SchemaManager::new(&db);
        assert!(manager.has_table("blog_post").await.unwrap());
        assert!(manager.has_column("blog_post", "img_url").await.unwrap());

        Migrator::down(&db, None).await.unwrap();
        assert!(!manager.has_table("blog_post").await.unwrap());
    }
}
