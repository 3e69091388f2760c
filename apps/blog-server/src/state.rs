//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::PostStore;
use blog_core::ports::PostRepository;
use blog_infra::InMemoryPostRepository;

#[cfg(feature = "sqlite")]
use blog_infra::database::{DatabaseConfig, DatabaseConnections, SqlitePostRepository};
#[cfg(feature = "sqlite")]
use migration::{Migrator, MigratorTrait};

use crate::config::{AppConfig, DatabaseSettings};
use crate::render::Templates;

/// Reasons the server cannot start.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Failed to parse templates: {0}")]
    Templates(#[from] tera::Error),

    #[cfg(feature = "sqlite")]
    #[error("Failed to connect to database: {0}")]
    Database(migration::DbErr),

    #[cfg(feature = "sqlite")]
    #[error("Failed to apply migrations: {0}")]
    Migration(migration::DbErr),

    #[cfg(not(feature = "sqlite"))]
    #[error("Database configured but the server was built without the sqlite feature")]
    StorageUnavailable,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostStore,
    pub templates: Arc<Templates>,
    #[cfg(feature = "sqlite")]
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the application state with the configured storage.
    pub async fn new(config: &AppConfig) -> Result<Self, StartupError> {
        let templates = Arc::new(Templates::new()?);

        let Some(settings) = &config.database else {
            tracing::warn!("DATABASE_URL=memory. Posts are kept in memory and lost on restart.");
            return Ok(Self::with_repository(
                Arc::new(InMemoryPostRepository::new()),
                templates,
            ));
        };

        Self::open_database(settings, templates).await
    }

    #[cfg(feature = "sqlite")]
    async fn open_database(
        settings: &DatabaseSettings,
        templates: Arc<Templates>,
    ) -> Result<Self, StartupError> {
        let db_config = DatabaseConfig {
            max_connections: settings.max_connections,
            min_connections: settings.min_connections,
            ..DatabaseConfig::new(settings.url.clone())
        };
        let connections = DatabaseConnections::init(&db_config)
            .await
            .map_err(StartupError::Database)?;

        if settings.run_migrations {
            Migrator::up(&connections.main, None)
                .await
                .map_err(StartupError::Migration)?;
            tracing::info!("Migrations applied");
        }

        let repo = Arc::new(SqlitePostRepository::new(connections.main.clone()));
        let mut state = Self::with_repository(repo, templates);
        state.db = Some(Arc::new(connections));

        tracing::info!("Application state initialized");
        Ok(state)
    }

    #[cfg(not(feature = "sqlite"))]
    async fn open_database(
        settings: &DatabaseSettings,
        _templates: Arc<Templates>,
    ) -> Result<Self, StartupError> {
        tracing::error!(url = %settings.url, "Built without the sqlite feature");
        Err(StartupError::StorageUnavailable)
    }

    /// State over an arbitrary repository, without a database pool.
    pub fn with_repository(repo: Arc<dyn PostRepository>, templates: Arc<Templates>) -> Self {
        Self {
            posts: PostStore::new(repo),
            templates,
            #[cfg(feature = "sqlite")]
            db: None,
        }
    }

    /// Whether the storage backend answers.
    pub async fn storage_healthy(&self) -> bool {
        #[cfg(feature = "sqlite")]
        let healthy = match &self.db {
            Some(db) => match db.ping().await {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(error = %e, "Database ping failed");
                    false
                }
            },
            None => true,
        };
        #[cfg(not(feature = "sqlite"))]
        let healthy = true;

        healthy
    }
}
