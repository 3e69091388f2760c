//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

/// `DATABASE_URL` value that selects the in-memory repository.
pub const MEMORY_DATABASE: &str = "memory";

const DEFAULT_DATABASE_URL: &str = "sqlite://posts.db?mode=rwc";

/// Database settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Apply pending migrations before serving.
    pub run_migrations: bool,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs on the in-memory repository.
    pub database: Option<DatabaseSettings>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let database = (url != MEMORY_DATABASE).then(|| DatabaseSettings {
            url,
            max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS").unwrap_or(5),
            min_connections: parse_var(&lookup, "DB_MIN_CONNECTIONS").unwrap_or(1),
            run_migrations: lookup("RUN_MIGRATIONS")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        });

        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_var(&lookup, "PORT").unwrap_or(5000),
            database,
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.trim().parse().ok())
}
