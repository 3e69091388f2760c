//! Post storage: SQLite via SeaORM, plus an in-memory fallback.

mod memory;

#[cfg(feature = "sqlite")]
mod connections;
#[cfg(feature = "sqlite")]
mod sqlite_base;
#[cfg(feature = "sqlite")]
pub mod sqlite_repo;

#[cfg(feature = "sqlite")]
pub mod entity;

pub use memory::InMemoryPostRepository;

#[cfg(feature = "sqlite")]
pub use connections::{DatabaseConfig, DatabaseConnections};
#[cfg(feature = "sqlite")]
pub use sqlite_base::SqliteBaseRepository;
#[cfg(feature = "sqlite")]
pub use sqlite_repo::SqlitePostRepository;

#[cfg(feature = "sqlite")]
#[cfg(test)]
mod tests;
