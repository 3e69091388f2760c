//! # Blog Core
//!
//! The domain layer of the blog: the `Post` entity, field validation,
//! repository ports and the `PostStore` service that owns the post lifecycle.
//! Nothing in here knows about HTTP or a concrete database.

pub mod domain;
pub mod error;
pub mod ports;
pub mod store;
pub mod validation;

pub use error::DomainError;
pub use store::PostStore;
