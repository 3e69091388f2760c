//! Observability module - request IDs and request spans.

mod request_id;

pub use request_id::{REQUEST_ID_HEADER, request_id};
