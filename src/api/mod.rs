//! API layer: path classification, request handlers, and HTTP middleware.

pub mod handlers;
pub mod middleware;
pub mod router;
