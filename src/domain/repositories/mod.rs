//! Repository trait definition for the domain layer.
//!
//! The trait abstracts the persistent store behind the service: the concrete
//! implementation lives in `crate::infrastructure::persistence`, and a mock
//! implementation is auto-generated via `mockall` for unit tests.

pub mod url_repository;

pub use url_repository::{InsertOutcome, UrlRepository};

#[cfg(test)]
pub use url_repository::MockUrlRepository;
