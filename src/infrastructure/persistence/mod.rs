//! SQLite repository implementation.
//!
//! Concrete implementation of the domain repository trait using SQLx
//! runtime-bound queries against a SQLite database.

pub mod sqlite_url_repository;

pub use sqlite_url_repository::SqliteUrlRepository;
