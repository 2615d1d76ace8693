//! # makeshort
//!
//! A tiny URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The `UrlMapping` entity and the repository trait
//! - **Application Layer** ([`application`]) - Code assignment with dedup and collision retry
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite-backed persistence
//! - **API Layer** ([`api`]) - Path classification and plain-text request handling
//!
//! ## Protocol
//!
//! The service speaks a deliberately minimal plain-text protocol:
//!
//! ```text
//! POST/GET /makeshort/<url>  -> 200  <short_domain>/<code>
//! GET      /<code>           -> 200  <original url>    (404 if unknown)
//! GET      / or /health      -> 200  usage banner
//! anything else              -> 400  usage hint
//! ```
//!
//! The shorten target is taken from the raw request path and percent-decoded
//! leniently, so any string can be shortened - no URL validation is performed.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: defaults create sqlite:urls.db and listen on 0.0.0.0:8080
//! export DATABASE_URL="sqlite:urls.db"
//! export SHORT_DOMAIN="localhost:5000"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortenService;
    pub use crate::domain::entities::UrlMapping;
    pub use crate::domain::repositories::{InsertOutcome, UrlRepository};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
