//! Request handlers for the plain-text protocol.
//!
//! [`dispatch`] owns the single entry point; the per-decision handlers take
//! the shared state and the parameters extracted by
//! [`crate::api::router::classify`].

pub mod dispatch;
pub mod health;
pub mod resolve;
pub mod shorten;

pub use dispatch::dispatch_handler;
pub use health::health_handler;
pub use resolve::resolve_handler;
pub use shorten::shorten_handler;
