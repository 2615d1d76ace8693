//! Application router.
//!
//! The whole plain-text protocol is served by a single fallback handler so
//! that dispatch happens on the raw request path (axum's route matching
//! percent-decodes captured segments, which would destroy the lenient
//! decoding the shorten target needs). The fallback also makes the HTTP
//! method irrelevant, matching the protocol.

use axum::Router;
use axum::http::HeaderValue;
use axum::http::header::SERVER;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::handlers::dispatch_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .fallback(dispatch_handler)
        .with_state(state)
        .layer(tracing::layer())
        .layer(SetResponseHeaderLayer::overriding(
            SERVER,
            HeaderValue::from_static(concat!("makeshort/", env!("CARGO_PKG_VERSION"))),
        ))
}
