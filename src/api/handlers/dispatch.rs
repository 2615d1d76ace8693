//! Single entry point dispatching classified paths to handlers.

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::api::handlers::{health_handler, resolve_handler, shorten_handler};
use crate::api::router::{RouteDecision, classify};
use crate::state::AppState;

/// Usage hint returned for paths matching no known route shape.
const INVALID_REQUEST_HINT: &str = "Invalid request. Use /makeshort/<url> or /<code>";

/// Classifies the raw request path and dispatches to the matching handler.
///
/// Registered as the router's fallback so it sees every request regardless
/// of method: dispatch is driven purely by the path. A failed request is
/// answered with the error's status and plain-text body; it never affects
/// other in-flight requests.
pub async fn dispatch_handler(State(state): State<AppState>, uri: Uri) -> Response {
    match classify(uri.path()) {
        RouteDecision::Shorten { raw_target } => shorten_handler(&state, &raw_target)
            .await
            .into_response(),
        RouteDecision::Resolve { code } => resolve_handler(&state, &code).await.into_response(),
        RouteDecision::Health => health_handler().into_response(),
        RouteDecision::Invalid => {
            (StatusCode::BAD_REQUEST, INVALID_REQUEST_HINT).into_response()
        }
    }
}
