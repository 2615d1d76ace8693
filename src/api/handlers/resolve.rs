//! Handler for short code resolution.

use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a short code to its original URL.
///
/// # Response
///
/// `200` with the original URL as the body.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] (mapped to 404) for unknown codes - an
/// absent code is a user-visible miss, not a fault worth logging.
pub async fn resolve_handler(state: &AppState, code: &str) -> Result<String, AppError> {
    state
        .url_repository
        .find_by_code(code)
        .await?
        .map(|mapping| mapping.original_url)
        .ok_or_else(|| AppError::not_found("Short URL not found"))
}
