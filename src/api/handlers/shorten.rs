//! Handler for the shorten route.

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::percent_decode::percent_decode;

/// Shortens the captured target and formats the short URL body.
///
/// The raw target is percent-decoded leniently before it reaches the
/// service; the decoded string is stored as-is, with no validation that it
/// is a well-formed URL.
///
/// # Response
///
/// `200` with body `<short_domain>/<code>`.
///
/// # Errors
///
/// Returns [`AppError::RetriesExhausted`] (mapped to 500) when no unique
/// code could be assigned, and [`AppError::Internal`] on storage faults.
pub async fn shorten_handler(state: &AppState, raw_target: &str) -> Result<String, AppError> {
    let original_url = percent_decode(raw_target);

    let code = state.shorten_service.shorten(&original_url).await?;

    Ok(format!("{}/{}", state.short_domain, code))
}
