use std::sync::Arc;

use crate::application::services::ShortenService;
use crate::infrastructure::persistence::SqliteUrlRepository;

/// Shared application state injected into request handling.
///
/// The repository is the single owner of all mapping records; handlers and
/// the shorten service only hold shared references to it.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService<SqliteUrlRepository>>,
    pub url_repository: Arc<SqliteUrlRepository>,
    /// Display prefix for shorten responses, e.g. `localhost:5000`.
    pub short_domain: String,
}
