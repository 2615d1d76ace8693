//! Request-level error taxonomy and its plain-text HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors surfaced while handling a single request.
///
/// A failed request never takes the process down; each variant maps to a
/// status code and a plain-text body in [`IntoResponse`]. Short code
/// collisions are not represented here - they are an expected-rare signal
/// recovered inside the shorten service and only become
/// [`AppError::RetriesExhausted`] once the retry cap is spent.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    RetriesExhausted { message: String },
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn retries_exhausted(message: impl Into<String>) -> Self {
        Self::RetriesExhausted {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::RetriesExhausted { message } | AppError::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error: {message}"),
            ),
        };

        (status, body).into_response()
    }
}

/// Storage-layer faults map to a generic internal error. The one database
/// error the service reacts to specifically - a unique violation on the code
/// column - is consumed inside the repository and never reaches this impl.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!("database error: {e}");
        AppError::internal("Database error")
    }
}
