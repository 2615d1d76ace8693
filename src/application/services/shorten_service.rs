//! Code assignment service.

use std::sync::Arc;

use crate::domain::repositories::{InsertOutcome, UrlRepository};
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Service mapping original URLs to short codes.
///
/// Handles deduplication of repeat submissions and collision retry on code
/// generation. No exclusion is needed here: the store's atomic insert is the
/// only synchronization point.
pub struct ShortenService<R: UrlRepository> {
    repository: Arc<R>,
    code_length: usize,
    max_attempts: usize,
}

impl<R: UrlRepository> ShortenService<R> {
    /// Creates a new shorten service.
    pub fn new(repository: Arc<R>, code_length: usize, max_attempts: usize) -> Self {
        Self {
            repository,
            code_length,
            max_attempts,
        }
    }

    /// Returns the short code for `original_url`, minting one if needed.
    ///
    /// # Deduplication
    ///
    /// If a mapping for the same URL already exists, its code is returned
    /// and nothing is written, so repeated requests for one URL are
    /// idempotent. The dedup check and the insert are not transactionally
    /// combined: two concurrent first-time requests for one URL may mint
    /// two valid codes, which is accepted.
    ///
    /// # Code generation
    ///
    /// Generates random candidates and inserts them, retrying only when the
    /// store reports the candidate code as taken, up to the configured
    /// attempt cap.
    ///
    /// The input is treated as an opaque string: empty input and
    /// non-URL strings are shortened like any other value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::RetriesExhausted`] when every candidate collided,
    /// and [`AppError::Internal`] on storage faults.
    pub async fn shorten(&self, original_url: &str) -> Result<String, AppError> {
        if let Some(existing) = self.repository.find_by_url(original_url).await? {
            return Ok(existing.short_code);
        }

        for attempt in 1..=self.max_attempts {
            let candidate = generate_code(self.code_length);

            match self.repository.insert(&candidate, original_url).await? {
                InsertOutcome::Inserted(mapping) => return Ok(mapping.short_code),
                InsertOutcome::CodeTaken => {
                    tracing::debug!(attempt, code = %candidate, "short code collision, retrying");
                }
            }
        }

        Err(AppError::retries_exhausted(
            "Failed to generate unique short code",
        ))
    }
}
