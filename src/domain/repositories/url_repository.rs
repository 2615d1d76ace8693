//! Repository trait for short URL mapping data access.

use crate::domain::entities::UrlMapping;
use crate::error::AppError;
use async_trait::async_trait;

/// Result of attempting to persist a new mapping.
///
/// Collisions on the code column are an expected-rare, recoverable signal,
/// so they are part of the success type rather than an [`AppError`]: callers
/// branch on [`InsertOutcome::CodeTaken`] to retry with a fresh candidate
/// and use `?` only for genuine storage faults.
#[derive(Debug, Clone)]
pub enum InsertOutcome {
    /// The mapping was persisted under the candidate code.
    Inserted(UrlMapping),
    /// Another mapping already owns the candidate code. Nothing was written.
    CodeTaken,
}

/// Repository interface for the short URL mapping store.
///
/// Uniqueness of `short_code` is enforced atomically by the store itself
/// (surfaced as [`InsertOutcome::CodeTaken`]), never by a check-then-act
/// step in callers. Both lookup operations are exact-match and backed by
/// indices, so they are effectively constant-time relative to table size.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Attempts to persist a new mapping under `code`.
    ///
    /// Insertion is keyed only on code uniqueness: a duplicate `url` must
    /// not fail (the same URL may race its way to two codes, which is
    /// accepted).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors. A taken code is
    /// not an error; it is reported as [`InsertOutcome::CodeTaken`].
    async fn insert(&self, code: &str, url: &str) -> Result<InsertOutcome, AppError>;

    /// Finds a mapping by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` if found
    /// - `Ok(None)` if not found (callers map this to a 404, not an error)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Finds an existing mapping for `url` by exact match.
    ///
    /// Runs before any new-code generation so that repeated shorten requests
    /// for a previously-seen URL stay idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_url(&self, url: &str) -> Result<Option<UrlMapping>, AppError>;
}
