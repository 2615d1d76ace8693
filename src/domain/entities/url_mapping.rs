use chrono::NaiveDateTime;

/// A persisted short code to original URL mapping.
///
/// Mappings are append-only: `short_code` is never reassigned after creation
/// and rows are never updated or deleted in normal operation. A given
/// `original_url`, once mapped, keeps resolving to the same code for the
/// lifetime of the record (barring the accepted concurrent-first-insert race,
/// which may leave two valid codes for one URL).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UrlMapping {
    pub id: i64,
    /// Fixed-length alphanumeric code, unique across all mappings.
    pub short_code: String,
    /// The decoded target, arbitrary length. Not required to be a
    /// well-formed URL.
    pub original_url: String,
    /// Set by the database at insertion, immutable afterwards.
    pub created_at: NaiveDateTime,
}
