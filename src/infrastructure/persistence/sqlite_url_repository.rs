//! SQLite implementation of the URL mapping repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{InsertOutcome, UrlRepository};
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_code;

/// SQLite repository for URL mapping storage and retrieval.
///
/// Uniqueness of the code column is enforced by the `UNIQUE` constraint on
/// `urls.short_code`; the engine checks it atomically inside the insert, so
/// concurrent inserts of the same candidate code cannot both succeed.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn insert(&self, code: &str, url: &str) -> Result<InsertOutcome, AppError> {
        let inserted = sqlx::query_as::<_, UrlMapping>(
            "INSERT INTO urls (short_code, original_url)
             VALUES (?1, ?2)
             RETURNING id, short_code, original_url, created_at",
        )
        .bind(code)
        .bind(url)
        .fetch_one(self.pool.as_ref())
        .await;

        match inserted {
            Ok(mapping) => Ok(InsertOutcome::Inserted(mapping)),
            Err(e) if is_unique_violation_on_code(&e) => Ok(InsertOutcome::CodeTaken),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlMapping>, AppError> {
        let mapping = sqlx::query_as::<_, UrlMapping>(
            "SELECT id, short_code, original_url, created_at
             FROM urls
             WHERE short_code = ?1",
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<UrlMapping>, AppError> {
        let mapping = sqlx::query_as::<_, UrlMapping>(
            "SELECT id, short_code, original_url, created_at
             FROM urls
             WHERE original_url = ?1
             LIMIT 1",
        )
        .bind(url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }
}
