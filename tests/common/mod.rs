#![allow(dead_code)]

use makeshort::application::services::ShortenService;
use makeshort::infrastructure::persistence::SqliteUrlRepository;
use makeshort::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

pub const TEST_SHORT_DOMAIN: &str = "localhost:5000";

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let pool = Arc::new(pool);
    let url_repository = Arc::new(SqliteUrlRepository::new(pool));
    let shorten_service = Arc::new(ShortenService::new(url_repository.clone(), 7, 10));

    AppState {
        shorten_service,
        url_repository,
        short_domain: TEST_SHORT_DOMAIN.to_string(),
    }
}

pub async fn create_test_mapping(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query("INSERT INTO urls (short_code, original_url) VALUES (?1, ?2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn fetch_original_url(pool: &SqlitePool, code: &str) -> Option<String> {
    sqlx::query_scalar("SELECT original_url FROM urls WHERE short_code = ?1")
        .bind(code)
        .fetch_optional(pool)
        .await
        .unwrap()
}
