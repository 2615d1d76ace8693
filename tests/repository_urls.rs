mod common;

use makeshort::domain::repositories::{InsertOutcome, UrlRepository};
use makeshort::infrastructure::persistence::SqliteUrlRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

fn create_repository(pool: SqlitePool) -> SqliteUrlRepository {
    SqliteUrlRepository::new(Arc::new(pool))
}

#[sqlx::test]
async fn test_insert_persists_mapping(pool: SqlitePool) {
    let repo = create_repository(pool);

    let outcome = repo.insert("aZ3xQ7p", "http://example.com").await.unwrap();

    let InsertOutcome::Inserted(mapping) = outcome else {
        panic!("expected insert to succeed");
    };
    assert!(mapping.id > 0);
    assert_eq!(mapping.short_code, "aZ3xQ7p");
    assert_eq!(mapping.original_url, "http://example.com");
}

#[sqlx::test]
async fn test_insert_reports_taken_code(pool: SqlitePool) {
    let repo = create_repository(pool.clone());

    repo.insert("aZ3xQ7p", "http://example.com").await.unwrap();
    let outcome = repo.insert("aZ3xQ7p", "http://other.com").await.unwrap();

    assert!(matches!(outcome, InsertOutcome::CodeTaken));

    // The original mapping must be untouched.
    assert_eq!(
        common::fetch_original_url(&pool, "aZ3xQ7p").await.as_deref(),
        Some("http://example.com")
    );
}

#[sqlx::test]
async fn test_insert_allows_duplicate_url_under_new_code(pool: SqlitePool) {
    let repo = create_repository(pool);

    let first = repo.insert("codeAAA", "http://example.com").await.unwrap();
    let second = repo.insert("codeBBB", "http://example.com").await.unwrap();

    assert!(matches!(first, InsertOutcome::Inserted(_)));
    assert!(matches!(second, InsertOutcome::Inserted(_)));
}

#[sqlx::test]
async fn test_find_by_code(pool: SqlitePool) {
    common::create_test_mapping(&pool, "aZ3xQ7p", "http://example.com").await;
    let repo = create_repository(pool);

    let mapping = repo.find_by_code("aZ3xQ7p").await.unwrap().unwrap();
    assert_eq!(mapping.original_url, "http://example.com");

    assert!(repo.find_by_code("missing").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_find_by_url(pool: SqlitePool) {
    common::create_test_mapping(&pool, "aZ3xQ7p", "http://example.com").await;
    let repo = create_repository(pool);

    let mapping = repo.find_by_url("http://example.com").await.unwrap().unwrap();
    assert_eq!(mapping.short_code, "aZ3xQ7p");

    assert!(repo.find_by_url("http://unseen.com").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_insert_accepts_empty_url(pool: SqlitePool) {
    let repo = create_repository(pool);

    let outcome = repo.insert("emptyyy", "").await.unwrap();
    assert!(matches!(outcome, InsertOutcome::Inserted(_)));

    let mapping = repo.find_by_url("").await.unwrap().unwrap();
    assert_eq!(mapping.short_code, "emptyyy");
}
