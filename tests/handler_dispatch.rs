//! Dispatch tests driving the router with raw request targets that contain
//! characters a test client might otherwise normalize away.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use makeshort::routes::app_router;
use sqlx::SqlitePool;
use tower::ServiceExt;

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[sqlx::test]
async fn test_shorten_target_with_raw_scheme_and_slashes(pool: SqlitePool) {
    let app = app_router(common::create_test_state(pool.clone()));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/makeshort/http://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    let code = body.strip_prefix("localhost:5000/").unwrap();
    assert_eq!(
        common::fetch_original_url(&pool, code).await.as_deref(),
        Some("http://example.com")
    );
}

#[sqlx::test]
async fn test_raw_target_round_trip(pool: SqlitePool) {
    let state = common::create_test_state(pool);

    let shortened = app_router(state.clone())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/makeshort/http://example.com/deep/path")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(shortened.status(), StatusCode::OK);

    let body = body_text(shortened).await;
    let code = body.strip_prefix("localhost:5000/").unwrap().to_string();

    let resolved = app_router(state)
        .oneshot(
            Request::builder()
                .uri(format!("/{code}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resolved.status(), StatusCode::OK);
    assert_eq!(body_text(resolved).await, "http://example.com/deep/path");
}
