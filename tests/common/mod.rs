//! Shared helpers for the integration tests.
//!
//! Every test gets its own in-memory SQLite store, so tests never see each
//! other's rows.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use tweet_board::{build_router, AppState, Config, Store};

/// A router over a freshly seeded store.
pub async fn seeded_router() -> Router {
    build_router(seeded_state().await)
}

pub async fn seeded_state() -> AppState {
    AppState::from_config(&Config::default()).await.unwrap()
}

/// A connected store with the schema created but no rows.
pub async fn empty_store() -> Store {
    Store::connect(&Config::default()).await.unwrap()
}

/// Sends `GET uri` and returns the status, content type and body.
pub async fn get(router: &Router, uri: &str) -> (StatusCode, String, Vec<u8>) {
    let response = router
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, content_type, bytes.to_vec())
}

pub async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, content_type, body) = get(router, uri).await;
    assert!(
        content_type.contains("application/json"),
        "{uri} returned {content_type}"
    );
    (status, serde_json::from_slice(&body).unwrap())
}

pub async fn get_html(router: &Router, uri: &str) -> (StatusCode, String) {
    let (status, content_type, body) = get(router, uri).await;
    assert!(
        content_type.contains("text/html"),
        "{uri} returned {content_type}"
    );
    (status, String::from_utf8(body).unwrap())
}
