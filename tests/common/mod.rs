// ABOUTME: Shared test fixtures for integration tests
// ABOUTME: In-memory database setup and compact HTTP helpers over tower oneshot

#![allow(dead_code, clippy::unwrap_used)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use recipe_manager::database::Database;
use tower::ServiceExt;

/// Create a migrated in-memory database
pub async fn test_database() -> Database {
    Database::new("sqlite::memory:").await.unwrap()
}

/// Execute a request against a router and decode the JSON body (if any)
async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_string(&json).unwrap())
        }
        None => Body::empty(),
    };

    let response = app
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// GET a URI
pub async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, Method::GET, uri, None).await
}

/// POST a JSON body
pub async fn post_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send(app, Method::POST, uri, Some(body)).await
}

/// PUT a JSON body
pub async fn put_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

/// DELETE a URI
pub async fn delete(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, Method::DELETE, uri, None).await
}
