// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use std::sync::Arc;

use blog_core::application::services::ApplicationServices;
use blog_core::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use blog_core::infrastructure::repositories::InMemoryArticleRepository;
use blog_core::presentation::http::{routes::build_router, state::HttpState};

pub fn build_test_state_with(
    write: Arc<dyn ArticleWriteRepository>,
    read: Arc<dyn ArticleReadRepository>,
) -> HttpState {
    let ids: Arc<dyn blog_core::application::ports::util::IdGenerator> =
        Arc::new(mocks::SequentialIdGenerator::default());
    let services = Arc::new(ApplicationServices::new(write, read, ids));
    HttpState { services }
}

/// Router backed by a fresh in-memory store.
pub fn make_test_router() -> axum::Router {
    let repo = Arc::new(InMemoryArticleRepository::new());
    let state = build_test_state_with(repo.clone(), repo);
    build_router(state, &[])
}

pub fn make_test_router_with(
    write: Arc<dyn ArticleWriteRepository>,
    read: Arc<dyn ArticleReadRepository>,
) -> axum::Router {
    build_router(build_test_state_with(write, read), &[])
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Assert the status, check the content type, and return the parsed JSON body.
pub async fn read_json(resp: axum::response::Response, expected_status: StatusCode) -> Value {
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    if status != expected_status {
        let s = String::from_utf8_lossy(&body_bytes);
        panic!("expected {expected_status}, got {status}: {s}");
    }
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    let json = read_json(resp, expected_status).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
