use std::path::PathBuf;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};

use passgate_gate::router::build_router;
use passgate_gate::state::AppState;

use passgate_testing::fixture::Fixture;

fn server_with(codes_path: &str) -> TestServer {
    let state = AppState {
        codes_path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(codes_path),
    };
    TestServer::new(build_router(state)).expect("failed to build test server")
}

fn server() -> TestServer {
    server_with("testdata/codes.json")
}

fn contract(outcome: &str) -> Value {
    Fixture::load("contracts/http/gate/validate.json")[outcome].clone()
}

// ── POST /validate ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_validate_code_with_surrounding_whitespace_and_lowercase() {
    let server = server();

    let resp = server.post("/validate").json(&json!({ "code": " abc123 " })).await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(resp.json::<Value>(), contract("ok"));
}

#[tokio::test]
async fn should_reject_missing_code_with_400() {
    let server = server();

    let resp = server.post("/validate").json(&json!({})).await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>(), contract("missing_code"));
}

#[tokio::test]
async fn should_reject_non_string_code_with_400() {
    let server = server();

    let resp = server.post("/validate").json(&json!({ "code": 123 })).await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>(), contract("missing_code"));
}

#[tokio::test]
async fn should_reject_unknown_code_with_401() {
    let server = server();

    let resp = server.post("/validate").json(&json!({ "code": "XYZ999" })).await;

    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp.json::<Value>(), contract("invalid_code"));
}

#[tokio::test]
async fn should_reject_expired_code_with_401() {
    let server = server();

    let resp = server.post("/validate").json(&json!({ "code": "oldcode99" })).await;

    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp.json::<Value>(), contract("code_expired"));
}

#[tokio::test]
async fn should_answer_405_for_non_post_methods() {
    let server = server();

    let resp = server.get("/validate").await;

    assert_eq!(resp.status_code(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn should_answer_500_with_generic_body_when_store_unreadable() {
    let server = server_with("testdata/does-not-exist.json");

    let resp = server.post("/validate").json(&json!({ "code": "ABC123" })).await;

    assert_eq!(resp.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.json::<Value>(), contract("server_error"));
}

#[tokio::test]
async fn should_validate_same_code_twice() {
    let server = server();

    for _ in 0..2 {
        let resp = server.post("/validate").json(&json!({ "code": "ABC123" })).await;
        assert_eq!(resp.status_code(), StatusCode::OK);
    }
}

// ── Health ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_answer_health_checks() {
    let server = server();

    assert_eq!(server.get("/healthz").await.status_code(), StatusCode::OK);
    assert_eq!(server.get("/readyz").await.status_code(), StatusCode::OK);
}
