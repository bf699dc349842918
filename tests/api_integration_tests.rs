//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use rack_cache::{api::create_router, AppState, Cache};
use serde_json::{json, Value};
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> Router {
    create_router(AppState::new(Cache::new(), 300))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

async fn lookup(app: &Router, collection: &str, key: Value) -> (StatusCode, Value) {
    let uri = format!("/collections/{}/get", collection);
    send(app, "POST", &uri, json!({ "key": key })).await
}

// == SET Endpoint Tests ==

#[tokio::test]
async fn test_set_endpoint_success() {
    let app = create_test_app();

    let (status, json) = send(
        &app,
        "PUT",
        "/collections/stacks",
        json!({"key": "web", "value": {"status": "ok"}, "ttl": 60}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["collection"], "stacks");
    assert_eq!(json["ttl"], 60);
}

#[tokio::test]
async fn test_set_endpoint_uses_default_ttl() {
    let app = create_test_app();

    let (status, json) = send(
        &app,
        "PUT",
        "/collections/stacks",
        json!({"key": "web", "value": 1}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ttl"], 300);
}

#[tokio::test]
async fn test_set_endpoint_rejects_bad_json() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/collections/stacks")
                .header("content-type", "application/json")
                .body(Body::from("not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

// == GET Endpoint Tests ==

#[tokio::test]
async fn test_get_structured_key_any_field_order() {
    let app = create_test_app();

    send(
        &app,
        "PUT",
        "/collections/x",
        json!({"key": {"app": "A", "ver": 1}, "value": "V"}),
    )
    .await;

    let (status, json) = send(
        &app,
        "POST",
        "/collections/x/get",
        json!({"key": {"ver": 1, "app": "A"}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["value"], "V");
}

#[tokio::test]
async fn test_get_zero_ttl_is_not_found() {
    let app = create_test_app();

    send(
        &app,
        "PUT",
        "/collections/c",
        json!({"key": "k", "value": 1, "ttl": 0}),
    )
    .await;
    tokio::time::sleep(std::time::Duration::from_millis(2)).await;

    let (status, json) = send(&app, "POST", "/collections/c/get", json!({"key": "k"})).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_collections_are_isolated() {
    let app = create_test_app();

    send(&app, "PUT", "/collections/a", json!({"key": "k", "value": 1})).await;
    send(&app, "PUT", "/collections/b", json!({"key": "k", "value": 2})).await;

    let (_, a) = send(&app, "POST", "/collections/a/get", json!({"key": "k"})).await;
    let (_, b) = send(&app, "POST", "/collections/b/get", json!({"key": "k"})).await;

    assert_eq!(a["value"], 1);
    assert_eq!(b["value"], 2);
}

// == CLEAR Endpoint Tests ==

#[tokio::test]
async fn test_clear_is_idempotent() {
    let app = create_test_app();

    send(&app, "PUT", "/collections/c", json!({"key": ["web", 1], "value": 1})).await;

    for _ in 0..2 {
        let (status, _) = send(
            &app,
            "POST",
            "/collections/c/clear",
            json!({"key": ["web", 1]}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, _) = send(&app, "POST", "/collections/c/get", json!({"key": ["web", 1]})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_clear_prefix_endpoint() {
    let app = create_test_app();

    for (key, value) in [
        (json!("web-1"), 1),
        (json!("web-2"), 2),
        (json!("worker-1"), 3),
        (json!(["web", 1]), 4),
    ] {
        send(&app, "PUT", "/collections/logs", json!({"key": key, "value": value})).await;
    }

    let (status, json) = send(
        &app,
        "POST",
        "/collections/logs/clear-prefix",
        json!({"prefix": "web"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["prefix"], "web");

    assert_eq!(lookup(&app, "logs", json!("web-1")).await.0, StatusCode::NOT_FOUND);
    assert_eq!(lookup(&app, "logs", json!("web-2")).await.0, StatusCode::NOT_FOUND);
    assert_eq!(lookup(&app, "logs", json!("worker-1")).await.1["value"], 3);
    assert_eq!(lookup(&app, "logs", json!(["web", 1])).await.1["value"], 4);
}

// == HEALTH Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}
