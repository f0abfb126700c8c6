//! Integration tests for the survey API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. This validates handler logic, routing and
//! header stamping without needing a live network connection.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use survey_api::router::build_router;
use survey_api::state::AppState;
use tower::ServiceExt;

fn make_router() -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new());
    (build_router(Arc::clone(&state)), state)
}

async fn send(router: &Router, method: Method, path: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    router.clone().oneshot(request).await.unwrap()
}

async fn body_to_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn assert_cors(response: &Response) {
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "GET, POST, OPTIONS");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_list_empty_store() {
    let (router, _) = make_router();

    let response = send(&router, Method::GET, "/api/surveys", "").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "application/json");
    assert_cors(&response);
    assert_eq!(body_to_string(response).await, "[]");
}

#[tokio::test]
async fn test_create_returns_record_with_id() {
    let (router, _) = make_router();

    let response = send(
        &router,
        Method::POST,
        "/api/surveys",
        r#"{"name":"Alice","age":30}"#,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "application/json");
    assert_cors(&response);
    assert_eq!(
        body_to_string(response).await,
        r#"{"name":"Alice","age":30,"id":1}"#
    );
}

#[tokio::test]
async fn test_create_list_and_stats_scenario() {
    let (router, _) = make_router();

    send(
        &router,
        Method::POST,
        "/api/surveys",
        r#"{"name":"Alice","age":30}"#,
    )
    .await;
    let bob = send(&router, Method::POST, "/api/surveys", r#"{"name":"Bob"}"#).await;
    assert_eq!(body_to_string(bob).await, r#"{"name":"Bob","id":2}"#);

    let list = send(&router, Method::GET, "/api/surveys", "").await;
    assert_eq!(list.status(), StatusCode::OK);
    assert_eq!(
        body_to_string(list).await,
        r#"[{"name":"Bob","id":2},{"name":"Alice","age":30,"id":1}]"#
    );

    let stats = send(&router, Method::GET, "/api/stats", "").await;
    assert_eq!(stats.status(), StatusCode::OK);
    assert_eq!(stats.headers()["content-type"], "application/json");
    assert_cors(&stats);
    assert_eq!(body_to_string(stats).await, r#"{"total":2}"#);
}

#[tokio::test]
async fn test_create_without_content_type() {
    let (router, state) = make_router();

    let request = Request::post("/api/surveys")
        .body(Body::from(r#"{"email":"a@b.c"}"#))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(state.store.count().await, 1);
}

#[tokio::test]
async fn test_malformed_body_is_accepted_best_effort() {
    let (router, state) = make_router();

    let response = send(&router, Method::POST, "/api/surveys", "not json at all").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_to_string(response).await, r#"{"id":1}"#);
    assert_eq!(state.store.count().await, 1);
}

#[tokio::test]
async fn test_empty_body_creates_bare_record() {
    let (router, _) = make_router();

    let response = send(&router, Method::POST, "/api/surveys", "").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_to_string(response).await, r#"{"id":1}"#);
}

#[tokio::test]
async fn test_client_id_is_overridden() {
    let (router, _) = make_router();

    let response = send(
        &router,
        Method::POST,
        "/api/surveys",
        r#"{"id":77,"name":"Eve"}"#,
    )
    .await;

    assert_eq!(body_to_string(response).await, r#"{"id":1,"name":"Eve"}"#);
}

#[tokio::test]
async fn test_numeric_literals_round_trip_unchanged() {
    let (router, _) = make_router();

    let response = send(
        &router,
        Method::POST,
        "/api/surveys",
        r#"{"phone":12345678901234567890123,"big":18446744073709551616,"price":1.50,"n":1e2,"z":-0}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_to_string(response).await,
        r#"{"phone":12345678901234567890123,"big":18446744073709551616,"price":1.50,"n":1e2,"z":-0,"id":1}"#
    );

    let list = send(&router, Method::GET, "/api/surveys", "").await;
    assert_eq!(
        body_to_string(list).await,
        r#"[{"phone":12345678901234567890123,"big":18446744073709551616,"price":1.50,"n":1e2,"z":-0,"id":1}]"#
    );
}

#[tokio::test]
async fn test_body_larger_than_two_megabytes_is_accepted() {
    let (router, state) = make_router();
    let blob = "x".repeat(3_145_728);

    let response = send(
        &router,
        Method::POST,
        "/api/surveys",
        &format!(r#"{{"blob":"{blob}"}}"#),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(state.store.count().await, 1);
    let record = state.store.list().await;
    let stored = record.first().unwrap().field("blob").unwrap().to_string();
    assert_eq!(stored.len(), blob.len());
}

#[tokio::test]
async fn test_response_escapes_backslashes() {
    let (router, _) = make_router();

    let response = send(
        &router,
        Method::POST,
        "/api/surveys",
        r#"{"note":"back\slash"}"#,
    )
    .await;

    let json: Value = serde_json::from_str(&body_to_string(response).await).unwrap();
    assert_eq!(json["note"], "back\\slash");
    assert_eq!(json["id"], 1);
}

#[tokio::test]
async fn test_options_returns_204_with_cors() {
    let (router, _) = make_router();

    for path in ["/api/surveys", "/api/stats", "/api/stats/industry"] {
        let response = send(&router, Method::OPTIONS, path, "").await;

        assert_eq!(response.status(), StatusCode::NO_CONTENT, "{path}");
        assert_cors(&response);
        assert!(response.headers().get("content-type").is_none());
        assert!(body_to_string(response).await.is_empty());
    }
}

#[tokio::test]
async fn test_unsupported_methods_return_405() {
    let (router, state) = make_router();

    let cases = [
        (Method::PUT, "/api/surveys"),
        (Method::DELETE, "/api/surveys"),
        (Method::PATCH, "/api/surveys"),
        (Method::HEAD, "/api/surveys"),
        (Method::POST, "/api/stats"),
        (Method::PUT, "/api/stats"),
        (Method::DELETE, "/api/stats/orgSize"),
    ];

    for (method, path) in cases {
        let response = send(&router, method.clone(), path, r#"{"a":1}"#).await;

        assert_eq!(
            response.status(),
            StatusCode::METHOD_NOT_ALLOWED,
            "{method} {path}"
        );
        assert_cors(&response);
        assert!(body_to_string(response).await.is_empty());
    }

    assert_eq!(state.store.count().await, 0);
}

#[tokio::test]
async fn test_field_breakdown() {
    let (router, _) = make_router();

    for body in [
        r#"{"industry":"Finance","orgSize":"1-10"}"#,
        r#"{"industry":"Retail","orgSize":"1-10"}"#,
        r#"{"industry":"Finance","orgSize":"51-200"}"#,
    ] {
        send(&router, Method::POST, "/api/surveys", body).await;
    }

    let response = send(&router, Method::GET, "/api/stats/industry", "").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response);

    let json: Value = serde_json::from_str(&body_to_string(response).await).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"value": "Finance", "count": 2, "percent": 67},
            {"value": "Retail", "count": 1, "percent": 33},
        ])
    );
}

#[tokio::test]
async fn test_breakdown_of_unknown_field_is_empty() {
    let (router, _) = make_router();
    send(&router, Method::POST, "/api/surveys", r#"{"a":"b"}"#).await;

    let response = send(&router, Method::GET, "/api/stats/missing", "").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_to_string(response).await, "[]");
}

#[tokio::test]
async fn test_unknown_path_returns_404() {
    let (router, _) = make_router();

    let response = send(&router, Method::GET, "/api/unknown", "").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
