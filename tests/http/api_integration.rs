//! Integration tests for the Vallam REST API
//!
//! Drives the three endpoints through the full router with a
//! scripted gateway behind the shared logic.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt as TowerServiceExt;
use vallam::core::gateway::GatewayError;
use vallam::core::types::HealthResponse;

use crate::common::{sample_records, stub_services, test_app, StubGateway};

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 100_000)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn search_request(query: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/mcp/search")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "query": query }).to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let gateway = Arc::new(StubGateway::unavailable("backend is down"));
    let app = test_app(stub_services(gateway));

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

    let body = axum::body::to_bytes(response.into_body(), 10_000)
        .await
        .unwrap();
    let health: HealthResponse = serde_json::from_slice(&body).unwrap();

    // Liveness body is fixed even with an unreachable backend
    assert_eq!(health.status, "healthy");
    assert_eq!(health.service, "vallam-mcp-server");
}

#[tokio::test]
async fn test_search_endpoint_success() {
    let report = sample_records().remove(0);
    let gateway = Arc::new(StubGateway::with_records(sample_records(), report));
    let app = test_app(stub_services(Arc::clone(&gateway)));

    let response = app
        .oneshot(search_request(
            "find struggling students of class 7 in math this month",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let payload = body_json(response).await;

    assert_eq!(payload["total_students"], json!(2));
    assert_eq!(payload["query_params"]["class_id"], json!("7"));
    assert_eq!(payload["query_params"]["subject"], json!("math"));
    assert_eq!(payload["query_params"]["period"], json!("this_month"));

    let results = payload["results"].as_array().unwrap();
    assert_eq!(results[0]["name"], json!("Jane Doe"));
    assert_eq!(results[0]["url"], json!("/students/Jane_Doe"));
    // The sparse record got sentinel defaults
    assert_eq!(results[1]["name"], json!("Unknown"));
    assert_eq!(results[1]["score"], json!("N/A"));

    assert_eq!(gateway.struggling_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_search_endpoint_incomplete_query_skips_backend() {
    let gateway = Arc::new(StubGateway::unavailable("must not be called"));
    let app = test_app(stub_services(Arc::clone(&gateway)));

    let response = app
        .oneshot(search_request("who is doing badly?"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let payload = body_json(response).await;

    assert_eq!(payload["results"], json!([]));
    assert!(!payload["error"].as_str().unwrap().is_empty());
    assert!(!payload["hint"].as_str().unwrap().is_empty());
    assert_eq!(gateway.struggling_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_search_endpoint_backend_down() {
    let gateway = Arc::new(StubGateway::unavailable("connection refused"));
    let app = test_app(stub_services(gateway));

    let response = app.oneshot(search_request("class 7 math")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let payload = body_json(response).await;

    assert_eq!(payload["results"], json!([]));
    assert_eq!(
        payload["error"],
        json!("Core app unavailable: connection refused")
    );
    assert!(payload.get("hint").is_none());
}

#[tokio::test]
async fn test_fetch_endpoint_success() {
    let report = sample_records().remove(0);
    let gateway = Arc::new(StubGateway::with_records(vec![], report));
    let app = test_app(stub_services(gateway));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/mcp/fetch/42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let payload = body_json(response).await;

    assert_eq!(payload["id"], json!("42"));
    assert_eq!(payload["title"], json!("Jane Doe"));
    assert_eq!(payload["url"], json!("/students/42"));
    assert_eq!(payload["data"]["score"], json!(41));
}

#[tokio::test]
async fn test_fetch_endpoint_backend_down() {
    let gateway = Arc::new(StubGateway::unavailable("timed out"));
    let app = test_app(stub_services(gateway));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/mcp/fetch/42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let payload = body_json(response).await;

    assert_eq!(
        payload["error"],
        json!("Failed to fetch student: Core app unavailable: timed out")
    );
}

#[tokio::test]
async fn test_fetch_endpoint_malformed_report_is_recovered() {
    let nameless: vallam::core::types::StudentRecord =
        serde_json::from_value(json!({ "id": 42, "score": 41 })).unwrap();
    let gateway = Arc::new(StubGateway::new(Ok(vec![]), Ok(nameless)));
    let app = test_app(stub_services(gateway));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/mcp/fetch/42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Still a 200 with a structured error, not a crash
    assert_eq!(response.status(), StatusCode::OK);
    let payload = body_json(response).await;
    assert!(payload["error"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn test_search_endpoint_repeated_calls_identical() {
    let report = sample_records().remove(0);
    let gateway = Arc::new(StubGateway::with_records(sample_records(), report));
    let app = test_app(stub_services(gateway));

    let first = body_json(
        app.clone()
            .oneshot(search_request("class 7 math"))
            .await
            .unwrap(),
    )
    .await;
    let second = body_json(app.oneshot(search_request("class 7 math")).await.unwrap()).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_search_endpoint_unexpected_gateway_error() {
    // Unexpected-class gateway faults surface verbatim too
    let gateway = Arc::new(StubGateway::new(
        Err(GatewayError::Unexpected("decode failure".into())),
        Err(GatewayError::Unexpected("decode failure".into())),
    ));
    let app = test_app(stub_services(gateway));

    let payload = body_json(app.oneshot(search_request("class 7 math")).await.unwrap()).await;
    assert_eq!(payload["error"], json!("Unexpected error: decode failure"));
}
