//! REST / MCP parity tests
//!
//! For the same input and the same gateway behavior, the JSON body
//! of the REST response and the JSON decoded from the MCP tool
//! envelope must be structurally equal, for search and fetch, in
//! success and error cases alike.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt as TowerServiceExt;
use vallam::core::services::Services;
use vallam::mcp::handlers::ProtocolHandlers;
use vallam::mcp::protocol::JsonRpcRequest;

use crate::common::{sample_records, stub_services, test_app, StubGateway};

/// Payload as the REST surface returns it
async fn rest_search(services: Arc<Services>, query: &str) -> Value {
    let app = test_app(services);
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/mcp/search")
                .header("content-type", "application/json")
                .body(Body::from(json!({ "query": query }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), 100_000)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn rest_fetch(services: Arc<Services>, student_id: &str) -> Value {
    let app = test_app(services);
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/mcp/fetch/{student_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), 100_000)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Payload decoded from the MCP tool envelope
async fn mcp_tool_call(services: Arc<Services>, name: &str, arguments: Value) -> Value {
    let handlers = ProtocolHandlers::new(services);
    let response = handlers
        .handle_tools_call(JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            method: "tools/call".to_string(),
            params: Some(json!({ "name": name, "arguments": arguments })),
        })
        .await
        .unwrap();

    assert!(response.error.is_none());
    let result = response.result.unwrap();
    assert_eq!(result["content"][0]["type"], "text");
    serde_json::from_str(result["content"][0]["text"].as_str().unwrap()).unwrap()
}

fn roster_services() -> Arc<Services> {
    let report = sample_records().remove(0);
    stub_services(Arc::new(StubGateway::with_records(
        sample_records(),
        report,
    )))
}

fn down_services() -> Arc<Services> {
    stub_services(Arc::new(StubGateway::unavailable("connection refused")))
}

#[tokio::test]
async fn test_search_parity_success() {
    let services = roster_services();

    let query = "find struggling students of class 7 in math this month";
    let rest = rest_search(Arc::clone(&services), query).await;
    let mcp = mcp_tool_call(services, "search", json!({ "query": query })).await;

    assert_eq!(rest, mcp);
    // Both really carry the listing shape
    assert_eq!(rest["total_students"], json!(2));
}

#[tokio::test]
async fn test_search_parity_incomplete_query() {
    let services = down_services();

    let rest = rest_search(Arc::clone(&services), "hello there").await;
    let mcp = mcp_tool_call(services, "search", json!({ "query": "hello there" })).await;

    assert_eq!(rest, mcp);
    assert!(rest.get("hint").is_some());
}

#[tokio::test]
async fn test_search_parity_backend_down() {
    let services = down_services();

    let rest = rest_search(Arc::clone(&services), "class 7 math").await;
    let mcp = mcp_tool_call(services, "search", json!({ "query": "class 7 math" })).await;

    assert_eq!(rest, mcp);
    assert_eq!(
        rest["error"],
        json!("Core app unavailable: connection refused")
    );
}

#[tokio::test]
async fn test_fetch_parity_success() {
    let services = roster_services();

    let rest = rest_fetch(Arc::clone(&services), "42").await;
    let mcp = mcp_tool_call(services, "fetch", json!({ "student_id": "42" })).await;

    assert_eq!(rest, mcp);
    assert_eq!(rest["title"], json!("Jane Doe"));
}

#[tokio::test]
async fn test_fetch_parity_backend_down() {
    let services = down_services();

    let rest = rest_fetch(Arc::clone(&services), "42").await;
    let mcp = mcp_tool_call(services, "fetch", json!({ "student_id": "42" })).await;

    assert_eq!(rest, mcp);
    assert!(rest["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to fetch student:"));
}
