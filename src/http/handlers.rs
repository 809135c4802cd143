//! HTTP request handlers for the Vallam REST API
//!
//! Implements handlers for the 3 REST endpoints: health, search,
//! and fetch. The handlers are thin bindings over the shared
//! `AssistantService`; every payload they return is also what the
//! MCP tools serialize into their envelopes.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::core::services::Services;
use crate::core::types::{FetchPayload, HealthResponse, SearchPayload, SearchRequest};

/// Health check handler
///
/// Liveness only: the fixed body is returned regardless of backend
/// reachability.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::healthy())
}

/// Search handler
///
/// Resolves the free-text query and lists struggling students.
/// Incomplete queries come back with an `error` and `hint`; backend
/// failures come back with an `error`. Always a 200 with a
/// well-formed JSON body.
pub async fn search_handler(
    State(services): State<Arc<Services>>,
    Json(req): Json<SearchRequest>,
) -> Json<SearchPayload> {
    Json(services.assistant.search(&req.query).await)
}

/// Fetch handler
///
/// Returns the full report for one student, or a payload with a
/// structured `error` field.
pub async fn fetch_handler(
    State(services): State<Arc<Services>>,
    Path(student_id): Path<String>,
) -> Json<FetchPayload> {
    Json(services.assistant.fetch(&student_id).await)
}
