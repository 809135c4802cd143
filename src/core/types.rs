//! Core data types for the Vallam adapter.
//!
//! This module defines all data structures used throughout the
//! application: the raw backend record shape, the two normalized
//! output shapes (listing and detail), and the payloads returned
//! by the shared search/fetch logic.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A student record as returned by the upstream backend.
///
/// The backend owns this shape. No field is guaranteed to be
/// present, and unknown fields must survive a round trip so the
/// fetch path can surface the record as received.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Backend identifier (number or string, backend's choice)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    /// Student display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Class identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_id: Option<Value>,

    /// Subject the record refers to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Score value (number or string, backend's choice)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Value>,

    /// Record date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Value>,

    /// Any additional fields the backend sends
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A compact, browse-oriented entry in search results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultEntry {
    /// Student name ("Unknown" when the backend omitted it)
    pub name: String,

    /// Class identifier ("N/A" when omitted)
    pub class: Value,

    /// Subject ("N/A" when omitted)
    pub subject: Value,

    /// Score ("N/A" when omitted)
    pub score: Value,

    /// Record date ("N/A" when omitted)
    pub date: Value,

    /// Profile URL derived from the name
    pub url: String,
}

/// A full single-student result returned by fetch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchResult {
    /// The requested student id, echoed back
    pub id: String,

    /// Student name from the report
    pub title: String,

    /// The backend report as received
    pub data: StudentRecord,

    /// Profile URL for the student
    pub url: String,
}

/// Structured parameters resolved against a search query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    pub class_id: String,
    pub subject: String,
    pub period: String,
}

/// Payload returned by the shared search logic.
///
/// One of three wire shapes: the query could not be resolved, the
/// backend call failed, or a normalized listing. Untagged so each
/// variant serializes as its bare object.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SearchPayload {
    /// Query missing class and/or subject; no backend call was made
    Incomplete {
        results: Vec<SearchResultEntry>,
        error: String,
        hint: String,
    },

    /// The backend call failed
    Failed {
        results: Vec<SearchResultEntry>,
        error: String,
    },

    /// Normalized listing of struggling students
    Listing {
        results: Vec<SearchResultEntry>,
        query_params: QueryParams,
        total_students: usize,
    },
}

/// Payload returned by the shared fetch logic
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum FetchPayload {
    /// The report could not be retrieved or was malformed
    Failed { error: String },

    /// Full student detail
    Detail(FetchResult),
}

/// Request body for `POST /mcp/search`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text search query
    pub query: String,

    /// Caller-supplied variables; accepted and ignored
    #[serde(default)]
    pub variables: Map<String, Value>,
}

/// Response body for `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

impl HealthResponse {
    /// The fixed liveness body; independent of backend reachability
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: "vallam-mcp-server".to_string(),
        }
    }
}
