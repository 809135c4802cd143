//! Shared search/fetch logic behind both transport adapters.
//!
//! Both the REST handlers and the MCP tools call into this one
//! service, so the two surfaces cannot drift apart: they serialize
//! the same payload values and differ only in the outer envelope.
//!
//! Both operations are total; every failure becomes a structured
//! `error` field in the payload.

use crate::core::gateway::StudentGateway;
use crate::core::normalize;
use crate::core::query;
use crate::core::types::{FetchPayload, QueryParams, SearchPayload};
use std::sync::Arc;
use tracing::{debug, info};

const QUERY_HINT: &str =
    "Try a query like: 'find struggling students of class 7 in math this month'";

/// The student-assistant service both adapters share
pub struct AssistantService {
    gateway: Arc<dyn StudentGateway>,
    default_period: String,
}

impl AssistantService {
    pub fn new(gateway: Arc<dyn StudentGateway>, default_period: String) -> Self {
        Self {
            gateway,
            default_period,
        }
    }

    /// Resolve a free-text query and list struggling students.
    ///
    /// Incomplete queries are rejected locally with a diagnostic and
    /// a usage hint; no backend call is made for them.
    pub async fn search(&self, query: &str) -> SearchPayload {
        let params = query::extract(query);

        let (Some(class_id), Some(subject)) = (params.class_id.clone(), params.subject.clone())
        else {
            debug!("Query rejected as incomplete: {query}");
            return SearchPayload::Incomplete {
                results: vec![],
                error: incomplete_diagnostic(&params),
                hint: QUERY_HINT.to_string(),
            };
        };

        let period = params
            .period
            .unwrap_or_else(|| self.default_period.clone());

        match self
            .gateway
            .struggling_students(&class_id, &subject, &period)
            .await
        {
            Ok(students) => {
                let results = normalize::to_listing(&students);
                info!(
                    "Search resolved to class={class_id} subject={subject} period={period}: \
                     {} students",
                    results.len()
                );
                SearchPayload::Listing {
                    total_students: results.len(),
                    query_params: QueryParams {
                        class_id,
                        subject,
                        period,
                    },
                    results,
                }
            }
            Err(e) => SearchPayload::Failed {
                results: vec![],
                error: e.to_string(),
            },
        }
    }

    /// Fetch the full report for one student
    pub async fn fetch(&self, student_id: &str) -> FetchPayload {
        let record = match self.gateway.student_report(student_id).await {
            Ok(record) => record,
            Err(e) => {
                return FetchPayload::Failed {
                    error: format!("Failed to fetch student: {e}"),
                }
            }
        };

        match normalize::to_detail(record, student_id) {
            Ok(detail) => FetchPayload::Detail(detail),
            Err(e) => FetchPayload::Failed {
                error: format!("Failed to fetch student: {e}"),
            },
        }
    }
}

/// Name exactly the parts that could not be determined
fn incomplete_diagnostic(params: &query::ExtractedParams) -> String {
    let mut missing = Vec::new();
    if params.class_id.is_none() {
        missing.push("a class");
    }
    if params.subject.is_none() {
        missing.push("a subject");
    }
    format!(
        "Could not determine {} from the query",
        missing.join(" and ")
    )
}
