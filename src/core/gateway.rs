//! Backend gateway for the upstream core app.
//!
//! All student data lives in the upstream backend; this module is
//! the only place that touches the network. Every failure mode is
//! converted into a `GatewayError` value at this boundary so callers
//! never see a transport exception.
//!
//! The `StudentGateway` trait is the seam for test doubles.

use crate::core::config::BackendConfig;
use crate::core::error::{Result, VallamError};
use crate::core::types::StudentRecord;
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Failure of a backend call, as a value.
///
/// Network-class failures and data/logic-class failures stay
/// distinguishable for observability.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("Core app unavailable: backend base URL is not configured")]
    NotConfigured,

    #[error("Core app unavailable: {0}")]
    Unavailable(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Read access to the upstream student data
#[async_trait]
pub trait StudentGateway: Send + Sync {
    /// Query struggling students for a class/subject/period
    async fn struggling_students(
        &self,
        class_id: &str,
        subject: &str,
        period: &str,
    ) -> std::result::Result<Vec<StudentRecord>, GatewayError>;

    /// Fetch the full report for one student
    async fn student_report(
        &self,
        student_id: &str,
    ) -> std::result::Result<StudentRecord, GatewayError>;
}

/// Wire shape of the struggling-students response
#[derive(Debug, Deserialize)]
struct StrugglingResponse {
    #[serde(default)]
    students: Vec<StudentRecord>,
}

/// Gateway issuing authenticated HTTP calls to the core app.
///
/// One attempt per logical call, bounded by the client timeout;
/// retries are the caller's concern.
pub struct HttpStudentGateway {
    client: reqwest::Client,
    base_url: Option<String>,
    auth_token: Option<String>,
}

impl HttpStudentGateway {
    pub fn new(backend: &BackendConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(backend.timeout_secs))
            .build()
            .map_err(|e| VallamError::ConfigError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: backend.base_url.clone(),
            auth_token: backend.auth_token.clone(),
        })
    }

    /// Issue one authenticated GET and decode the JSON body.
    ///
    /// Transport failures and error statuses map to `Unavailable`;
    /// a body that fails to decode maps to `Unexpected`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> std::result::Result<T, GatewayError> {
        let base = self.base_url.as_deref().ok_or(GatewayError::NotConfigured)?;
        let url = format!("{}{}", base.trim_end_matches('/'), path);
        debug!("Backend GET {url}");

        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = &self.auth_token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = request.send().await.map_err(|e| {
            warn!("Backend call failed: {e}");
            GatewayError::Unavailable(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Backend returned HTTP {status} for {url}");
            return Err(GatewayError::Unavailable(format!(
                "backend returned HTTP {status}"
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| GatewayError::Unexpected(format!("failed to decode backend response: {e}")))
    }
}

#[async_trait]
impl StudentGateway for HttpStudentGateway {
    async fn struggling_students(
        &self,
        class_id: &str,
        subject: &str,
        period: &str,
    ) -> std::result::Result<Vec<StudentRecord>, GatewayError> {
        let response: StrugglingResponse = self
            .get_json(
                "/api/v1/assistant/students/struggling",
                &[
                    ("class_id", class_id),
                    ("subject", subject),
                    ("period", period),
                ],
            )
            .await?;

        Ok(response.students)
    }

    async fn student_report(
        &self,
        student_id: &str,
    ) -> std::result::Result<StudentRecord, GatewayError> {
        self.get_json(
            &format!("/api/v1/assistant/student/{student_id}/report"),
            &[],
        )
        .await
    }
}
