//! Error types and error handling for the Vallam adapter.
//!
//! This module defines the error types used throughout the
//! application. Backend failures are modelled separately as
//! `GatewayError` values (see `core/gateway.rs`); protocol-specific
//! error handling (MCP error codes) is handled in the respective
//! adapter modules.

use thiserror::Error;

/// Result type alias for Vallam operations
pub type Result<T> = std::result::Result<T, VallamError>;

/// Main error type for the Vallam service
#[derive(Error, Debug)]
pub enum VallamError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("malformed student record: {0}")]
    MalformedRecord(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl VallamError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this error stems from data the backend sent us
    pub fn is_malformed_record(&self) -> bool {
        matches!(self, VallamError::MalformedRecord(_))
    }
}
