//! Configuration management for the Vallam adapter.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.
//!
//! The backend env vars keep their original names (`CORE_APP_URL`,
//! `SERVICE_AUTH_TOKEN`) so existing deployments keep working.

use crate::core::error::{Result, VallamError};
use crate::core::query::PERIOD_LABELS;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Upstream backend configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Base URL of the core app; no backend calls are attempted
    /// while this is unset
    #[serde(default)]
    pub base_url: Option<String>,

    /// Static bearer credential passed through to the backend
    #[serde(default)]
    pub auth_token: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Query interpretation configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    /// Period applied when the query names none
    #[serde(default = "default_period")]
    pub default_period: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8010
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_period() -> String {
    "last_month".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            auth_token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_period: default_period(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| VallamError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// File resolution order:
    /// 1. `VALLAM_CONFIG` env var
    /// 2. `./vallam.toml`
    /// 3. Defaults
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("VALLAM_CONFIG") {
            Self::from_file(config_path)?
        } else if Path::new("vallam.toml").exists() {
            Self::from_file("vallam.toml")?
        } else {
            Self::default()
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Server configuration
        if let Ok(host) = env::var("VALLAM_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("VALLAM_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Backend configuration (original env names)
        if let Ok(url) = env::var("CORE_APP_URL") {
            self.backend.base_url = Some(url);
        }
        if let Ok(token) = env::var("SERVICE_AUTH_TOKEN") {
            self.backend.auth_token = Some(token);
        }
        if let Ok(timeout) = env::var("VALLAM_BACKEND_TIMEOUT_SECS") {
            if let Ok(t) = timeout.parse() {
                self.backend.timeout_secs = t;
            }
        }

        // Query configuration
        if let Ok(period) = env::var("VALLAM_DEFAULT_PERIOD") {
            self.query.default_period = period;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(VallamError::ConfigError(
                "Server port must be non-zero".to_string(),
            ));
        }

        if self.backend.timeout_secs == 0 {
            return Err(VallamError::ConfigError(
                "Backend timeout must be non-zero".to_string(),
            ));
        }

        if !PERIOD_LABELS.contains(&self.query.default_period.as_str()) {
            return Err(VallamError::ConfigError(format!(
                "Unknown default period '{}' (expected one of: {})",
                self.query.default_period,
                PERIOD_LABELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Log active configuration at startup
    pub fn log_config(&self) {
        tracing::info!("Server: {}:{}", self.server.host, self.server.port);
        match &self.backend.base_url {
            Some(url) => tracing::info!("Backend: {url}"),
            None => tracing::warn!("Backend base URL not configured; all calls will fail fast"),
        }
        tracing::info!(
            "Backend timeout: {}s, auth token {}",
            self.backend.timeout_secs,
            if self.backend.auth_token.is_some() {
                "set"
            } else {
                "not set"
            }
        );
        tracing::info!("Default period: {}", self.query.default_period);
    }
}
