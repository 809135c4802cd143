//! Unified service container for Vallam
//!
//! Provides shared access to all core services.

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::gateway::{HttpStudentGateway, StudentGateway};
use crate::core::logic::AssistantService;
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Shared search/fetch logic
    pub assistant: Arc<AssistantService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration, wiring the HTTP gateway
    pub fn new(config: Config) -> Result<Self> {
        let gateway: Arc<dyn StudentGateway> = Arc::new(HttpStudentGateway::new(&config.backend)?);
        Ok(Self::with_gateway(config, gateway))
    }

    /// Create services around an externally supplied gateway.
    ///
    /// Tests inject doubles here; both adapters stay unchanged.
    pub fn with_gateway(config: Config, gateway: Arc<dyn StudentGateway>) -> Self {
        let assistant = Arc::new(AssistantService::new(
            gateway,
            config.query.default_period.clone(),
        ));

        Self {
            assistant,
            config: Arc::new(config),
        }
    }
}
