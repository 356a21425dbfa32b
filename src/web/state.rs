//! # Web API Application State
//!
//! Shared state handed to every handler: the web configuration and the request
//! lifecycle service.

use std::sync::Arc;
use tracing::info;

use crate::config::{HelpdeskConfig, WebConfig};
use crate::database::StoreGateway;
use crate::services::RequestService;

/// Shared application state for the web API
#[derive(Clone, Debug)]
pub struct AppState {
    /// Web server configuration
    pub config: Arc<WebConfig>,

    /// Request lifecycle engine
    pub requests: RequestService,

    /// Deployment environment, reported by the health endpoint
    pub environment: Arc<str>,
}

impl AppState {
    pub fn new(config: WebConfig, environment: &str, requests: RequestService) -> Self {
        Self {
            config: Arc::new(config),
            requests,
            environment: Arc::from(environment),
        }
    }

    /// Wire a service over `gateway` using the lifecycle policy from `config`
    pub fn from_config(config: &HelpdeskConfig, gateway: Arc<dyn StoreGateway>) -> Self {
        let policy = config.lifecycle.policy();
        info!(
            policy = ?policy,
            base_path = %config.web.base_path,
            "Creating web API application state"
        );
        Self::new(
            config.web.clone(),
            &config.environment,
            RequestService::new(gateway, policy),
        )
    }
}
