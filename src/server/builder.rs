//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function for automatic configuration loading.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::server::state::AppState;
use crate::services::quote::Notifier;
use crate::utils::error::{Result, ServiceError};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Replace the notifier selected by configuration
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| ServiceError::Config("Configuration is required".to_string()))?;

        let state = match self.notifier {
            Some(notifier) => AppState::with_notifier(config, notifier)?,
            None => AppState::new(config)?,
        };
        Ok(HttpServer::with_state(state))
    }
}

/// Load configuration from `config_path` and serve until shutdown
pub async fn run_server<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config = Config::load(config_path).await?;
    run_with_config(config).await
}

/// Serve with an already loaded configuration
pub async fn run_with_config(config: Config) -> Result<()> {
    info!("Starting mailbox quote service v{}", crate::VERSION);

    let server = ServerBuilder::new().with_config(config).build()?;
    let pricing = server.state().engine.config();
    info!(
        tiers = pricing.tiers.len(),
        packages = pricing.packages.len(),
        currency = %pricing.currency,
        "Pricing table loaded"
    );
    info!("API endpoints:");
    info!("   GET  /health");
    info!("   GET  /api/v1/pricing/tiers");
    info!("   GET  /api/v1/pricing/packages");
    info!("   GET  /api/v1/pricing/quote");
    info!("   POST /api/v1/pricing/quote");
    info!("   POST /api/v1/orders");
    info!("   POST /api/v1/contact");

    server.start().await
}
