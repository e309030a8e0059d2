//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::pricing::PricingEngine;
use crate::services::quote::{Notifier, QuoteService};
use crate::utils::error::Result;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc; cloning the state per worker is cheap.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Pricing engine built from the pricing section
    pub engine: Arc<PricingEngine>,
    /// Quote, order and contact handling
    pub quotes: Arc<QuoteService>,
}

impl AppState {
    /// Create application state with the configured notifier
    pub fn new(config: Config) -> Result<Self> {
        let engine = Arc::new(PricingEngine::new(config.pricing().clone())?);
        let quotes = QuoteService::from_config(engine.clone(), config.notifications().clone());
        Ok(Self {
            config: Arc::new(config),
            engine,
            quotes: Arc::new(quotes),
        })
    }

    /// Create application state with an explicit notifier
    pub fn with_notifier(config: Config, notifier: Arc<dyn Notifier>) -> Result<Self> {
        let engine = Arc::new(PricingEngine::new(config.pricing().clone())?);
        let quotes = QuoteService::new(engine.clone(), notifier, config.notifications().clone());
        Ok(Self {
            config: Arc::new(config),
            engine,
            quotes: Arc::new(quotes),
        })
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
