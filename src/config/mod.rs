//! Configuration management for the quote service
//!
//! This module handles loading, validation, and management of all service configuration.

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{Result, ServiceError};
use std::path::Path;
use tracing::{debug, info};

/// Default configuration file location
pub const DEFAULT_CONFIG_PATH: &str = "config/quote.yaml";

/// Main configuration struct for the service
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ServiceError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml_str(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let service: ServiceConfig = serde_yaml::from_str(content)
            .map_err(|e| ServiceError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { service };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables on top of the defaults
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let service = ServiceConfig::from_env()?;
        let config = Self { service };

        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, then apply environment overrides
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if tokio::fs::try_exists(path).await.unwrap_or(false) {
            Self::from_file(path).await?
        } else {
            info!("Config file {:?} not found, using defaults", path);
            Self::default()
        };

        config.service.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.service.server
    }

    /// Get pricing configuration
    pub fn pricing(&self) -> &PricingConfig {
        &self.service.pricing
    }

    /// Get notification configuration
    pub fn notifications(&self) -> &NotificationConfig {
        &self.service.notifications
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.service.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.service
            .server
            .validate()
            .map_err(|e| ServiceError::Config(format!("Server config error: {}", e)))?;

        self.service
            .pricing
            .validate()
            .map_err(|e| ServiceError::Config(format!("Pricing config error: {}", e)))?;

        self.service
            .notifications
            .validate()
            .map_err(|e| ServiceError::Config(format!("Notification config error: {}", e)))?;

        self.service
            .logging
            .validate()
            .map_err(|e| ServiceError::Config(format!("Logging config error: {}", e)))?;

        self.service.server.cors.warn_if_permissive();

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.service = self.service.merge(other.service);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.service)
            .map_err(|e| ServiceError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
