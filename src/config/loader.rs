//! Configuration loading utilities
//!
//! Environment variable overrides applied on top of file or default configuration.

use super::models::*;
use crate::utils::error::{Result, ServiceError};
use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;
use tracing::debug;

/// Environment variable naming the configuration file
pub const CONFIG_PATH_ENV: &str = "QUOTE_CONFIG";

impl ServiceConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Applying configuration overrides from environment");

        // Server configuration
        if let Some(host) = lookup("QUOTE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("QUOTE_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| ServiceError::Config(format!("Invalid port: {}", e)))?;
        }
        if let Some(workers) = lookup("QUOTE_WORKERS") {
            self.server.workers = Some(
                workers
                    .parse()
                    .map_err(|e| ServiceError::Config(format!("Invalid workers count: {}", e)))?,
            );
        }

        // Pricing configuration
        if let Some(fee) = lookup("QUOTE_SETUP_FEE") {
            self.pricing.setup_fee = Decimal::from_str(fee.trim())
                .map_err(|e| ServiceError::Config(format!("Invalid setup fee: {}", e)))?;
        }
        if let Some(max) = lookup("QUOTE_MAX_MAILBOXES") {
            self.pricing.max_mailboxes = max
                .parse()
                .map_err(|e| ServiceError::Config(format!("Invalid max mailboxes: {}", e)))?;
        }

        // Notification configuration
        if let Some(recipient) = lookup("QUOTE_NOTIFY_RECIPIENT") {
            self.notifications.recipient = recipient;
        }

        // Logging configuration
        if let Some(level) = lookup("QUOTE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(json) = lookup("QUOTE_LOG_JSON") {
            self.logging.json = parse_bool(&json)?;
        }

        Ok(())
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ServiceError::Config(format!("Invalid boolean: {}", other))),
    }
}
