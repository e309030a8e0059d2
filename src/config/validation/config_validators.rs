//! Core configuration validators
//!
//! Validation for the server, CORS, notification and logging sections.

use super::trait_def::Validate;
use crate::config::models::*;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static RECIPIENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+$").expect("Invalid recipient regex")
});

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating service configuration");

        self.server.validate()?;
        self.pricing.validate()?;
        self.notifications.validate()?;
        self.logging.validate()?;

        debug!("Service configuration validation completed");
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating server configuration");

        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err("Worker count must be greater than 0".to_string());
            }
            if workers > 1000 {
                return Err("Worker count seems too high (>1000)".to_string());
            }
        }

        if self.timeout == 0 {
            return Err("Server timeout must be greater than 0".to_string());
        }

        if self.timeout > 3600 {
            return Err("Server timeout should not exceed 1 hour".to_string());
        }

        if self.max_body_size == 0 {
            return Err("Max body size must be greater than 0".to_string());
        }

        if self.max_body_size > 1024 * 1024 * 10 {
            return Err("Max body size should not exceed 10MB".to_string());
        }

        self.cors.validate()
    }
}

impl Validate for CorsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.allows_all_origins() && self.allow_credentials {
            return Err(
                "CORS cannot allow all origins (*) when credentials are enabled".to_string(),
            );
        }

        for method in &self.allowed_methods {
            if method.parse::<actix_web::http::Method>().is_err() {
                return Err(format!("Invalid CORS method: {}", method));
            }
        }

        Ok(())
    }
}

impl Validate for NotificationConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }

        if self.recipient.trim().is_empty() {
            return Err("Notification recipient cannot be empty".to_string());
        }

        if !RECIPIENT_PATTERN.is_match(self.recipient.trim()) {
            return Err(format!(
                "Notification recipient is not an email address: {}",
                self.recipient
            ));
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }

        tracing_subscriber::EnvFilter::try_new(&self.level)
            .map_err(|e| format!("Invalid log filter '{}': {}", self.level, e))?;

        Ok(())
    }
}
