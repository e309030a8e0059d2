//! Main service configuration

#![allow(missing_docs)]

use super::*;
use serde::{Deserialize, Serialize};

/// Main service configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Pricing tables and fee policy
    #[serde(default)]
    pub pricing: PricingConfig,
    /// Order and contact notifications
    #[serde(default)]
    pub notifications: NotificationConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ServiceConfig {
    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.server = self.server.merge(other.server);
        self.pricing = self.pricing.merge(other.pricing);
        self.notifications = self.notifications.merge(other.notifications);
        self.logging = self.logging.merge(other.logging);
        self
    }
}
