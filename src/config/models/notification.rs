//! Notification configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Where rendered notifications are delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NotificationTransport {
    /// Write notifications to the log
    #[default]
    Log,
    /// Keep notifications in memory (dry runs)
    Memory,
}

/// Order and contact notification configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Send notifications at all
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Delivery transport
    #[serde(default)]
    pub transport: NotificationTransport,
    /// Inbox that receives order and contact notifications
    #[serde(default = "default_recipient")]
    pub recipient: String,
    /// Prefix for every subject line
    #[serde(default = "default_subject_prefix")]
    pub subject_prefix: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            transport: NotificationTransport::default(),
            recipient: default_recipient(),
            subject_prefix: default_subject_prefix(),
        }
    }
}

impl NotificationConfig {
    /// Merge notification configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.enabled {
            self.enabled = false;
        }
        if other.transport != NotificationTransport::default() {
            self.transport = other.transport;
        }
        if other.recipient != default_recipient() {
            self.recipient = other.recipient;
        }
        if other.subject_prefix != default_subject_prefix() {
            self.subject_prefix = other.subject_prefix;
        }
        self
    }
}

fn default_recipient() -> String {
    "sales@localhost".to_string()
}

fn default_subject_prefix() -> String {
    "[Mailbox Quote]".to_string()
}
