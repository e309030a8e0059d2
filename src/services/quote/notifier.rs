//! Notification transports

use super::types::Notification;
use crate::config::models::{NotificationConfig, NotificationTransport};
use crate::utils::error::Result;
use crate::utils::truncate_string;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info};

/// Delivers rendered notifications
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one notification
    async fn send(&self, notification: &Notification) -> Result<()>;

    /// Transport name for logs
    fn name(&self) -> &'static str;
}

/// Writes notifications to the log
#[derive(Debug, Default, Clone)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, notification: &Notification) -> Result<()> {
        info!(
            kind = ?notification.kind,
            to = %notification.to,
            reply_to = %notification.reply_to,
            subject = %notification.subject,
            "Notification dispatched"
        );
        debug!("{}", truncate_string(&notification.text_body, 2000));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}

/// Keeps notifications in memory
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything sent so far
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.sent.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sent.lock().is_empty()
    }

    pub fn clear(&self) {
        self.sent.lock().clear();
    }
}

#[async_trait]
impl Notifier for MemoryNotifier {
    async fn send(&self, notification: &Notification) -> Result<()> {
        self.sent.lock().push(notification.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

/// Build the notifier selected by configuration
pub fn build_notifier(config: &NotificationConfig) -> Arc<dyn Notifier> {
    match config.transport {
        NotificationTransport::Log => Arc::new(LogNotifier),
        NotificationTransport::Memory => Arc::new(MemoryNotifier::new()),
    }
}
