//! Quote request handler implementation

use super::notifier::{Notifier, build_notifier};
use super::template::{render_contact, render_order};
use super::types::{
    ContactReceipt, ContactSubmission, Notification, OrderConfirmation, OrderSubmission,
};
use crate::config::models::NotificationConfig;
use crate::core::pricing::{PricingEngine, QuoteRequest, QuoteResult};
use crate::utils::error::{Result, ServiceError};
use crate::utils::generate_reference;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Accepts quote, order and contact requests
#[derive(Clone)]
pub struct QuoteService {
    engine: Arc<PricingEngine>,
    notifier: Arc<dyn Notifier>,
    notifications: NotificationConfig,
}

impl std::fmt::Debug for QuoteService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuoteService")
            .field("notifier", &self.notifier.name())
            .field("notifications", &self.notifications)
            .finish()
    }
}

impl QuoteService {
    /// Create a service with an explicit notifier
    pub fn new(
        engine: Arc<PricingEngine>,
        notifier: Arc<dyn Notifier>,
        notifications: NotificationConfig,
    ) -> Self {
        info!(
            transport = notifier.name(),
            enabled = notifications.enabled,
            "Quote service initialized"
        );
        Self {
            engine,
            notifier,
            notifications,
        }
    }

    /// Create a service using the notifier selected by configuration
    pub fn from_config(engine: Arc<PricingEngine>, notifications: NotificationConfig) -> Self {
        let notifier = build_notifier(&notifications);
        Self::new(engine, notifier, notifications)
    }

    pub fn engine(&self) -> &PricingEngine {
        &self.engine
    }

    /// Compute a quote without placing an order
    pub fn quote(&self, request: &QuoteRequest) -> Result<QuoteResult> {
        Ok(self.engine.compute_quote(request)?)
    }

    /// Validate, price and announce an order
    pub async fn submit_order(&self, order: OrderSubmission) -> Result<OrderConfirmation> {
        order.validate()?;
        let quote = self.engine.compute_quote(&order.quote_request())?;

        let reference = generate_reference();
        let received_at = Utc::now();
        let notification = render_order(
            &self.notifications,
            &reference,
            received_at,
            &order,
            &quote,
        );
        let notified = self.dispatch(&notification).await?;

        info!(
            reference = %reference,
            tier = %quote.tier_name,
            mailboxes = quote.mailbox_count,
            total_due = %quote.total_due_cents(),
            "Order accepted"
        );

        Ok(OrderConfirmation {
            reference,
            received_at,
            display: quote.display(),
            quote,
            notified,
        })
    }

    /// Validate and announce a contact message
    pub async fn submit_contact(&self, contact: ContactSubmission) -> Result<ContactReceipt> {
        contact.validate()?;

        let reference = generate_reference();
        let received_at = Utc::now();
        let notification = render_contact(&self.notifications, &reference, received_at, &contact);
        let notified = self.dispatch(&notification).await?;

        info!(reference = %reference, "Contact request accepted");

        Ok(ContactReceipt {
            reference,
            received_at,
            notified,
        })
    }

    async fn dispatch(&self, notification: &Notification) -> Result<bool> {
        if !self.notifications.enabled {
            debug!(subject = %notification.subject, "Notifications disabled, skipping");
            return Ok(false);
        }

        self.notifier.send(notification).await.map_err(|e| {
            error!(
                transport = self.notifier.name(),
                "Failed to send notification: {}", e
            );
            match e {
                ServiceError::Notification(_) => e,
                other => ServiceError::notification(other.to_string()),
            }
        })?;
        Ok(true)
    }
}
