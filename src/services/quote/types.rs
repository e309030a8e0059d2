//! Type definitions for the quote request handler

use crate::core::pricing::{CustomerStatus, QuoteDisplay, QuoteRequest, QuoteResult, TierSelector};
use crate::utils::error::{Result, ServiceError};
use crate::utils::is_valid_email;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum accepted length of a person or company name
pub const MAX_NAME_LENGTH: usize = 120;
/// Maximum accepted length of an email address
pub const MAX_EMAIL_LENGTH: usize = 254;
/// Maximum accepted length of a postal address
pub const MAX_ADDRESS_LENGTH: usize = 500;
/// Maximum accepted length of a free-form message
pub const MAX_MESSAGE_LENGTH: usize = 5000;

/// Order form payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSubmission {
    /// Customer name
    pub name: String,
    /// Customer email
    pub email: String,
    /// Company name
    pub company: String,
    /// Package selection (`custom` or a package name)
    pub package: TierSelector,
    /// Requested mailbox count
    #[serde(default)]
    pub mailbox_count: Option<u32>,
    /// Billing address
    #[serde(default)]
    pub address: Option<String>,
    /// New or existing customer
    pub customer_status: CustomerStatus,
    /// Optional note from the customer
    #[serde(default)]
    pub message: Option<String>,
}

impl OrderSubmission {
    /// Check identity fields; pricing fields are checked by the engine
    pub fn validate(&self) -> Result<()> {
        require_text("name", &self.name, MAX_NAME_LENGTH)?;
        require_email(&self.email)?;
        require_text("company", &self.company, MAX_NAME_LENGTH)?;
        optional_text("address", self.address.as_deref(), MAX_ADDRESS_LENGTH)?;
        optional_text("message", self.message.as_deref(), MAX_MESSAGE_LENGTH)?;
        Ok(())
    }

    /// Pricing input carried by this order
    pub fn quote_request(&self) -> QuoteRequest {
        QuoteRequest {
            mailbox_count: self.mailbox_count,
            package: self.package.clone(),
            customer_status: self.customer_status,
        }
    }
}

/// Contact form payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Company name
    #[serde(default)]
    pub company: Option<String>,
    /// Message body
    pub message: String,
}

impl ContactSubmission {
    pub fn validate(&self) -> Result<()> {
        require_text("name", &self.name, MAX_NAME_LENGTH)?;
        require_email(&self.email)?;
        optional_text("company", self.company.as_deref(), MAX_NAME_LENGTH)?;
        require_text("message", &self.message, MAX_MESSAGE_LENGTH)?;
        Ok(())
    }
}

/// What a notification is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Order,
    Contact,
}

/// Rendered notification ready for a transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    /// Internal inbox receiving the notification
    pub to: String,
    /// Customer address replies go to
    pub reply_to: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

/// Result of an accepted order
#[derive(Debug, Clone, Serialize)]
pub struct OrderConfirmation {
    /// Order reference
    pub reference: String,
    /// When the order was accepted
    pub received_at: DateTime<Utc>,
    /// Computed quote
    pub quote: QuoteResult,
    /// Quote amounts formatted for display
    pub display: QuoteDisplay,
    /// Whether a notification was dispatched
    pub notified: bool,
}

/// Result of an accepted contact message
#[derive(Debug, Clone, Serialize)]
pub struct ContactReceipt {
    pub reference: String,
    pub received_at: DateTime<Utc>,
    pub notified: bool,
}

fn require_text(field: &str, value: &str, max_chars: usize) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::validation(format!("{} is required", field)));
    }
    check_length(field, trimmed, max_chars)
}

fn optional_text(field: &str, value: Option<&str>, max_chars: usize) -> Result<()> {
    match value {
        Some(value) => check_length(field, value.trim(), max_chars),
        None => Ok(()),
    }
}

fn check_length(field: &str, value: &str, max_chars: usize) -> Result<()> {
    if value.chars().count() > max_chars {
        return Err(ServiceError::validation(format!(
            "{} must be at most {} characters",
            field, max_chars
        )));
    }
    Ok(())
}

fn require_email(email: &str) -> Result<()> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::validation("email is required"));
    }
    if trimmed.len() > MAX_EMAIL_LENGTH || !is_valid_email(trimmed) {
        return Err(ServiceError::validation(format!(
            "email is not a valid address: {}",
            trimmed
        )));
    }
    Ok(())
}
