//! Test fixtures and data factories
//!
//! Provides factory methods for creating test data with sensible defaults.
//! All factories create real objects, not mocks.

use mailbox_quote::config::{Config, NotificationTransport, PricingConfig};
use mailbox_quote::core::pricing::{CustomerStatus, TierSelector};
use mailbox_quote::services::quote::{ContactSubmission, OrderSubmission};
use uuid::Uuid;

/// Factory for service configurations
pub struct ConfigFactory;

impl ConfigFactory {
    /// Default configuration with notifications kept in memory
    pub fn with_memory_notifier() -> Config {
        let mut config = Config::default();
        config.service.notifications.transport = NotificationTransport::Memory;
        config
    }

    /// Configuration with a custom pricing section
    pub fn with_pricing(pricing: PricingConfig) -> Config {
        let mut config = Self::with_memory_notifier();
        config.service.pricing = pricing;
        config
    }

    /// A complete YAML document mirroring the shipped configuration
    pub fn yaml() -> &'static str {
        r#"
server:
  host: "127.0.0.1"
  port: 8080
  cors:
    allowed_origins:
      - "https://example.com"
pricing:
  currency: "USD"
  setup_fee: "24.99"
  max_mailboxes: 5000
  tiers:
    - name: "Starter"
      min_mailboxes: 1
      price_per_mailbox: "3.00"
    - name: "Growth"
      min_mailboxes: 30
      price_per_mailbox: "2.80"
    - name: "Scale"
      min_mailboxes: 100
      price_per_mailbox: "2.50"
  packages:
    - name: "Starter"
      inbox_count: 10
      monthly_price: "30.00"
    - name: "Growth"
      inbox_count: 30
      monthly_price: "84.00"
    - name: "Scale"
      inbox_count: 100
      monthly_price: "250.00"
notifications:
  transport: memory
  recipient: "orders@example.com"
logging:
  level: "debug"
"#
    }
}

/// Factory for order and contact submissions
pub struct OrderFactory;

impl OrderFactory {
    /// Custom order for `mailbox_count` mailboxes from a new customer
    pub fn custom(mailbox_count: u32) -> OrderSubmission {
        let tag = &Uuid::new_v4().to_string()[..8];
        OrderSubmission {
            name: "Test Customer".to_string(),
            email: format!("test-{}@example.com", tag),
            company: format!("Company {}", tag),
            package: TierSelector::Custom,
            mailbox_count: Some(mailbox_count),
            address: Some("1 Main Street".to_string()),
            customer_status: CustomerStatus::New,
            message: None,
        }
    }

    /// Package order from an existing customer
    pub fn package(name: &str) -> OrderSubmission {
        let mut order = Self::custom(1);
        order.package = TierSelector::from(name);
        order.mailbox_count = None;
        order.customer_status = CustomerStatus::Existing;
        order
    }

    /// Contact request
    pub fn contact() -> ContactSubmission {
        ContactSubmission {
            name: "Test Sender".to_string(),
            email: "sender@example.com".to_string(),
            company: Some("Sender Inc".to_string()),
            message: "Can we get a custom plan?".to_string(),
        }
    }
}
