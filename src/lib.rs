//! # mailbox-quote
//!
//! Tiered mailbox pricing for cold-email infrastructure plans, with an HTTP
//! API for the public pricing calculator and the order/contact forms.
//!
//! ## Features
//!
//! - **Tier pricing**: every mailbox is billed at the rate of the tier the
//!   total count falls in
//! - **Named packages**: fixed bundles checked against the tier formula
//! - **Setup fee**: one-time fee for new customers only
//! - **Exact money**: decimal arithmetic, rounded to cents only for display
//! - **Order intake**: validated orders and contact requests are rendered
//!   into notifications for the sales inbox
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mailbox_quote::{CustomerStatus, TierSelector, compute_quote};
//!
//! let quote = compute_quote(50, TierSelector::Custom, CustomerStatus::New)?;
//! assert_eq!(quote.tier_name, "Growth");
//! println!("Total due today: {}", quote.display().total_due);
//! # Ok::<(), mailbox_quote::PricingError>(())
//! ```
//!
//! ## Server Mode
//!
//! ```rust,no_run
//! use mailbox_quote::{Config, server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/quote.yaml").await?;
//!     server::run_with_config(config).await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod services;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{Result, ServiceError};

// Export pricing functionality
pub use core::pricing::{
    CustomerStatus, PackageDrift, PricingEngine, PricingError, PricingResult, QuoteDisplay,
    QuoteRequest, QuoteResult, TierSelector, check_package_consistency, compute_quote,
    format_money, round_cents,
};

// Export quote handling
pub use services::quote::{
    ContactSubmission, Notifier, OrderConfirmation, OrderSubmission, QuoteService,
};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Git commit hash, when provided at build time
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
        }
    }
}

/// Build information for this binary
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
