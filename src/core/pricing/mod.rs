//! Tiered mailbox pricing engine
//!
//! Maps a mailbox count, a package selector and a customer status to a
//! monetary quote. Two pricing paths exist: the continuous tier formula
//! (`custom`) and a table of fixed named packages. Both are driven by
//! [`PricingConfig`](crate::config::models::pricing::PricingConfig).

mod consistency;
mod engine;
mod error;
mod format;
mod types;


// Re-export public types
pub use consistency::{PackageDrift, check_package, check_package_consistency};
pub use engine::{PricingEngine, compute_quote};
pub use error::{PricingError, PricingResult};
pub use format::{format_money, round_cents};
pub use types::{CustomerStatus, QuoteDisplay, QuoteRequest, QuoteResult, TierSelector};
