//! Core functionality
//!
//! This module contains the pricing business logic and its data structures.

pub mod pricing;

// Re-export commonly used types
pub use pricing::{
    CustomerStatus, PricingEngine, PricingError, QuoteRequest, QuoteResult, TierSelector,
};
