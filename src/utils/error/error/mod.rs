//! Error handling for the quote service
//!
//! This module defines all error types used throughout the service.

#![allow(missing_docs)]

mod helpers;
mod response;
mod types;

// Re-export all public types
pub use response::{ErrorDetail, ErrorResponse};
pub use types::{Result, ServiceError};
