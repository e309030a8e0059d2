//! Configuration data models
//!
//! This module defines all configuration structures used by the service.

#![allow(missing_docs)]

pub mod logging;
pub mod notification;
pub mod pricing;
pub mod server;
pub mod service;

// Re-export all configuration types
pub use logging::*;
pub use notification::*;
pub use pricing::*;
pub use server::*;
pub use service::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    64 * 1024 // 64KB, form payloads only
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub(crate) fn default_true() -> bool {
    true
}
