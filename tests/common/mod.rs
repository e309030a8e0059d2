//! Common test utilities for mailbox-quote
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::fixtures::{ConfigFactory, OrderFactory};
//!
//! let config = ConfigFactory::with_memory_notifier();
//! let order = OrderFactory::custom(50);
//! ```

pub mod assertions;
pub mod fixtures;

pub use fixtures::{ConfigFactory, OrderFactory};
