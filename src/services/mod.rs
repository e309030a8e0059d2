//! Services module
//!
//! This module contains business logic and service implementations

pub mod quote;

pub use quote::{
    ContactReceipt, ContactSubmission, LogNotifier, MemoryNotifier, Notification,
    NotificationKind, Notifier, OrderConfirmation, OrderSubmission, QuoteService,
};
