//! Quote request handling
//!
//! Validates order and contact submissions, prices orders with the
//! pricing engine and hands a rendered notification to a [`Notifier`].

mod notifier;
mod service;
mod template;
mod types;


pub use notifier::{LogNotifier, MemoryNotifier, Notifier, build_notifier};
pub use service::QuoteService;
pub use template::{render_contact, render_order};
pub use types::{
    ContactReceipt, ContactSubmission, MAX_ADDRESS_LENGTH, MAX_EMAIL_LENGTH, MAX_MESSAGE_LENGTH,
    MAX_NAME_LENGTH, Notification, NotificationKind, OrderConfirmation, OrderSubmission,
};

#[cfg(test)]
pub use notifier::MockNotifier;
