//! Notification rendering

use super::types::{ContactSubmission, Notification, NotificationKind, OrderSubmission};
use crate::config::models::NotificationConfig;
use crate::core::pricing::QuoteResult;
use crate::utils::escape_html;
use chrono::{DateTime, Utc};
use std::fmt::Write;

/// Render the notification for an accepted order
pub fn render_order(
    config: &NotificationConfig,
    reference: &str,
    received_at: DateTime<Utc>,
    order: &OrderSubmission,
    quote: &QuoteResult,
) -> Notification {
    let display = quote.display();
    let subject = format!(
        "{} New order: {} x{} ({})",
        config.subject_prefix,
        one_line(&order.company),
        quote.mailbox_count,
        quote.tier_name
    );

    let mut rows: Vec<(&str, String)> = vec![
        ("Reference", reference.to_string()),
        ("Received", received_at.to_rfc3339()),
        ("Name", order.name.trim().to_string()),
        ("Email", order.email.trim().to_string()),
        ("Company", order.company.trim().to_string()),
        ("Customer", quote.customer_status.to_string()),
        ("Package", order.package.to_string()),
        ("Tier", quote.tier_name.clone()),
        ("Mailboxes", quote.mailbox_count.to_string()),
        ("Price per mailbox", display.price_per_mailbox),
        ("Monthly cost", display.monthly_cost),
        ("Setup fee", display.setup_fee),
        ("Total due today", display.total_due),
        ("Annual cost", display.annual_cost),
    ];
    if let Some(address) = non_blank(order.address.as_deref()) {
        rows.push(("Address", address.to_string()));
    }

    let message = non_blank(order.message.as_deref());
    Notification {
        kind: NotificationKind::Order,
        to: config.recipient.clone(),
        reply_to: order.email.trim().to_string(),
        subject,
        text_body: text_body(&rows, message),
        html_body: html_body("New order", &rows, message),
    }
}

/// Render the notification for a contact message
pub fn render_contact(
    config: &NotificationConfig,
    reference: &str,
    received_at: DateTime<Utc>,
    contact: &ContactSubmission,
) -> Notification {
    let subject = format!(
        "{} Contact request from {}",
        config.subject_prefix,
        one_line(&contact.name)
    );

    let mut rows: Vec<(&str, String)> = vec![
        ("Reference", reference.to_string()),
        ("Received", received_at.to_rfc3339()),
        ("Name", contact.name.trim().to_string()),
        ("Email", contact.email.trim().to_string()),
    ];
    if let Some(company) = non_blank(contact.company.as_deref()) {
        rows.push(("Company", company.to_string()));
    }

    let message = non_blank(Some(contact.message.as_str()));
    Notification {
        kind: NotificationKind::Contact,
        to: config.recipient.clone(),
        reply_to: contact.email.trim().to_string(),
        subject,
        text_body: text_body(&rows, message),
        html_body: html_body("Contact request", &rows, message),
    }
}

fn text_body(rows: &[(&str, String)], message: Option<&str>) -> String {
    let mut body = String::new();
    for (label, value) in rows {
        let _ = writeln!(body, "{}: {}", label, value);
    }
    if let Some(message) = message {
        let _ = write!(body, "\nMessage:\n{}\n", message);
    }
    body
}

fn html_body(title: &str, rows: &[(&str, String)], message: Option<&str>) -> String {
    let mut body = String::new();
    let _ = write!(body, "<h2>{}</h2>\n<table>\n", escape_html(title));
    for (label, value) in rows {
        let _ = writeln!(
            body,
            "<tr><th align=\"left\">{}</th><td>{}</td></tr>",
            escape_html(label),
            escape_html(value)
        );
    }
    body.push_str("</table>\n");
    if let Some(message) = message {
        let _ = writeln!(
            body,
            "<h3>Message</h3>\n<p>{}</p>",
            escape_html(message).replace('\n', "<br>")
        );
    }
    body
}

// Header values must not carry line breaks
fn one_line(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
