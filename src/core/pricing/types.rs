//! Type definitions for the pricing engine

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::format::{format_money, round_cents};

/// Whether the customer has ordered before
///
/// Parsed case-insensitively everywhere it is accepted: JSON bodies, query
/// strings and the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CustomerStatus {
    /// First order; the setup fee applies
    New,
    /// Returning customer; no setup fee
    Existing,
}

impl CustomerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Existing => "existing",
        }
    }
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CustomerStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "new" => Ok(Self::New),
            "existing" => Ok(Self::Existing),
            other => Err(format!(
                "Unknown customer status: {other}. Expected 'new' or 'existing'"
            )),
        }
    }
}

impl TryFrom<String> for CustomerStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CustomerStatus> for String {
    fn from(value: CustomerStatus) -> Self {
        value.as_str().to_string()
    }
}

/// Which pricing path a quote takes
///
/// `custom` prices any mailbox count through the tier table; any other value
/// names a fixed package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TierSelector {
    /// Continuous tier formula
    Custom,
    /// Named package lookup
    Package(String),
}

impl TierSelector {
    pub fn package<S: Into<String>>(name: S) -> Self {
        Self::Package(name.into())
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom)
    }
}

impl From<String> for TierSelector {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("custom") {
            Self::Custom
        } else {
            Self::Package(trimmed.to_string())
        }
    }
}

impl From<&str> for TierSelector {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<TierSelector> for String {
    fn from(value: TierSelector) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TierSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom => f.write_str("custom"),
            Self::Package(name) => f.write_str(name),
        }
    }
}

/// Input to the pricing computation
///
/// `package` and `customer_status` are required; both change the price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Number of mailboxes; optional for named packages
    #[serde(default)]
    pub mailbox_count: Option<u32>,
    /// Pricing path
    pub package: TierSelector,
    /// Customer classification
    pub customer_status: CustomerStatus,
}

impl QuoteRequest {
    /// Quote an arbitrary mailbox count through the tier table
    pub fn custom(mailbox_count: u32, customer_status: CustomerStatus) -> Self {
        Self {
            mailbox_count: Some(mailbox_count),
            package: TierSelector::Custom,
            customer_status,
        }
    }

    /// Quote a named package at its own inbox count
    pub fn package<S: Into<String>>(name: S, customer_status: CustomerStatus) -> Self {
        Self {
            mailbox_count: None,
            package: TierSelector::package(name),
            customer_status,
        }
    }
}

/// Computed quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResult {
    /// Tier or package name that priced the quote
    pub tier_name: String,
    /// Effective monthly rate per mailbox
    pub price_per_mailbox: Decimal,
    /// Number of mailboxes quoted
    pub mailbox_count: u32,
    /// `mailbox_count * price_per_mailbox`, or the package price
    pub monthly_cost: Decimal,
    /// One-time setup fee (zero for existing customers)
    pub setup_fee: Decimal,
    /// `monthly_cost + setup_fee`
    pub total_due: Decimal,
    /// Customer classification the quote was computed for
    pub customer_status: CustomerStatus,
    /// Package name when priced from the package table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
}

impl QuoteResult {
    /// Twelve months of recurring cost, unrounded
    pub fn annual_cost(&self) -> Decimal {
        self.monthly_cost * Decimal::from(12)
    }

    /// Annual cost plus the setup fee
    pub fn first_year_total(&self) -> Decimal {
        self.annual_cost() + self.setup_fee
    }

    pub fn is_package(&self) -> bool {
        self.package.is_some()
    }

    /// Amounts rounded to cents for display
    pub fn display(&self) -> QuoteDisplay {
        QuoteDisplay {
            price_per_mailbox: format_money(self.price_per_mailbox),
            monthly_cost: format_money(self.monthly_cost),
            setup_fee: format_money(self.setup_fee),
            total_due: format_money(self.total_due),
            annual_cost: format_money(self.annual_cost()),
        }
    }

    /// Total due rounded to cents
    pub fn total_due_cents(&self) -> Decimal {
        round_cents(self.total_due)
    }
}

/// Display-formatted quote amounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteDisplay {
    pub price_per_mailbox: String,
    pub monthly_cost: String,
    pub setup_fee: String,
    pub total_due: String,
    pub annual_cost: String,
}
