//! Pricing configuration models
//!
//! Tier thresholds, the named package table and the setup fee policy. All of
//! it is injectable so rates can change without code edits.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A pricing band keyed by its inclusive lower bound
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceTier {
    /// Display name (e.g. "Growth")
    pub name: String,
    /// Inclusive lower bound on the mailbox count
    pub min_mailboxes: u32,
    /// Monthly price per mailbox
    pub price_per_mailbox: Decimal,
}

impl PriceTier {
    pub fn new(name: &str, min_mailboxes: u32, price_per_mailbox: Decimal) -> Self {
        Self {
            name: name.to_string(),
            min_mailboxes,
            price_per_mailbox,
        }
    }
}

/// A fixed, named package sold at a flat monthly price
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedPackage {
    /// Package name, matched case-insensitively
    pub name: String,
    /// Number of mailboxes included
    pub inbox_count: u32,
    /// Flat monthly price for the whole package
    pub monthly_price: Decimal,
}

impl NamedPackage {
    pub fn new(name: &str, inbox_count: u32, monthly_price: Decimal) -> Self {
        Self {
            name: name.to_string(),
            inbox_count,
            monthly_price,
        }
    }

    /// Effective per-mailbox rate of this package
    pub fn price_per_mailbox(&self) -> Decimal {
        if self.inbox_count == 0 {
            return Decimal::ZERO;
        }
        self.monthly_price / Decimal::from(self.inbox_count)
    }
}

/// Global pricing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Currency code shown next to amounts
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Tier table, ascending by `min_mailboxes`
    #[serde(default = "default_tiers")]
    pub tiers: Vec<PriceTier>,
    /// Named package table
    #[serde(default = "default_packages")]
    pub packages: Vec<NamedPackage>,
    /// One-time fee charged to new customers
    #[serde(default = "default_setup_fee")]
    pub setup_fee: Decimal,
    /// Largest mailbox count accepted for a quote
    #[serde(default = "default_max_mailboxes")]
    pub max_mailboxes: u32,
    /// Accept packages priced differently from the tier formula
    #[serde(default)]
    pub allow_package_discounts: bool,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            tiers: default_tiers(),
            packages: default_packages(),
            setup_fee: default_setup_fee(),
            max_mailboxes: default_max_mailboxes(),
            allow_package_discounts: false,
        }
    }
}

impl PricingConfig {
    /// Look up a package by name, ignoring case
    pub fn find_package(&self, name: &str) -> Option<&NamedPackage> {
        let name = name.trim();
        self.packages
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Get all package names in table order
    pub fn package_names(&self) -> Vec<&str> {
        self.packages.iter().map(|p| p.name.as_str()).collect()
    }

    /// Merge pricing configurations (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        if other.currency != default_currency() {
            self.currency = other.currency;
        }
        if other.tiers != default_tiers() {
            self.tiers = other.tiers;
        }
        if other.packages != default_packages() {
            self.packages = other.packages;
        }
        if other.setup_fee != default_setup_fee() {
            self.setup_fee = other.setup_fee;
        }
        if other.max_mailboxes != default_max_mailboxes() {
            self.max_mailboxes = other.max_mailboxes;
        }
        if other.allow_package_discounts {
            self.allow_package_discounts = true;
        }
        self
    }
}

// Default value functions
fn default_currency() -> String {
    "USD".to_string()
}

pub fn default_tiers() -> Vec<PriceTier> {
    vec![
        PriceTier::new("Starter", 1, Decimal::new(300, 2)),
        PriceTier::new("Growth", 30, Decimal::new(280, 2)),
        PriceTier::new("Scale", 100, Decimal::new(250, 2)),
    ]
}

pub fn default_packages() -> Vec<NamedPackage> {
    vec![
        NamedPackage::new("Starter", 10, Decimal::new(30, 0)),
        NamedPackage::new("Growth", 30, Decimal::new(84, 0)),
        NamedPackage::new("Scale", 100, Decimal::new(250, 0)),
    ]
}

pub fn default_setup_fee() -> Decimal {
    Decimal::new(2499, 2)
}

fn default_max_mailboxes() -> u32 {
    10_000
}
