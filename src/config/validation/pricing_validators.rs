//! Pricing configuration validators
//!
//! The tier table must be a contiguous ascending sequence of bands starting
//! at one mailbox, and every package must agree with the tier formula unless
//! discounts are explicitly allowed.

use super::trait_def::Validate;
use crate::config::models::pricing::{NamedPackage, PriceTier, PricingConfig};
use crate::core::pricing::check_package_consistency;
use rust_decimal::Decimal;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Largest accepted monthly rate per mailbox
fn max_price_per_mailbox() -> Decimal {
    Decimal::new(1_000_000, 0)
}

/// Largest accepted setup fee
fn max_setup_fee() -> Decimal {
    Decimal::new(1_000_000, 0)
}

impl Validate for PricingConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating pricing configuration");

        if self.currency.trim().is_empty() {
            return Err("Currency cannot be empty".to_string());
        }

        if self.setup_fee < Decimal::ZERO {
            return Err(format!("Setup fee cannot be negative: {}", self.setup_fee));
        }

        if self.setup_fee > max_setup_fee() {
            return Err(format!(
                "Setup fee {} exceeds the maximum of {}",
                self.setup_fee,
                max_setup_fee()
            ));
        }

        if self.max_mailboxes == 0 {
            return Err("Max mailboxes must be greater than 0".to_string());
        }

        validate_tiers(&self.tiers)?;

        let mut names = HashSet::new();
        for package in &self.packages {
            package.validate()?;
            if !names.insert(package.name.to_ascii_lowercase()) {
                return Err(format!("Duplicate package name: {}", package.name));
            }
            if package.name.eq_ignore_ascii_case("custom") {
                return Err("Package name 'custom' is reserved".to_string());
            }
            if package.inbox_count > self.max_mailboxes {
                return Err(format!(
                    "Package {} includes {} mailboxes, above the maximum of {}",
                    package.name, package.inbox_count, self.max_mailboxes
                ));
            }
        }

        for drift in check_package_consistency(self) {
            if self.allow_package_discounts {
                warn!("Package pricing drift: {}", drift);
            } else {
                return Err(format!("Package pricing drift: {}", drift));
            }
        }

        Ok(())
    }
}

impl Validate for PriceTier {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Tier name cannot be empty".to_string());
        }

        if self.min_mailboxes == 0 {
            return Err(format!("Tier {} must start at 1 or more mailboxes", self.name));
        }

        if self.price_per_mailbox <= Decimal::ZERO {
            return Err(format!(
                "Tier {} price per mailbox must be positive",
                self.name
            ));
        }

        if self.price_per_mailbox > max_price_per_mailbox() {
            return Err(format!(
                "Tier {} price per mailbox {} exceeds the maximum of {}",
                self.name,
                self.price_per_mailbox,
                max_price_per_mailbox()
            ));
        }

        Ok(())
    }
}

impl Validate for NamedPackage {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Package name cannot be empty".to_string());
        }

        if self.inbox_count == 0 {
            return Err(format!(
                "Package {} must include at least one mailbox",
                self.name
            ));
        }

        if self.monthly_price <= Decimal::ZERO {
            return Err(format!("Package {} price must be positive", self.name));
        }

        let per_mailbox = self.price_per_mailbox();
        if per_mailbox > max_price_per_mailbox() {
            return Err(format!(
                "Package {} price per mailbox {} exceeds the maximum of {}",
                self.name,
                per_mailbox,
                max_price_per_mailbox()
            ));
        }
        // `price_per_mailbox * inbox_count` must reproduce the flat price exactly
        if per_mailbox.checked_mul(Decimal::from(self.inbox_count)) != Some(self.monthly_price) {
            return Err(format!(
                "Package {} price {} does not divide evenly across {} mailboxes",
                self.name, self.monthly_price, self.inbox_count
            ));
        }

        Ok(())
    }
}

fn validate_tiers(tiers: &[PriceTier]) -> Result<(), String> {
    let first = tiers
        .first()
        .ok_or_else(|| "At least one price tier must be configured".to_string())?;

    if first.min_mailboxes != 1 {
        return Err(format!(
            "Lowest tier {} must start at 1 mailbox, starts at {}",
            first.name, first.min_mailboxes
        ));
    }

    let mut names = HashSet::new();
    for tier in tiers {
        tier.validate()?;
        if !names.insert(tier.name.to_ascii_lowercase()) {
            return Err(format!("Duplicate tier name: {}", tier.name));
        }
    }

    for pair in tiers.windows(2) {
        if pair[1].min_mailboxes <= pair[0].min_mailboxes {
            return Err(format!(
                "Tier thresholds must be strictly ascending: {} ({}) follows {} ({})",
                pair[1].name, pair[1].min_mailboxes, pair[0].name, pair[0].min_mailboxes
            ));
        }
    }

    Ok(())
}
