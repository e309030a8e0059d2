//! Agreement between the package table and the tier formula
//!
//! Packages are maintained by hand. A package whose flat price differs from
//! what the tier formula charges for the same mailbox count is reported as
//! drift.

use super::engine::PricingEngine;
use crate::config::models::pricing::{NamedPackage, PricingConfig};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// A package whose price disagrees with the tier formula
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageDrift {
    /// Package name
    pub package: String,
    /// Mailboxes included in the package
    pub inbox_count: u32,
    /// Flat price from the package table
    pub package_price: Decimal,
    /// What the tier formula charges, if it can price the count at all
    pub formula_price: Option<Decimal>,
}

impl PackageDrift {
    /// `package_price - formula_price`
    pub fn difference(&self) -> Option<Decimal> {
        self.formula_price
            .and_then(|formula| self.package_price.checked_sub(formula))
    }
}

impl fmt::Display for PackageDrift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formula_price {
            Some(formula) => write!(
                f,
                "package {} ({} mailboxes) costs {} but the tier formula gives {}",
                self.package, self.inbox_count, self.package_price, formula
            ),
            None => write!(
                f,
                "package {} ({} mailboxes) cannot be priced by the tier formula",
                self.package, self.inbox_count
            ),
        }
    }
}

/// Compare one package against the tier formula
pub fn check_package(engine: &PricingEngine, package: &NamedPackage) -> Option<PackageDrift> {
    let formula_price = engine.formula_monthly_cost(package.inbox_count).ok();

    if formula_price == Some(package.monthly_price) {
        return None;
    }

    Some(PackageDrift {
        package: package.name.clone(),
        inbox_count: package.inbox_count,
        package_price: package.monthly_price,
        formula_price,
    })
}

/// Compare every package in the configuration against its tier formula
///
/// The configuration is not validated here; this runs as part of validation.
pub fn check_package_consistency(config: &PricingConfig) -> Vec<PackageDrift> {
    let engine = PricingEngine::from_unchecked(config.clone());

    config
        .packages
        .iter()
        .filter_map(|package| check_package(&engine, package))
        .collect()
}
