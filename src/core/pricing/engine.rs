//! Quote computation

use super::error::{PricingError, PricingResult};
use super::types::{CustomerStatus, QuoteRequest, QuoteResult, TierSelector};
use crate::config::models::pricing::{NamedPackage, PriceTier, PricingConfig};
use crate::config::validation::Validate;
use crate::utils::error::{Result, ServiceError};
use rust_decimal::Decimal;
use tracing::debug;

/// Tiered mailbox pricing engine
///
/// Holds an immutable, validated [`PricingConfig`]. Every computation is a
/// pure function of that configuration and its input, so one engine can be
/// shared freely across threads.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self {
            config: PricingConfig::default(),
        }
    }
}

impl PricingEngine {
    /// Create an engine from a pricing configuration
    pub fn new(config: PricingConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| ServiceError::Config(format!("Pricing config error: {}", e)))?;

        Ok(Self { config })
    }

    /// Create an engine without validating the configuration
    pub(crate) fn from_unchecked(config: PricingConfig) -> Self {
        Self { config }
    }

    /// Get the pricing configuration
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Tier table in ascending order
    pub fn tiers(&self) -> &[PriceTier] {
        &self.config.tiers
    }

    /// Named package table
    pub fn packages(&self) -> &[NamedPackage] {
        &self.config.packages
    }

    /// Compute a quote
    pub fn compute_quote(&self, request: &QuoteRequest) -> PricingResult<QuoteResult> {
        let result = match &request.package {
            TierSelector::Custom => {
                let count = request
                    .mailbox_count
                    .ok_or(PricingError::MissingMailboxCount)?;
                self.quote_from_tiers(count, request.customer_status)?
            }
            TierSelector::Package(name) => {
                self.quote_from_package(name, request.mailbox_count, request.customer_status)?
            }
        };

        debug!(
            tier = %result.tier_name,
            mailboxes = result.mailbox_count,
            total_due = %result.total_due,
            "Computed quote"
        );
        Ok(result)
    }

    /// Select the tier with the largest lower bound not above `mailbox_count`
    pub fn select_tier(&self, mailbox_count: u32) -> PricingResult<&PriceTier> {
        self.check_mailbox_count(mailbox_count)?;

        self.config
            .tiers
            .iter()
            .rev()
            .find(|tier| tier.min_mailboxes <= mailbox_count)
            .ok_or_else(|| PricingError::BelowMinimumTier {
                requested: mailbox_count,
                minimum: self
                    .config
                    .tiers
                    .first()
                    .map_or(1, |tier| tier.min_mailboxes),
            })
    }

    /// Monthly cost for `mailbox_count` under the tier formula
    pub fn formula_monthly_cost(&self, mailbox_count: u32) -> PricingResult<Decimal> {
        let tier = self.select_tier(mailbox_count)?;
        checked_cost(mailbox_count, tier.price_per_mailbox)
    }

    /// Setup fee owed for a customer status
    pub fn setup_fee_for(&self, status: CustomerStatus) -> Decimal {
        match status {
            CustomerStatus::New => self.config.setup_fee,
            CustomerStatus::Existing => Decimal::ZERO,
        }
    }

    fn check_mailbox_count(&self, mailbox_count: u32) -> PricingResult<()> {
        if mailbox_count == 0 {
            return Err(PricingError::InvalidMailboxCount(mailbox_count));
        }
        if mailbox_count > self.config.max_mailboxes {
            return Err(PricingError::MailboxLimitExceeded {
                requested: mailbox_count,
                max: self.config.max_mailboxes,
            });
        }
        Ok(())
    }

    fn quote_from_tiers(
        &self,
        mailbox_count: u32,
        status: CustomerStatus,
    ) -> PricingResult<QuoteResult> {
        let tier = self.select_tier(mailbox_count)?;
        let monthly_cost = checked_cost(mailbox_count, tier.price_per_mailbox)?;
        let setup_fee = self.setup_fee_for(status);

        Ok(QuoteResult {
            tier_name: tier.name.clone(),
            price_per_mailbox: tier.price_per_mailbox,
            mailbox_count,
            monthly_cost,
            setup_fee,
            total_due: checked_total(mailbox_count, monthly_cost, setup_fee)?,
            customer_status: status,
            package: None,
        })
    }

    fn quote_from_package(
        &self,
        name: &str,
        requested: Option<u32>,
        status: CustomerStatus,
    ) -> PricingResult<QuoteResult> {
        let package = self
            .config
            .find_package(name)
            .ok_or_else(|| PricingError::UnknownPackage(name.to_string()))?;

        if let Some(requested) = requested {
            if requested == 0 {
                return Err(PricingError::InvalidMailboxCount(requested));
            }
            if requested != package.inbox_count {
                return Err(PricingError::PackageMismatch {
                    package: package.name.clone(),
                    expected: package.inbox_count,
                    requested,
                });
            }
        }

        let setup_fee = self.setup_fee_for(status);
        let total_due = checked_total(package.inbox_count, package.monthly_price, setup_fee)?;

        Ok(QuoteResult {
            tier_name: package.name.clone(),
            price_per_mailbox: package.price_per_mailbox(),
            mailbox_count: package.inbox_count,
            monthly_cost: package.monthly_price,
            setup_fee,
            total_due,
            customer_status: status,
            package: Some(package.name.clone()),
        })
    }
}

fn checked_cost(mailbox_count: u32, price_per_mailbox: Decimal) -> PricingResult<Decimal> {
    Decimal::from(mailbox_count)
        .checked_mul(price_per_mailbox)
        .ok_or(PricingError::AmountOverflow {
            mailboxes: mailbox_count,
        })
}

fn checked_total(
    mailbox_count: u32,
    monthly_cost: Decimal,
    setup_fee: Decimal,
) -> PricingResult<Decimal> {
    monthly_cost
        .checked_add(setup_fee)
        .ok_or(PricingError::AmountOverflow {
            mailboxes: mailbox_count,
        })
}

/// Compute a quote with the default pricing configuration
pub fn compute_quote(
    mailbox_count: u32,
    package: TierSelector,
    customer_status: CustomerStatus,
) -> PricingResult<QuoteResult> {
    let request = QuoteRequest {
        mailbox_count: Some(mailbox_count),
        package,
        customer_status,
    };
    PricingEngine::default().compute_quote(&request)
}
