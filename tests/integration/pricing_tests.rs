//! Pricing integration tests
//!
//! Quotes computed through the public API against the default and custom
//! pricing tables.

#[cfg(test)]
mod tests {
    use crate::common::assertions::assert_money;
    use mailbox_quote::config::{NamedPackage, PriceTier, PricingConfig};
    use mailbox_quote::core::pricing::{
        CustomerStatus, PricingEngine, PricingError, QuoteRequest, TierSelector,
        check_package_consistency, compute_quote,
    };
    use rust_decimal::Decimal;

    // ==================== Documented Scenarios ====================

    #[test]
    fn test_fifty_mailboxes_new_customer() {
        let quote = compute_quote(50, TierSelector::Custom, CustomerStatus::New).unwrap();
        assert_eq!(quote.tier_name, "Growth");
        assert_money(quote.price_per_mailbox, 280);
        assert_money(quote.monthly_cost, 14000);
        assert_money(quote.setup_fee, 2499);
        assert_money(quote.total_due, 16499);
    }

    #[test]
    fn test_hundred_mailboxes_existing_customer() {
        let quote = compute_quote(100, TierSelector::Custom, CustomerStatus::Existing).unwrap();
        assert_eq!(quote.tier_name, "Scale");
        assert_money(quote.monthly_cost, 25000);
        assert_money(quote.setup_fee, 0);
        assert_money(quote.total_due, 25000);
        assert_money(quote.annual_cost(), 300000);
    }

    // ==================== Tier Boundaries ====================

    #[test]
    fn test_tier_boundaries() {
        let cases = [
            (1, "Starter", 300),
            (29, "Starter", 8700),
            (30, "Growth", 8400),
            (99, "Growth", 27720),
            (100, "Scale", 25000),
            (10_000, "Scale", 2_500_000),
        ];

        for (count, tier, monthly_cents) in cases {
            let quote = compute_quote(count, TierSelector::Custom, CustomerStatus::Existing)
                .unwrap_or_else(|e| panic!("{} mailboxes failed: {}", count, e));
            assert_eq!(quote.tier_name, tier, "tier for {}", count);
            assert_money(quote.monthly_cost, monthly_cents);
        }
    }

    #[test]
    fn test_moving_into_higher_tier_can_lower_the_bill() {
        // Whole-order tier pricing: 30 mailboxes cost less than 29
        let below = compute_quote(29, TierSelector::Custom, CustomerStatus::New).unwrap();
        let above = compute_quote(30, TierSelector::Custom, CustomerStatus::New).unwrap();
        assert!(above.monthly_cost < below.monthly_cost);
    }

    // ==================== Packages ====================

    #[test]
    fn test_packages_match_formula() {
        for name in ["Starter", "Growth", "Scale"] {
            let package = compute_quote(0, TierSelector::package(name), CustomerStatus::New);
            // A zero count alongside a package is rejected, not ignored
            assert!(package.is_err());

            let engine = PricingEngine::default();
            let quote = engine
                .compute_quote(&QuoteRequest::package(name, CustomerStatus::New))
                .unwrap();
            let formula = engine
                .compute_quote(&QuoteRequest::custom(quote.mailbox_count, CustomerStatus::New))
                .unwrap();
            assert_eq!(quote.monthly_cost, formula.monthly_cost, "package {}", name);
            assert_eq!(quote.total_due, formula.total_due);
        }
    }

    #[test]
    fn test_package_selector_is_case_insensitive() {
        let engine = PricingEngine::default();
        let quote = engine
            .compute_quote(&QuoteRequest::package("  sCaLe ", CustomerStatus::Existing))
            .unwrap();
        assert_eq!(quote.package.as_deref(), Some("Scale"));
        assert_eq!(quote.mailbox_count, 100);
    }

    #[test]
    fn test_unknown_package() {
        let result = compute_quote(10, TierSelector::package("Enterprise"), CustomerStatus::New);
        assert_eq!(
            result.unwrap_err(),
            PricingError::UnknownPackage("Enterprise".to_string())
        );
    }

    // ==================== Rejected Inputs ====================

    #[test]
    fn test_rejected_counts() {
        assert_eq!(
            compute_quote(0, TierSelector::Custom, CustomerStatus::New).unwrap_err(),
            PricingError::InvalidMailboxCount(0)
        );
        assert!(matches!(
            compute_quote(10_001, TierSelector::Custom, CustomerStatus::New).unwrap_err(),
            PricingError::MailboxLimitExceeded {
                requested: 10_001,
                max: 10_000
            }
        ));
    }

    #[test]
    fn test_missing_count_for_custom() {
        let engine = PricingEngine::default();
        let request = QuoteRequest {
            mailbox_count: None,
            package: TierSelector::Custom,
            customer_status: CustomerStatus::New,
        };
        assert_eq!(
            engine.compute_quote(&request).unwrap_err(),
            PricingError::MissingMailboxCount
        );
    }

    // ==================== Custom Tables ====================

    #[test]
    fn test_custom_table() {
        let pricing = PricingConfig {
            tiers: vec![
                PriceTier::new("Small", 1, Decimal::new(400, 2)),
                PriceTier::new("Large", 10, Decimal::new(350, 2)),
            ],
            packages: vec![NamedPackage::new("Ten", 10, Decimal::new(3500, 2))],
            setup_fee: Decimal::new(1000, 2),
            ..Default::default()
        };
        let engine = PricingEngine::new(pricing).unwrap();

        let quote = engine
            .compute_quote(&QuoteRequest::custom(9, CustomerStatus::New))
            .unwrap();
        assert_eq!(quote.tier_name, "Small");
        assert_money(quote.total_due, 4600);

        let quote = engine
            .compute_quote(&QuoteRequest::package("ten", CustomerStatus::New))
            .unwrap();
        assert_money(quote.total_due, 4500);
    }

    #[test]
    fn test_drifting_package_is_reported() {
        let pricing = PricingConfig {
            packages: vec![NamedPackage::new("Growth", 30, Decimal::new(7800, 2))],
            ..Default::default()
        };

        let drifts = check_package_consistency(&pricing);
        assert_eq!(drifts.len(), 1);
        assert_eq!(drifts[0].package, "Growth");
        assert_eq!(drifts[0].formula_price, Some(Decimal::new(8400, 2)));

        // Rejected unless discounts are allowed
        assert!(PricingEngine::new(pricing.clone()).is_err());
        let allowed = PricingConfig {
            allow_package_discounts: true,
            ..pricing
        };
        assert!(PricingEngine::new(allowed).is_ok());
    }

    #[test]
    fn test_display_strings() {
        let quote = compute_quote(7, TierSelector::Custom, CustomerStatus::New).unwrap();
        let display = quote.display();
        assert_eq!(display.price_per_mailbox, "$3.00");
        assert_eq!(display.monthly_cost, "$21.00");
        assert_eq!(display.setup_fee, "$24.99");
        assert_eq!(display.total_due, "$45.99");
        assert_eq!(display.annual_cost, "$252.00");
    }
}
