//! Configuration validation integration tests
//!
//! Tests for configuration loading and validation across all config
//! components.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::ConfigFactory;
    use mailbox_quote::config::{
        Config, NamedPackage, NotificationTransport, PriceTier, PricingConfig, Validate,
    };
    use mailbox_quote::utils::error::ServiceError;
    use rust_decimal::Decimal;
    use std::io::Write;

    // ==================== Loading ====================

    #[test]
    fn test_yaml_fixture_loads() {
        let config = Config::from_yaml_str(ConfigFactory::yaml()).unwrap();
        assert_eq!(config.server().port, 8080);
        assert_eq!(config.pricing().max_mailboxes, 5000);
        assert_eq!(config.pricing().setup_fee, Decimal::new(2499, 2));
        assert_eq!(config.notifications().transport, NotificationTransport::Memory);
        assert_eq!(config.logging().level, "debug");
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ConfigFactory::yaml().as_bytes()).unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.pricing().tiers.len(), 3);
        assert_eq!(config.server().cors.allowed_origins, vec!["https://example.com"]);
    }

    #[tokio::test]
    async fn test_from_file_missing_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::from_file(dir.path().join("absent.yaml")).await;
        assert!(matches!(result, Err(ServiceError::Config(_))));
    }

    #[test]
    fn test_shipped_config_is_valid() {
        let content = include_str!("../../config/quote.yaml");
        let config = Config::from_yaml_str(content).unwrap();
        assert!(config.pricing().find_package("growth").is_some());
    }

    #[test]
    fn test_to_yaml_round_trips_pricing() {
        let config = Config::default();
        let yaml = config.to_yaml().unwrap();
        let reloaded = Config::from_yaml_str(&yaml).unwrap();
        assert_eq!(reloaded.pricing(), config.pricing());
    }

    // ==================== Pricing Validation ====================

    #[test]
    fn test_default_pricing_is_valid() {
        assert!(PricingConfig::default().validate().is_ok());
    }

    #[test]
    fn test_tiers_must_start_at_one() {
        let pricing = PricingConfig {
            tiers: vec![PriceTier::new("Growth", 30, Decimal::new(280, 2))],
            packages: vec![],
            ..Default::default()
        };
        let result = pricing.validate();
        assert!(result.unwrap_err().contains("must start at 1"));
    }

    #[test]
    fn test_tiers_must_ascend() {
        let pricing = PricingConfig {
            tiers: vec![
                PriceTier::new("Starter", 1, Decimal::new(300, 2)),
                PriceTier::new("Scale", 100, Decimal::new(250, 2)),
                PriceTier::new("Growth", 30, Decimal::new(280, 2)),
            ],
            packages: vec![],
            ..Default::default()
        };
        assert!(pricing.validate().unwrap_err().contains("strictly ascending"));
    }

    #[test]
    fn test_empty_tier_table_rejected() {
        let pricing = PricingConfig {
            tiers: vec![],
            packages: vec![],
            ..Default::default()
        };
        assert!(pricing.validate().unwrap_err().contains("At least one"));
    }

    #[test]
    fn test_duplicate_package_names_rejected() {
        let pricing = PricingConfig {
            packages: vec![
                NamedPackage::new("Starter", 10, Decimal::new(3000, 2)),
                NamedPackage::new("starter", 10, Decimal::new(3000, 2)),
            ],
            ..Default::default()
        };
        assert!(pricing.validate().unwrap_err().contains("Duplicate package"));
    }

    #[test]
    fn test_custom_package_name_reserved() {
        let pricing = PricingConfig {
            packages: vec![NamedPackage::new("Custom", 10, Decimal::new(3000, 2))],
            ..Default::default()
        };
        assert!(pricing.validate().unwrap_err().contains("reserved"));
    }

    #[test]
    fn test_negative_setup_fee_rejected() {
        let pricing = PricingConfig {
            setup_fee: Decimal::new(-1, 2),
            ..Default::default()
        };
        assert!(pricing.validate().unwrap_err().contains("Setup fee"));
    }

    #[test]
    fn test_package_drift_rejected_in_config() {
        let mut config = ConfigFactory::with_memory_notifier();
        config.service.pricing.packages[1].monthly_price = Decimal::new(7500, 2);

        let result = config.validate();
        assert!(matches!(result, Err(ServiceError::Config(msg)) if msg.contains("drift")));

        config.service.pricing.allow_package_discounts = true;
        assert!(config.validate().is_ok());
    }

    // ==================== Other Sections ====================

    #[test]
    fn test_port_zero_rejected() {
        let mut config = Config::default();
        config.service.server.port = 0;
        let result = config.validate();
        assert!(matches!(result, Err(ServiceError::Config(msg)) if msg.contains("port")));
    }

    #[test]
    fn test_wildcard_cors_with_credentials_rejected() {
        let mut config = Config::default();
        config.service.server.cors.allowed_origins = vec!["*".to_string()];
        config.service.server.cors.allow_credentials = true;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_recipient_rejected() {
        let mut config = Config::default();
        config.service.notifications.recipient = "sales at example".to_string();
        assert!(config.validate().is_err());

        // Not checked when notifications are off
        config.service.notifications.enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_log_level_rejected() {
        let mut config = Config::default();
        config.service.logging.level = "app=loud".to_string();
        assert!(config.validate().is_err());
    }
}
