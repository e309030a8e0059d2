//! HTTP API integration tests
//!
//! Drives the assembled application the way the pricing calculator and the
//! order form do.

#[cfg(test)]
mod tests {
    use crate::common::assertions::{assert_error_code, assert_success};
    use crate::common::fixtures::{ConfigFactory, OrderFactory};
    use actix_web::http::StatusCode;
    use actix_web::{test, web};
    use mailbox_quote::config::PricingConfig;
    use mailbox_quote::server::{AppState, HttpServer};
    use mailbox_quote::services::quote::{MemoryNotifier, NotificationKind};
    use rust_decimal::Decimal;
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn app_state(config: mailbox_quote::Config) -> (web::Data<AppState>, Arc<MemoryNotifier>) {
        let notifier = Arc::new(MemoryNotifier::new());
        let state = AppState::with_notifier(config, notifier.clone()).unwrap();
        (web::Data::new(state), notifier)
    }

    #[actix_web::test]
    async fn test_calculator_flow() {
        let (state, _) = app_state(ConfigFactory::with_memory_notifier());
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::get()
            .uri("/api/v1/pricing/tiers")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let tiers = assert_success(&body)["tiers"].as_array().unwrap().clone();
        assert_eq!(tiers.len(), 3);

        // Quote each tier's lower bound
        for tier in tiers {
            let min = tier["min_mailboxes"].as_u64().unwrap();
            let req = test::TestRequest::get()
                .uri(&format!("/api/v1/pricing/quote?mailboxes={}&customer=existing", min))
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(assert_success(&body)["quote"]["tier_name"], tier["name"]);
        }
    }

    #[actix_web::test]
    async fn test_quote_amounts_serialize_as_strings() {
        let (state, _) = app_state(ConfigFactory::with_memory_notifier());
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/pricing/quote")
            .set_json(json!({"mailbox_count": 50, "package": "custom", "customer_status": "new"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let quote = &assert_success(&body)["quote"];

        let total: Decimal = quote["total_due"].as_str().unwrap().parse().unwrap();
        assert_eq!(total, Decimal::new(16499, 2));
        assert_eq!(quote["customer_status"], "new");
    }

    #[actix_web::test]
    async fn test_mailbox_limit() {
        let (state, _) = app_state(ConfigFactory::with_memory_notifier());
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::get()
            .uri("/api/v1/pricing/quote?mailboxes=10001&customer=existing")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_error_code(&body, "MAILBOX_LIMIT_EXCEEDED");
    }

    #[actix_web::test]
    async fn test_missing_mailbox_count() {
        let (state, _) = app_state(ConfigFactory::with_memory_notifier());
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::get()
            .uri("/api/v1/pricing/quote?customer=new")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_error_code(&body, "MISSING_MAILBOX_COUNT");
    }

    #[actix_web::test]
    async fn test_order_and_notification() {
        let (state, notifier) = app_state(ConfigFactory::with_memory_notifier());
        let app = test::init_service(HttpServer::create_app(state)).await;

        let mut order = OrderFactory::custom(120);
        order.message = Some("<b>Please</b> hurry".to_string());
        let req = test::TestRequest::post()
            .uri("/api/v1/orders")
            .set_json(&order)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        let data = assert_success(&body);
        assert_eq!(data["display"]["monthly_cost"], "$300.00");
        assert_eq!(data["display"]["total_due"], "$324.99");
        let reference = data["reference"].as_str().unwrap();

        let sent = notifier.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].kind, NotificationKind::Order);
        assert_eq!(sent[0].reply_to, order.email);
        assert!(sent[0].text_body.contains(reference));
        assert!(sent[0].html_body.contains("&lt;b&gt;Please&lt;/b&gt;"));
    }

    #[actix_web::test]
    async fn test_package_order_from_existing_customer() {
        let (state, notifier) = app_state(ConfigFactory::with_memory_notifier());
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/orders")
            .set_json(OrderFactory::package("starter"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let data = assert_success(&body);

        assert_eq!(data["quote"]["package"], "Starter");
        assert_eq!(data["display"]["total_due"], "$30.00");
        assert_eq!(notifier.len(), 1);
    }

    #[actix_web::test]
    async fn test_invalid_email_rejected() {
        let (state, notifier) = app_state(ConfigFactory::with_memory_notifier());
        let app = test::init_service(HttpServer::create_app(state)).await;

        let mut order = OrderFactory::custom(10);
        order.email = "nobody".to_string();
        let req = test::TestRequest::post()
            .uri("/api/v1/orders")
            .set_json(&order)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_error_code(&body, "VALIDATION_ERROR");
        assert!(notifier.is_empty());
    }

    #[actix_web::test]
    async fn test_contact_request() {
        let (state, notifier) = app_state(ConfigFactory::with_memory_notifier());
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/contact")
            .set_json(OrderFactory::contact())
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(assert_success(&body)["notified"], true);
        assert_eq!(notifier.sent()[0].kind, NotificationKind::Contact);
    }

    #[actix_web::test]
    async fn test_custom_pricing_table_is_served() {
        let pricing = PricingConfig {
            setup_fee: Decimal::ZERO,
            packages: vec![],
            ..Default::default()
        };
        let (state, _) = app_state(ConfigFactory::with_pricing(pricing));
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::get()
            .uri("/api/v1/pricing/packages")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(assert_success(&body)["packages"].as_array().unwrap().is_empty());

        let req = test::TestRequest::get()
            .uri("/api/v1/pricing/quote?mailboxes=10&customer=new")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(assert_success(&body)["display"]["total_due"], "$30.00");
    }

    #[actix_web::test]
    async fn test_oversized_body_rejected() {
        let mut config = ConfigFactory::with_memory_notifier();
        config.service.server.max_body_size = 256;
        let (state, notifier) = app_state(config);
        let app = test::init_service(HttpServer::create_app(state)).await;

        let mut contact = OrderFactory::contact();
        contact.message = "x".repeat(1024);
        let req = test::TestRequest::post()
            .uri("/api/v1/contact")
            .set_json(&contact)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(notifier.is_empty());
    }
}
