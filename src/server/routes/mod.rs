//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod health;
pub mod orders;
pub mod pricing;

use crate::utils::error::{Result, ServiceError};
use actix_web::{HttpRequest, HttpResponse, web};

/// Standard API response structure
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Response data (if successful)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message (if failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T>
where
    T: serde::Serialize,
{
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// Register every route of the service
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(pricing::configure_pricing_routes)
        .configure(orders::configure_order_routes);
}

/// JSON extractor settings; malformed bodies become `BAD_REQUEST` errors
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            ServiceError::bad_request(format!("Invalid JSON body: {}", err)).into()
        })
}

/// Query extractor settings; malformed query strings become `BAD_REQUEST` errors
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        ServiceError::bad_request(format!("Invalid query string: {}", err)).into()
    })
}

/// Fallback for unmatched routes
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse> {
    Err(ServiceError::not_found(format!(
        "No route for {} {}",
        req.method(),
        req.path()
    )))
}
