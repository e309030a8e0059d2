//! Order and contact form endpoints

use crate::server::middleware::RequestId;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::services::quote::{ContactSubmission, OrderSubmission};
use crate::utils::error::Result;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, web};
use tracing::info;

/// Configure order and contact routes
pub fn configure_order_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/v1/orders", web::post().to(submit_order))
        .route("/api/v1/contact", web::post().to(submit_contact));
}

/// Submit an order
/// POST /api/v1/orders
pub async fn submit_order(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: web::Json<OrderSubmission>,
) -> Result<HttpResponse> {
    let order = payload.into_inner();
    info!(
        request_id = %request_id(&req),
        package = %order.package,
        mailboxes = ?order.mailbox_count,
        "Order submitted"
    );

    let confirmation = state.quotes.submit_order(order).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(confirmation)))
}

/// Submit a contact message
/// POST /api/v1/contact
pub async fn submit_contact(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: web::Json<ContactSubmission>,
) -> Result<HttpResponse> {
    info!(request_id = %request_id(&req), "Contact request submitted");

    let receipt = state.quotes.submit_contact(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(receipt)))
}

fn request_id(req: &HttpRequest) -> String {
    req.extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_else(|| "-".to_string())
}
