//! Pricing API endpoints
//!
//! Tier table, package catalogue and quote calculation for the public
//! pricing calculator.

use crate::config::models::{NamedPackage, PriceTier};
use crate::core::pricing::{
    CustomerStatus, QuoteDisplay, QuoteRequest, QuoteResult, TierSelector, format_money,
};
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::{Result, ServiceError};
use actix_web::{HttpResponse, web};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configure pricing routes
pub fn configure_pricing_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/pricing")
            .route("/tiers", web::get().to(list_tiers))
            .route("/packages", web::get().to(list_packages))
            .route("/quote", web::get().to(quote_from_query))
            .route("/quote", web::post().to(quote_from_body)),
    );
}

/// One row of the tier table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierView {
    pub name: String,
    pub min_mailboxes: u32,
    /// Largest count billed at this tier; `None` for the top tier
    pub max_mailboxes: Option<u32>,
    pub price_per_mailbox: Decimal,
    pub display_price: String,
}

/// Tier table response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TiersResponse {
    pub currency: String,
    pub tiers: Vec<TierView>,
    pub setup_fee: Decimal,
    pub setup_fee_display: String,
    pub max_mailboxes: u32,
}

/// One entry of the package catalogue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageView {
    pub name: String,
    pub inbox_count: u32,
    pub monthly_price: Decimal,
    pub price_per_mailbox: Decimal,
    pub display_price: String,
}

/// Package catalogue response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackagesResponse {
    pub currency: String,
    pub packages: Vec<PackageView>,
}

/// Computed quote with display strings
#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    pub quote: QuoteResult,
    pub display: QuoteDisplay,
}

/// Query parameters for `GET /api/v1/pricing/quote`
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteQuery {
    /// Mailbox count
    pub mailboxes: Option<u32>,
    /// `custom` or a package name
    pub package: Option<String>,
    /// `new` or `existing`
    pub customer: Option<String>,
}

impl QuoteQuery {
    /// Convert query parameters into a quote request
    ///
    /// `customer` is required. A missing `package` means the slider's
    /// `custom` path.
    pub fn into_request(self) -> Result<QuoteRequest> {
        let customer_status = self
            .customer
            .as_deref()
            .ok_or_else(|| ServiceError::validation("Query parameter 'customer' is required"))?
            .parse::<CustomerStatus>()
            .map_err(ServiceError::Validation)?;
        let package = self
            .package
            .as_deref()
            .map_or(TierSelector::Custom, TierSelector::from);

        Ok(QuoteRequest {
            mailbox_count: self.mailboxes,
            package,
            customer_status,
        })
    }
}

/// List price tiers
/// GET /api/v1/pricing/tiers
pub async fn list_tiers(state: web::Data<AppState>) -> Result<HttpResponse> {
    let pricing = state.engine.config();
    let tiers = tier_views(&pricing.tiers);

    Ok(HttpResponse::Ok().json(ApiResponse::success(TiersResponse {
        currency: pricing.currency.clone(),
        tiers,
        setup_fee: pricing.setup_fee,
        setup_fee_display: format_money(pricing.setup_fee),
        max_mailboxes: pricing.max_mailboxes,
    })))
}

/// List named packages
/// GET /api/v1/pricing/packages
pub async fn list_packages(state: web::Data<AppState>) -> Result<HttpResponse> {
    let pricing = state.engine.config();
    let packages = pricing.packages.iter().map(package_view).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(PackagesResponse {
        currency: pricing.currency.clone(),
        packages,
    })))
}

/// Quote from query parameters
/// GET /api/v1/pricing/quote?mailboxes=50&package=custom&customer=new
pub async fn quote_from_query(
    state: web::Data<AppState>,
    query: web::Query<QuoteQuery>,
) -> Result<HttpResponse> {
    let request = query.into_inner().into_request()?;
    respond_with_quote(&state, &request)
}

/// Quote from a JSON body
/// POST /api/v1/pricing/quote
pub async fn quote_from_body(
    state: web::Data<AppState>,
    payload: web::Json<QuoteRequest>,
) -> Result<HttpResponse> {
    respond_with_quote(&state, &payload)
}

fn respond_with_quote(state: &AppState, request: &QuoteRequest) -> Result<HttpResponse> {
    debug!("Quote requested: {:?}", request);
    let quote = state.quotes.quote(request)?;
    let display = quote.display();

    Ok(HttpResponse::Ok().json(ApiResponse::success(QuoteResponse { quote, display })))
}

fn tier_views(tiers: &[PriceTier]) -> Vec<TierView> {
    tiers
        .iter()
        .enumerate()
        .map(|(index, tier)| TierView {
            name: tier.name.clone(),
            min_mailboxes: tier.min_mailboxes,
            max_mailboxes: tiers
                .get(index + 1)
                .map(|next| next.min_mailboxes.saturating_sub(1)),
            price_per_mailbox: tier.price_per_mailbox,
            display_price: format_money(tier.price_per_mailbox),
        })
        .collect()
}

fn package_view(package: &NamedPackage) -> PackageView {
    PackageView {
        name: package.name.clone(),
        inbox_count: package.inbox_count,
        monthly_price: package.monthly_price,
        price_per_mailbox: package.price_per_mailbox(),
        display_price: format_money(package.monthly_price),
    }
}
