//! product-service 入口

use std::sync::Arc;

use axum::Router;
use product_service::api::{router, AppState};
use product_service::application::{ProductEnricher, ProductHandler};
use product_service::domain::ProductCatalog;
use product_service::infrastructure::HttpRatingClient;
use storefront_bootstrap::run;
use storefront_config::{AppConfig, ServiceDefaults};
use storefront_errors::AppResult;
use tracing::info;

async fn build(config: AppConfig) -> AppResult<Router> {
    let catalog = ProductCatalog::builtin();
    let client = HttpRatingClient::from_config(&config.rating_client)?;
    info!(
        products = catalog.len(),
        rating_service = %client.base_url(),
        timeout_ms = config.rating_client.timeout_ms,
        "Product catalog loaded"
    );

    let handler = ProductHandler::new(catalog, ProductEnricher::new(Arc::new(client)));
    Ok(router(AppState::new(handler)))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run(ServiceDefaults::new("product-service", 5001), build).await
}
