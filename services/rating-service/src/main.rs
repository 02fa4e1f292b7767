//! rating-service 入口

use std::sync::Arc;

use axum::Router;
use rating_service::api::{router, AppState};
use rating_service::infrastructure::InMemoryRatingRepository;
use storefront_bootstrap::run;
use storefront_config::{AppConfig, ServiceDefaults};
use storefront_errors::AppResult;
use tracing::info;

async fn build(config: AppConfig) -> AppResult<Router> {
    let repo = if config.ratings.seed_demo_data {
        InMemoryRatingRepository::seeded()
    } else {
        InMemoryRatingRepository::new()
    };
    info!(ratings = repo.len().await, "Rating store initialized");

    Ok(router(AppState::new(Arc::new(repo))))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run(ServiceDefaults::new("rating-service", 4000), build).await
}
