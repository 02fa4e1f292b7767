//! order-service 入口

use std::sync::Arc;

use axum::Router;
use order_service::api::{router, AppState};
use order_service::application::OrderHandler;
use order_service::domain::OrderRepository;
use order_service::infrastructure::persistence::{
    order_migrations, InMemoryOrderRepository, PostgresOrderRepository,
};
use storefront_adapter_postgres::{check_connection, create_pool, MigrationManager, PostgresConfig};
use storefront_bootstrap::run;
use storefront_config::{AppConfig, ServiceDefaults};
use storefront_errors::AppResult;
use tracing::{info, warn};

async fn build(config: AppConfig) -> AppResult<Router> {
    let repo: Arc<dyn OrderRepository> = match &config.database {
        Some(database) => {
            let pool = create_pool(&PostgresConfig::from(database)).await?;
            check_connection(&pool).await?;

            let result = MigrationManager::new(pool.clone())
                .migrate(&order_migrations())
                .await?;
            info!(applied = result.applied_count(), "Database migrations finished");

            Arc::new(PostgresOrderRepository::new(pool))
        }
        None => {
            warn!("No [database] configured, orders are kept in memory only");
            Arc::new(InMemoryOrderRepository::new())
        }
    };

    Ok(router(AppState::new(OrderHandler::new(repo))))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run(ServiceDefaults::new("order-service", 8000), build).await
}
