//! HTTP 接口层

mod handlers;

pub use handlers::*;

use axum::{routing::get, Router};
use storefront_bootstrap::health_check;

use crate::application::ProductHandler;

/// 处理器共享状态
#[derive(Clone)]
pub struct AppState {
    pub handler: ProductHandler,
}

impl AppState {
    pub fn new(handler: ProductHandler) -> Self {
        Self { handler }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/products/health", get(health_check))
        .route("/api/products", get(list_products))
        .route("/api/products/search", get(search_products))
        .route("/api/products/{id}", get(get_product))
        .with_state(state)
}
