//! HTTP 接口层

mod dto;
mod handlers;

pub use dto::*;
pub use handlers::*;

use axum::{
    routing::{get, post},
    Router,
};
use storefront_bootstrap::health_check;

use crate::application::OrderHandler;

/// 处理器共享状态
#[derive(Clone)]
pub struct AppState {
    pub handler: OrderHandler,
}

impl AppState {
    pub fn new(handler: OrderHandler) -> Self {
        Self { handler }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/create", post(create_order))
        .route("/{user_id}", get(list_orders))
        .with_state(state)
}
