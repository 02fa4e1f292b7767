//! HTTP 接口层

mod dto;
mod handlers;

pub use dto::*;
pub use handlers::*;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use storefront_bootstrap::health_check;

use crate::domain::RatingRepository;

/// 处理器共享状态
#[derive(Clone)]
pub struct AppState {
    pub ratings: Arc<dyn RatingRepository>,
}

impl AppState {
    pub fn new(ratings: Arc<dyn RatingRepository>) -> Self {
        Self { ratings }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/ratings/health", get(health_check))
        .route("/api/ratings", post(add_rating))
        .route("/api/ratings/{product_id}", get(get_rating))
        .with_state(state)
}
