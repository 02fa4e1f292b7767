//! 商品接口处理器

use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;
use storefront_errors::{AppError, AppResult};

use super::AppState;
use crate::application::PRODUCT_NOT_FOUND;
use crate::domain::EnrichedProduct;

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// GET /api/products
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<EnrichedProduct>> {
    Json(state.handler.list_products().await)
}

/// GET /api/products/search?q=
pub async fn search_products(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<EnrichedProduct>> {
    Json(state.handler.search_products(&query.q).await)
}

/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<EnrichedProduct>> {
    let Path(id) = path.map_err(|_| AppError::not_found(PRODUCT_NOT_FOUND))?;
    Ok(Json(state.handler.get_product(id).await?))
}
