//! 订单接口处理器

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use serde_json::{Map, Value};
use storefront_errors::{AppError, AppResult};

use super::{AppState, CreateOrderRequest};
use crate::domain::Order;

/// POST /create
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> AppResult<Json<Order>> {
    let Json(object) = payload?;
    let new_order = CreateOrderRequest::from_object(object)?.into_new_order()?;
    let order = state.handler.create_order(new_order).await?;
    Ok(Json(order))
}

/// GET /{user_id}
pub async fn list_orders(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Vec<Order>>> {
    let Path(user_id) = path.map_err(|_| AppError::not_found("Not found"))?;
    Ok(Json(state.handler.list_orders(user_id).await?))
}
