//! 评分接口处理器

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::{Map, Value};
use storefront_errors::{AppError, AppResult};
use tracing::{debug, info};

use super::{AddRatingRequest, AppState, MessageResponse, MISSING_REQUIRED_FIELDS};
use crate::domain::RatingSummary;

/// GET /api/ratings/{product_id}
pub async fn get_rating(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<RatingSummary>> {
    let Path(product_id) = path.map_err(|_| AppError::not_found("Not found"))?;
    let summary = state.ratings.summary(product_id).await?;
    Ok(Json(summary))
}

/// POST /api/ratings
///
/// 请求体不是 JSON 对象时与缺字段同样处理
pub async fn add_rating(
    State(state): State<AppState>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let Json(object) = payload.map_err(|rejection| {
        debug!(error = %rejection.body_text(), "Rejected rating payload");
        AppError::validation(MISSING_REQUIRED_FIELDS)
    })?;
    let rating = AddRatingRequest::from_object(object)?.into_rating()?;

    info!(
        product_id = rating.product_id,
        user_id = rating.user_id,
        "Adding rating"
    );
    state.ratings.append(rating).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Rating added successfully!".to_string(),
        }),
    ))
}
