//! 请求/响应结构

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use storefront_errors::{AppError, AppResult};

use crate::domain::Rating;

pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields";

/// 新增评分请求，必填字段在 `into_rating` 中校验
#[derive(Debug, Deserialize)]
pub struct AddRatingRequest {
    pub product_id: Option<i64>,
    pub user_id: Option<i64>,
    pub rating: Option<f64>,
    pub comment: Option<String>,
}

impl AddRatingRequest {
    /// 只接受 JSON 对象；数组会被 serde 按位置填充字段，这里直接拒绝
    pub fn from_object(object: Map<String, Value>) -> AppResult<Self> {
        serde_json::from_value(Value::Object(object))
            .map_err(|_| AppError::validation(MISSING_REQUIRED_FIELDS))
    }

    pub fn into_rating(self) -> AppResult<Rating> {
        match (self.product_id, self.user_id, self.rating) {
            (Some(product_id), Some(user_id), Some(rating)) => Ok(Rating::new(
                product_id,
                user_id,
                rating,
                self.comment.unwrap_or_default(),
            )),
            _ => Err(AppError::validation(MISSING_REQUIRED_FIELDS)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
