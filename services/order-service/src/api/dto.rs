//! 请求结构

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Map, Value};
use storefront_errors::{AppError, AppResult};

use crate::domain::NewOrder;

pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields";

/// 创建订单请求，三个字段均为必填
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub user_id: Option<i64>,
    pub total: Option<Decimal>,
    pub items: Option<Value>,
}

impl CreateOrderRequest {
    /// 只接受 JSON 对象，数组不按位置映射字段
    pub fn from_object(object: Map<String, Value>) -> AppResult<Self> {
        serde_json::from_value(Value::Object(object))
            .map_err(|e| AppError::validation(format!("Invalid request body: {}", e)))
    }

    pub fn into_new_order(self) -> AppResult<NewOrder> {
        match (self.user_id, self.total, self.items) {
            (Some(user_id), Some(total), Some(items)) => NewOrder::new(user_id, total, items),
            _ => Err(AppError::validation(MISSING_REQUIRED_FIELDS)),
        }
    }
}
