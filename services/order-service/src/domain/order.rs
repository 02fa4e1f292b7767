//! 订单实体

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use storefront_errors::{AppError, AppResult};

/// NUMERIC(10, 2) 能表示的上限（不含）
const MAX_TOTAL: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);

/// 订单状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(AppError::internal(format!("Unknown order status: {}", other))),
        }
    }
}

/// 已持久化的订单
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    /// 原样透传，不解析
    pub items: Value,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// 待创建的订单（已校验）
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub user_id: i64,
    pub total: Decimal,
    pub items: Value,
}

impl NewOrder {
    /// 金额保留两位小数，必须非负且不超过 NUMERIC(10, 2)
    pub fn new(user_id: i64, total: Decimal, items: Value) -> AppResult<Self> {
        let total = total.round_dp(2);
        if total < Decimal::ZERO {
            return Err(AppError::validation("total must not be negative"));
        }
        if total >= MAX_TOTAL {
            return Err(AppError::validation("total exceeds the maximum of 99999999.99"));
        }

        Ok(Self {
            user_id,
            total,
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_status_round_trip_through_str() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Paid,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
        assert!("refunded".parse::<OrderStatus>().is_err());
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn test_new_order_rounds_total() {
        let order = NewOrder::new(1, Decimal::new(19995, 3), json!([])).unwrap();
        assert_eq!(order.total, Decimal::new(2000, 2));
    }

    #[test]
    fn test_new_order_rejects_negative_total() {
        assert!(NewOrder::new(1, Decimal::new(-1, 2), json!([])).is_err());
        assert!(NewOrder::new(1, Decimal::ZERO, json!([])).is_ok());
    }

    #[test]
    fn test_new_order_rejects_oversized_total() {
        assert!(NewOrder::new(1, Decimal::new(9_999_999_999, 2), json!([])).is_ok());
        assert!(NewOrder::new(1, Decimal::new(100_000_000, 0), json!([])).is_err());
    }

    #[test]
    fn test_order_json_shape() {
        let order = Order {
            id: 7,
            user_id: 42,
            items: json!([{ "productId": 1, "quantity": 2 }]),
            total: Decimal::new(199998, 2),
            status: OrderStatus::Pending,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        };

        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            json!({
                "id": 7,
                "userId": 42,
                "items": [{ "productId": 1, "quantity": 2 }],
                "total": 1999.98,
                "status": "pending",
                "createdAt": "2024-05-01T12:00:00Z"
            })
        );
    }
}
