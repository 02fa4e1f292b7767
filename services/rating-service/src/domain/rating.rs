//! 评分实体与汇总计算

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// 单条评分，只追加不修改
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub product_id: i64,
    pub user_id: i64,
    pub rating: f64,
    pub comment: String,
}

impl Rating {
    pub fn new(product_id: i64, user_id: i64, rating: f64, comment: impl Into<String>) -> Self {
        Self {
            product_id,
            user_id,
            rating,
            comment: comment.into(),
        }
    }
}

/// 评分汇总（按请求计算，不持久化）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    pub product_id: i64,
    pub avg_rating: Option<f64>,
    pub count: usize,
}

impl RatingSummary {
    pub fn empty(product_id: i64) -> Self {
        Self {
            product_id,
            avg_rating: None,
            count: 0,
        }
    }

    /// 计算某个商品的平均分，保留一位小数
    pub fn compute<'a>(product_id: i64, ratings: impl IntoIterator<Item = &'a Rating>) -> Self {
        let (sum, count) = ratings
            .into_iter()
            .filter(|r| r.product_id == product_id)
            .fold((0.0_f64, 0_usize), |(sum, count), r| (sum + r.rating, count + 1));

        if count == 0 {
            return Self::empty(product_id);
        }

        Self {
            product_id,
            avg_rating: Some(round_to_tenth(sum / count as f64)),
            count,
        }
    }
}

/// 保留一位小数，中点取偶（按 f64 的精确值判断中点）
pub fn round_to_tenth(value: f64) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(1, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}
