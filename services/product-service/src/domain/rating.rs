//! 评分汇总与查询结果

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::Product;

/// 评分汇总，查询失败时使用 `Default`（无评分）
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    pub avg_rating: Option<f64>,
    pub count: u64,
}

/// 一次评分查询的结果
#[derive(Debug, Clone, PartialEq)]
pub enum RatingLookup {
    /// 200 且响应体可解析
    Found(RatingSummary),
    /// 非 200 状态码
    Unavailable(u16),
    /// 超时
    TimedOut,
    /// 连接失败或响应体无法解析
    Failed(String),
}

impl RatingLookup {
    pub fn summary(&self) -> Option<RatingSummary> {
        match self {
            Self::Found(summary) => Some(*summary),
            _ => None,
        }
    }
}

/// 评分服务客户端
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RatingClient: Send + Sync {
    async fn lookup(&self, product_id: i64) -> RatingLookup;
}

/// 附带评分汇总的商品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedProduct {
    #[serde(flatten)]
    pub product: Product,
    pub avg_rating: Option<f64>,
    pub rating_count: u64,
}

impl EnrichedProduct {
    pub fn new(product: Product, summary: RatingSummary) -> Self {
        Self {
            product,
            avg_rating: summary.avg_rating,
            rating_count: summary.count,
        }
    }
}
