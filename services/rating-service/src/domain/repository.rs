//! 评分仓储接口

use async_trait::async_trait;
use storefront_errors::AppResult;

use super::{Rating, RatingSummary};

#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// 追加一条评分
    async fn append(&self, rating: Rating) -> AppResult<()>;

    /// 计算某个商品的评分汇总
    async fn summary(&self, product_id: i64) -> AppResult<RatingSummary>;
}
