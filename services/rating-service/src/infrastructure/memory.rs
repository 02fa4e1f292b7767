//! 进程内评分存储
//!
//! 追加持写锁，汇总持读锁

use async_trait::async_trait;
use storefront_errors::AppResult;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::{Rating, RatingRepository, RatingSummary};

#[derive(Debug, Default)]
pub struct InMemoryRatingRepository {
    ratings: RwLock<Vec<Rating>>,
}

impl InMemoryRatingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ratings(ratings: Vec<Rating>) -> Self {
        Self {
            ratings: RwLock::new(ratings),
        }
    }

    /// 演示数据
    pub fn seeded() -> Self {
        Self::with_ratings(vec![
            Rating::new(1, 1, 4.5, "Great laptop!"),
            Rating::new(1, 2, 4.0, "Good value"),
            Rating::new(2, 3, 3.5, "Average quality"),
        ])
    }

    pub async fn len(&self) -> usize {
        self.ratings.read().await.len()
    }
}

#[async_trait]
impl RatingRepository for InMemoryRatingRepository {
    async fn append(&self, rating: Rating) -> AppResult<()> {
        let mut ratings = self.ratings.write().await;
        debug!(
            product_id = rating.product_id,
            user_id = rating.user_id,
            total = ratings.len() + 1,
            "Rating appended"
        );
        ratings.push(rating);
        Ok(())
    }

    async fn summary(&self, product_id: i64) -> AppResult<RatingSummary> {
        let ratings = self.ratings.read().await;
        Ok(RatingSummary::compute(product_id, ratings.iter()))
    }
}
