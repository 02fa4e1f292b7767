//! 商品评分装饰
//!
//! 每个商品单独查询评分服务；任何失败都降级为无评分，不向调用方传播

use std::sync::Arc;

use futures::future::join_all;
use tracing::warn;

use crate::domain::{EnrichedProduct, Product, RatingClient, RatingLookup, RatingSummary};

#[derive(Clone)]
pub struct ProductEnricher {
    client: Arc<dyn RatingClient>,
}

impl ProductEnricher {
    pub fn new(client: Arc<dyn RatingClient>) -> Self {
        Self { client }
    }

    pub async fn enrich(&self, product: Product) -> EnrichedProduct {
        let summary = match self.client.lookup(product.id).await {
            RatingLookup::Found(summary) => summary,
            RatingLookup::Unavailable(status) => {
                warn!(product_id = product.id, status, "Rating service returned non-success status");
                RatingSummary::default()
            }
            RatingLookup::TimedOut => {
                warn!(product_id = product.id, "Rating lookup timed out");
                RatingSummary::default()
            }
            RatingLookup::Failed(reason) => {
                warn!(product_id = product.id, error = %reason, "Rating lookup failed");
                RatingSummary::default()
            }
        };

        EnrichedProduct::new(product, summary)
    }

    /// 并发查询，结果顺序与输入一致
    pub async fn enrich_all(&self, products: Vec<Product>) -> Vec<EnrichedProduct> {
        join_all(products.into_iter().map(|p| self.enrich(p))).await
    }
}
