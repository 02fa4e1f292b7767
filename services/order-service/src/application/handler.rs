//! 订单用例

use std::sync::Arc;

use storefront_errors::AppResult;
use tracing::info;

use crate::domain::{NewOrder, Order, OrderRepository};

#[derive(Clone)]
pub struct OrderHandler {
    repo: Arc<dyn OrderRepository>,
}

impl OrderHandler {
    pub fn new(repo: Arc<dyn OrderRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_order(&self, order: NewOrder) -> AppResult<Order> {
        let order = self.repo.create(order).await?;
        info!(
            order_id = order.id,
            user_id = order.user_id,
            total = %order.total,
            "Order created"
        );
        Ok(order)
    }

    pub async fn list_orders(&self, user_id: i64) -> AppResult<Vec<Order>> {
        self.repo.list_by_user(user_id).await
    }
}
