//! 进程内订单存储，未配置数据库时使用

use async_trait::async_trait;
use chrono::Utc;
use storefront_errors::AppResult;
use tokio::sync::RwLock;

use crate::domain::{NewOrder, Order, OrderRepository, OrderStatus};

#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<Vec<Order>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, order: NewOrder) -> AppResult<Order> {
        let mut orders = self.orders.write().await;
        // id 与下标一一对应，从 1 开始
        let order = Order {
            id: orders.len() as i64 + 1,
            user_id: order.user_id,
            items: order.items,
            total: order.total,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        };
        orders.push(order.clone());
        Ok(order)
    }

    async fn list_by_user(&self, user_id: i64) -> AppResult<Vec<Order>> {
        let orders = self.orders.read().await;
        Ok(orders
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryOrderRepository::new();
        let first = repo
            .create(NewOrder::new(1, Decimal::new(1000, 2), json!([])).unwrap())
            .await
            .unwrap();
        let second = repo
            .create(NewOrder::new(2, Decimal::new(500, 2), json!([])).unwrap())
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.status, OrderStatus::Pending);
        assert!(second.created_at >= first.created_at);
    }

    #[tokio::test]
    async fn test_list_by_user_keeps_insertion_order() {
        let repo = InMemoryOrderRepository::new();
        for (user, cents) in [(7, 100), (8, 200), (7, 300)] {
            repo.create(NewOrder::new(user, Decimal::new(cents, 2), json!({})).unwrap())
                .await
                .unwrap();
        }

        let orders = repo.list_by_user(7).await.unwrap();
        let totals: Vec<Decimal> = orders.iter().map(|o| o.total).collect();
        assert_eq!(totals, vec![Decimal::new(100, 2), Decimal::new(300, 2)]);
        assert!(repo.list_by_user(99).await.unwrap().is_empty());
    }
}
