//! PostgreSQL repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::Value;
use sqlx::PgPool;
use storefront_errors::{AppError, AppResult};

use crate::domain::{NewOrder, Order, OrderRepository, OrderStatus};

#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: i64,
    user_id: i64,
    total: Decimal,
    status: String,
    created_at: DateTime<Utc>,
    items: Value,
}

impl TryFrom<OrderRow> for Order {
    type Error = AppError;

    fn try_from(row: OrderRow) -> AppResult<Self> {
        Ok(Order {
            id: row.id,
            user_id: row.user_id,
            items: row.items,
            total: row.total,
            status: row.status.parse()?,
            created_at: row.created_at,
        })
    }
}

pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn create(&self, order: NewOrder) -> AppResult<Order> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            INSERT INTO orders (user_id, total, status, items)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, total, status, created_at, items
            "#,
        )
        .bind(order.user_id)
        .bind(order.total)
        .bind(OrderStatus::Pending.as_str())
        .bind(&order.items)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to insert order: {}", e)))?;

        row.try_into()
    }

    async fn list_by_user(&self, user_id: i64) -> AppResult<Vec<Order>> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, user_id, total, status, created_at, items
            FROM orders
            WHERE user_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list orders: {}", e)))?;

        rows.into_iter().map(Order::try_from).collect()
    }
}
