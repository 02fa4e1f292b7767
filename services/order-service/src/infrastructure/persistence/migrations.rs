//! orders 表结构

use storefront_adapter_postgres::Migration;

pub fn order_migrations() -> Vec<Migration> {
    vec![
        Migration::new(
            1,
            "create_orders",
            r#"
            CREATE TABLE IF NOT EXISTS orders (
                id BIGSERIAL PRIMARY KEY,
                user_id BIGINT NOT NULL,
                total NUMERIC(10, 2) NOT NULL,
                status VARCHAR(50) NOT NULL DEFAULT 'pending',
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                items JSONB NOT NULL
            )
            "#,
        ),
        Migration::new(
            2,
            "orders_user_id_index",
            "CREATE INDEX IF NOT EXISTS idx_orders_user_id ON orders (user_id)",
        ),
    ]
}
