//! order-service - 订单服务
//!
//! 订单保存在 PostgreSQL `orders` 表，只支持创建和按用户查询

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
