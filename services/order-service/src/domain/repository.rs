//! 订单仓储接口

use async_trait::async_trait;
use storefront_errors::AppResult;

use super::{NewOrder, Order};

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// 保存新订单，状态为 pending，创建时间由存储端分配
    async fn create(&self, order: NewOrder) -> AppResult<Order>;

    /// 某个用户的全部订单，按存储顺序
    async fn list_by_user(&self, user_id: i64) -> AppResult<Vec<Order>>;
}
