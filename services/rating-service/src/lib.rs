//! rating-service - 商品评分服务
//!
//! 评分只追加保存在进程内，按请求计算平均分

pub mod api;
pub mod domain;
pub mod infrastructure;
