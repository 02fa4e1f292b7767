//! product-service - 商品目录服务
//!
//! 返回的每个商品都附带从 rating-service 查询到的评分汇总

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
