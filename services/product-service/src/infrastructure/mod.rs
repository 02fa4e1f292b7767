//! 基础设施层

mod rating_client;

pub use rating_client::*;
