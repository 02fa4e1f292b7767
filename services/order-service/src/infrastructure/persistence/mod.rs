//! 订单持久化

mod memory;
mod migrations;
mod postgres;

pub use memory::*;
pub use migrations::*;
pub use postgres::*;
