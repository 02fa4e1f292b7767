//! 基础设施层

mod memory;

pub use memory::*;
