//! 应用层

mod handler;

pub use handler::*;
