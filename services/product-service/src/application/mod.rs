//! 应用层

mod enricher;
mod handler;

pub use enricher::*;
pub use handler::*;
