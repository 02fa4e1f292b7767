//! 领域层

mod rating;
mod repository;

pub use rating::*;
pub use repository::*;
