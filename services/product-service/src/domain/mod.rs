//! 领域层

mod product;
mod rating;

pub use product::*;
pub use rating::*;
