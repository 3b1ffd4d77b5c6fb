//! 实体定义

mod customer;
mod lot;

pub use customer::*;
pub use lot::*;
