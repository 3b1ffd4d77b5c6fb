//! common - 通用类型和工具库

pub mod sort;
pub mod types;

pub use sort::*;
pub use types::*;
