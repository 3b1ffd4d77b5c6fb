//! 领域层
//!
//! 实体、查询条件、排序字段和仓储接口

pub mod entities;
pub mod repositories;

pub use entities::*;
pub use repositories::*;
