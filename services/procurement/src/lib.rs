//! procurement - 客户与采购批次服务

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
