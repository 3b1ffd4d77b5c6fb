//! 仓储接口模块

mod customer_repository;
mod lot_repository;

pub use customer_repository::CustomerRepository;
pub use lot_repository::LotRepository;
