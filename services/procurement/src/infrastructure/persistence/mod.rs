//! Persistence implementations

mod customer_repository;
mod lot_repository;
mod rows;

pub use customer_repository::PostgresCustomerRepository;
pub use lot_repository::PostgresLotRepository;
