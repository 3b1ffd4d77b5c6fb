//! 应用层

mod customer_handler;
mod lot_handler;

pub use customer_handler::CustomerHandler;
pub use lot_handler::LotHandler;
