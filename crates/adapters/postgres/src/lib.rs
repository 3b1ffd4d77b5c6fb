//! purchase-adapter-postgres - PostgreSQL 适配器

mod config;
mod connection;
mod error;
mod filter;
mod query;

pub use config::*;
pub use connection::*;
pub use error::*;
pub use filter::*;
pub use query::*;
