//! purchase-bootstrap - 统一服务启动骨架
//!
//! HTTP 服务复用的启动逻辑：配置、日志、连接池、健康检查、metrics、优雅关闭

pub mod health;
pub mod infrastructure;
pub mod metrics;
mod retry;
mod runtime;
mod starter;

pub use health::{ComponentHealth, HealthChecker, HealthStatus, health_routes};
pub use infrastructure::Infrastructure;
pub use retry::*;
pub use runtime::*;
pub use starter::*;
