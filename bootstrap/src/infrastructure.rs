//! 基础设施资源管理
//!
//! 统一管理服务共享的基础设施资源

use std::time::Duration;

use purchase_adapter_postgres::{PostgresConfig, create_pool};
use purchase_config::AppConfig;
use purchase_errors::AppResult;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use tracing::info;

use crate::retry::{RetryConfig, with_retry};

/// 基础设施资源容器
///
/// 由 bootstrap 统一初始化后交给服务构建路由
#[derive(Clone)]
pub struct Infrastructure {
    /// PostgreSQL 连接池
    postgres_pool: PgPool,
}

impl Infrastructure {
    /// 从配置创建基础设施资源（带重试）
    pub async fn from_config(config: &AppConfig) -> AppResult<Self> {
        let pg_config = postgres_config(config);
        let postgres_pool = with_retry(&RetryConfig::default(), "PostgreSQL connection", || {
            let cfg = pg_config.clone();
            async move { create_pool(&cfg).await }
        })
        .await?;
        info!(
            max_connections = config.database.max_connections,
            "PostgreSQL connection pool created"
        );

        Ok(Self::new(postgres_pool))
    }

    /// 使用已有连接池
    pub fn new(postgres_pool: PgPool) -> Self {
        Self { postgres_pool }
    }

    /// 获取 PostgreSQL 连接池
    pub fn postgres_pool(&self) -> PgPool {
        self.postgres_pool.clone()
    }
}

fn postgres_config(config: &AppConfig) -> PostgresConfig {
    PostgresConfig::new(config.database.url.expose_secret())
        .with_pool(
            config.database.min_connections,
            config.database.max_connections,
        )
        .with_acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
        .with_idle_timeout(Duration::from_secs(config.database.idle_timeout_secs))
        .with_max_lifetime(Duration::from_secs(config.database.max_lifetime_secs))
        .with_application_name(config.app_name.clone())
}
