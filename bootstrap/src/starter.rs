//! 服务启动器
//!
//! 提供统一的 HTTP 服务启动模式

use std::future::Future;
use std::time::Duration;

use axum::{Router, http::HeaderValue, middleware};
use purchase_config::{AppConfig, CorsConfig};
use purchase_errors::AppResult;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::health::{HealthChecker, health_routes};
use crate::infrastructure::Infrastructure;
use crate::metrics::{MetricsRecorder, PoolMetricsCollector, metrics_routes, track_http_metrics};
use crate::runtime::{init_runtime, shutdown_signal};

/// 连接池指标采集间隔
const POOL_METRICS_INTERVAL: Duration = Duration::from_secs(15);

/// 运行 HTTP 服务
///
/// 统一入口：
/// 1. 加载 `.env` 与配置
/// 2. 初始化日志和 metrics
/// 3. 创建数据库连接池（带重试）
/// 4. 调用 `router_builder` 构建业务路由
/// 5. 挂载 /health、/ready、/metrics 以及 CORS、trace 中间件
/// 6. 启动服务器并处理 graceful shutdown
///
/// # 示例
///
/// ```ignore
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     purchase_bootstrap::run_http("config", |infra| async move {
///         Ok(api::router(infra.postgres_pool()))
///     })
///     .await
/// }
/// ```
pub async fn run_http<F, Fut>(
    config_dir: &str,
    router_builder: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(Infrastructure) -> Fut,
    Fut: Future<Output = AppResult<Router>>,
{
    if let Err(e) = dotenvy::dotenv() {
        // 没有 .env 文件属于正常情况
        if !e.not_found() {
            return Err(e.into());
        }
    }

    let config = AppConfig::load(config_dir)?;
    init_runtime(&config);
    info!("Starting {} service", config.app_name);

    let recorder = MetricsRecorder::install()?;
    let infra = Infrastructure::from_config(&config).await?;

    let collector = PoolMetricsCollector::new(infra.postgres_pool(), POOL_METRICS_INTERVAL);
    let collector_handle = collector.start();

    let health = HealthChecker::new(infra.postgres_pool());
    let api = router_builder(infra).await?;
    let app = compose_router(api, health, recorder, &config.cors);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "HTTP server starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    collector_handle.abort();
    info!("Service stopped");

    Ok(())
}

/// 合并业务路由与运维路由，并挂载公共中间件
pub fn compose_router(
    api: Router,
    health: HealthChecker,
    recorder: MetricsRecorder,
    cors: &CorsConfig,
) -> Router {
    api.merge(health_routes(health))
        .merge(metrics_routes(recorder))
        .layer(middleware::from_fn(track_http_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors(cors))
}

/// 按配置构建 CORS 层，未配置来源时放行所有来源
pub fn build_cors(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
