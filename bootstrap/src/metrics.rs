//! Metrics 模块
//!
//! 提供 Prometheus metrics 导出

use std::time::{Duration, Instant};

use axum::{
    Router,
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
    routing::get,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusHandle;
use purchase_adapter_postgres::{PoolStatus, pool_status};
use purchase_errors::{AppError, AppResult};
use purchase_telemetry::init_metrics;
use sqlx::PgPool;
use tracing::debug;

/// Metrics 记录器
#[derive(Clone)]
pub struct MetricsRecorder {
    handle: PrometheusHandle,
}

impl MetricsRecorder {
    /// 安装全局 Prometheus recorder，进程内只能调用一次
    pub fn install() -> AppResult<Self> {
        let handle = init_metrics()
            .map_err(|e| AppError::internal(format!("Failed to install Prometheus recorder: {}", e)))?;
        Ok(Self { handle })
    }

    pub fn from_handle(handle: PrometheusHandle) -> Self {
        Self { handle }
    }

    /// 获取 Prometheus 格式的 metrics
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// `/metrics` 路由
pub fn metrics_routes(recorder: MetricsRecorder) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(recorder)
}

async fn metrics_handler(State(recorder): State<MetricsRecorder>) -> impl IntoResponse {
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4",
        )],
        recorder.render(),
    )
}

/// 记录 HTTP 请求
pub fn record_http_request(method: &str, path: &str, status: u16, duration_ms: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];

    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_ms", &labels).record(duration_ms);
}

/// HTTP 请求计量中间件
///
/// 使用路由模板（如 `/api/customers/{code}`）作为标签，避免标签基数膨胀。
pub async fn track_http_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(req).await;

    let duration = start.elapsed().as_secs_f64() * 1000.0;
    record_http_request(&method, &path, response.status().as_u16(), duration);
    response
}

/// 记录数据库查询
pub fn record_db_query(operation: &str, table: &str, duration_ms: f64, success: bool) {
    let labels = [
        ("operation", operation.to_string()),
        ("table", table.to_string()),
        ("success", success.to_string()),
    ];

    counter!("db_queries_total", &labels).increment(1);
    histogram!("db_query_duration_ms", &labels).record(duration_ms);
}

/// 数据库查询计时器
pub struct DbQueryTimer {
    start: Instant,
    operation: &'static str,
    table: &'static str,
}

impl DbQueryTimer {
    pub fn new(operation: &'static str, table: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
            table,
        }
    }

    pub fn finish(self, success: bool) {
        let duration = self.start.elapsed().as_secs_f64() * 1000.0;
        record_db_query(self.operation, self.table, duration, success);
    }
}

/// 记录 PostgreSQL 连接池指标
pub fn record_postgres_pool_metrics(status: &PoolStatus) {
    gauge!("postgres_pool_size").set(status.size as f64);
    gauge!("postgres_pool_idle").set(status.idle as f64);
    gauge!("postgres_pool_active").set(status.active as f64);

    let utilization = if status.size > 0 {
        (status.active as f64 / status.size as f64) * 100.0
    } else {
        0.0
    };
    gauge!("postgres_pool_utilization").set(utilization);
}

/// 连接池 Metrics 采集器
pub struct PoolMetricsCollector {
    pool: PgPool,
    interval: Duration,
}

impl PoolMetricsCollector {
    pub fn new(pool: PgPool, interval: Duration) -> Self {
        Self { pool, interval }
    }

    /// 启动后台采集任务
    pub fn start(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            loop {
                ticker.tick().await;
                let status = pool_status(&self.pool);
                record_postgres_pool_metrics(&status);
                debug!(
                    size = status.size,
                    idle = status.idle,
                    active = status.active,
                    "Pool metrics collected"
                );
            }
        })
    }
}
