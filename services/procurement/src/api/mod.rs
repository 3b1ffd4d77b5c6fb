//! HTTP 接口层

mod customers;
mod dto;
mod extract;
mod lots;
mod params;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use sqlx::PgPool;

use crate::application::{CustomerHandler, LotHandler};
use crate::domain::repositories::{CustomerRepository, LotRepository};
use crate::infrastructure::persistence::{PostgresCustomerRepository, PostgresLotRepository};

pub use dto::PageResponse;
pub use extract::{ApiJson, ApiQuery};
pub use params::{CustomerListParams, LotListParams, PageParams, sort_params};

/// 路由共享状态
#[derive(Clone)]
pub struct AppState {
    pub customers: Arc<CustomerHandler>,
    pub lots: Arc<LotHandler>,
}

impl AppState {
    pub fn new(customers: Arc<dyn CustomerRepository>, lots: Arc<dyn LotRepository>) -> Self {
        Self {
            customers: Arc::new(CustomerHandler::new(customers)),
            lots: Arc::new(LotHandler::new(lots)),
        }
    }

    /// 基于 PostgreSQL 仓储构建
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PostgresCustomerRepository::new(pool.clone())),
            Arc::new(PostgresLotRepository::new(pool)),
        )
    }
}

/// 业务路由
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/customers", get(customers::list).post(customers::create))
        .route(
            "/api/customers/{code}",
            get(customers::get)
                .put(customers::replace)
                .delete(customers::delete),
        )
        .route("/api/lots", get(lots::list).post(lots::create))
        .route(
            "/api/lots/{name}",
            get(lots::get).put(lots::replace).delete(lots::delete),
        )
        .with_state(state)
}
