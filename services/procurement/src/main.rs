//! procurement Service - Customers & Procurement Lots

use procurement::api::{self, AppState};
use purchase_bootstrap::{Infrastructure, run_http};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_http("config", |infra: Infrastructure| async move {
        info!("Initializing procurement service...");

        let state = AppState::postgres(infra.postgres_pool());
        info!("Repositories initialized");

        Ok(api::router(state))
    })
    .await
}
