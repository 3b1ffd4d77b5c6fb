//! 批次业务处理

use std::sync::Arc;

use purchase_common::{PagedResult, Pagination, SortOrder, SortParam};
use purchase_errors::{AppError, AppResult};
use tracing::{debug, info};

use crate::domain::entities::{Lot, LotFilter, LotSortField};
use crate::domain::repositories::LotRepository;

pub struct LotHandler {
    repo: Arc<dyn LotRepository>,
}

impl LotHandler {
    pub fn new(repo: Arc<dyn LotRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(
        &self,
        filter: LotFilter,
        pagination: Pagination,
        sort: &[SortParam],
    ) -> AppResult<PagedResult<Lot>> {
        let sort = SortOrder::<LotSortField>::resolve(sort)?;
        debug!(
            ?filter,
            page = pagination.page,
            size = pagination.page_size,
            "Listing lots"
        );
        self.repo.find_all(&filter, &pagination, &sort).await
    }

    pub async fn get(&self, name: &str) -> AppResult<Lot> {
        self.repo
            .find_by_key(name)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Lot '{}' not found", name)))
    }

    pub async fn create(&self, lot: Lot) -> AppResult<Lot> {
        lot.validate()?;
        info!(lot_name = %lot.lot_name, customer_code = %lot.customer_code, "Creating lot");
        self.repo.insert(&lot).await
    }

    /// 整体替换批次，主键取自路径
    pub async fn replace(&self, name: &str, mut lot: Lot) -> AppResult<Lot> {
        lot.lot_name = name.to_string();
        lot.validate()?;
        info!(lot_name = %name, "Replacing lot");
        self.repo.replace(name, &lot).await
    }

    pub async fn delete(&self, name: &str) -> AppResult<()> {
        info!(lot_name = %name, "Deleting lot");
        self.repo.delete(name).await
    }
}
