//! 客户业务处理

use std::sync::Arc;

use purchase_common::{PagedResult, Pagination, SortOrder, SortParam};
use purchase_errors::{AppError, AppResult};
use tracing::{debug, info};

use crate::domain::entities::{Customer, CustomerFilter, CustomerSortField};
use crate::domain::repositories::CustomerRepository;

pub struct CustomerHandler {
    repo: Arc<dyn CustomerRepository>,
}

impl CustomerHandler {
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self {
        Self { repo }
    }

    /// 分页查询客户，排序属性不在白名单内时返回校验错误
    pub async fn list(
        &self,
        filter: CustomerFilter,
        pagination: Pagination,
        sort: &[SortParam],
    ) -> AppResult<PagedResult<Customer>> {
        let sort = SortOrder::<CustomerSortField>::resolve(sort)?;
        debug!(
            ?filter,
            page = pagination.page,
            size = pagination.page_size,
            "Listing customers"
        );
        self.repo.find_all(&filter, &pagination, &sort).await
    }

    pub async fn get(&self, code: &str) -> AppResult<Customer> {
        self.repo
            .find_by_key(code)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Customer '{}' not found", code)))
    }

    pub async fn create(&self, customer: Customer) -> AppResult<Customer> {
        customer.validate()?;
        info!(customer_code = %customer.customer_code, "Creating customer");
        self.repo.insert(&customer).await
    }

    /// 整体替换客户，主键取自路径
    pub async fn replace(&self, code: &str, mut customer: Customer) -> AppResult<Customer> {
        customer.customer_code = code.to_string();
        customer.validate()?;
        info!(customer_code = %code, "Replacing customer");
        self.repo.replace(code, &customer).await
    }

    pub async fn delete(&self, code: &str) -> AppResult<()> {
        info!(customer_code = %code, "Deleting customer");
        self.repo.delete(code).await
    }
}
