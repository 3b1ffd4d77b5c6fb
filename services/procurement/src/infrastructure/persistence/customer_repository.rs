//! 客户仓储 PostgreSQL 实现

use async_trait::async_trait;
use purchase_adapter_postgres::{Filter, TableDef, map_read_error, map_write_error};
use purchase_bootstrap::metrics::DbQueryTimer;
use purchase_common::{PagedResult, Pagination, SortOrder};
use purchase_errors::{AppError, AppResult};
use purchase_ports::{PageableRepository, Repository};
use sqlx::PgPool;

use super::rows::CustomerRow;
use crate::domain::entities::{Customer, CustomerFilter, CustomerSortField};

const TABLE: TableDef = TableDef {
    table: "customer",
    columns: "customer_code, customer_name, customer_inn, customer_kpp, \
              customer_legal_address, customer_postal_address, customer_email, \
              customer_code_main, is_organization, is_person",
    key_column: "customer_code",
};

const FIND_BY_CODE: &str = "SELECT customer_code, customer_name, customer_inn, customer_kpp, \
    customer_legal_address, customer_postal_address, customer_email, customer_code_main, \
    is_organization, is_person \
    FROM customer WHERE customer_code = $1";

const INSERT: &str = "INSERT INTO customer (customer_code, customer_name, customer_inn, \
    customer_kpp, customer_legal_address, customer_postal_address, customer_email, \
    customer_code_main, is_organization, is_person) \
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
    RETURNING customer_code, customer_name, customer_inn, customer_kpp, \
    customer_legal_address, customer_postal_address, customer_email, customer_code_main, \
    is_organization, is_person";

const UPDATE: &str = "UPDATE customer SET customer_name = $2, customer_inn = $3, \
    customer_kpp = $4, customer_legal_address = $5, customer_postal_address = $6, \
    customer_email = $7, customer_code_main = $8, is_organization = $9, is_person = $10 \
    WHERE customer_code = $1 \
    RETURNING customer_code, customer_name, customer_inn, customer_kpp, \
    customer_legal_address, customer_postal_address, customer_email, customer_code_main, \
    is_organization, is_person";

const DELETE: &str = "DELETE FROM customer WHERE customer_code = $1";

pub struct PostgresCustomerRepository {
    pool: PgPool,
}

impl PostgresCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn sort_column(field: CustomerSortField) -> &'static str {
    match field {
        CustomerSortField::CustomerCode => "customer_code",
        CustomerSortField::CustomerName => "customer_name",
        CustomerSortField::CustomerInn => "customer_inn",
        CustomerSortField::CustomerKpp => "customer_kpp",
        CustomerSortField::IsOrganization => "is_organization",
        CustomerSortField::IsPerson => "is_person",
        CustomerSortField::CustomerLegalAddress => "customer_legal_address",
        CustomerSortField::CustomerPostalAddress => "customer_postal_address",
        CustomerSortField::CustomerEmail => "customer_email",
        CustomerSortField::CustomerCodeMain => "customer_code_main",
    }
}

fn build_filter(filter: &CustomerFilter) -> Filter {
    Filter::new()
        .contains("customer_code", filter.customer_code.as_deref())
        .contains("customer_name", filter.name.as_deref())
        .equals("customer_inn", filter.inn.as_deref())
        .equals("customer_kpp", filter.customer_kpp.as_deref())
        .equals("is_organization", filter.is_organization)
        .equals("is_person", filter.is_person)
        .contains(
            "customer_legal_address",
            filter.customer_legal_address.as_deref(),
        )
        .contains(
            "customer_postal_address",
            filter.customer_postal_address.as_deref(),
        )
        .contains("customer_email", filter.customer_email.as_deref())
        .contains("customer_code_main", filter.customer_code_main.as_deref())
}

fn not_found(code: &str) -> AppError {
    AppError::not_found(format!("Customer '{}' not found", code))
}

#[async_trait]
impl Repository<Customer, str> for PostgresCustomerRepository {
    async fn find_by_key(&self, key: &str) -> AppResult<Option<Customer>> {
        let timer = DbQueryTimer::new("select", "customer");
        let result = sqlx::query_as::<_, CustomerRow>(FIND_BY_CODE)
            .bind(key)
            .fetch_optional(&self.pool)
            .await;
        timer.finish(result.is_ok());

        let row = result.map_err(|e| map_read_error("Failed to fetch customer", e))?;
        Ok(row.map(Customer::from))
    }

    async fn insert(&self, entity: &Customer) -> AppResult<Customer> {
        let timer = DbQueryTimer::new("insert", "customer");
        let result = sqlx::query_as::<_, CustomerRow>(INSERT)
            .bind(&entity.customer_code)
            .bind(&entity.customer_name)
            .bind(&entity.customer_inn)
            .bind(&entity.customer_kpp)
            .bind(&entity.customer_legal_address)
            .bind(&entity.customer_postal_address)
            .bind(&entity.customer_email)
            .bind(&entity.customer_code_main)
            .bind(entity.is_organization)
            .bind(entity.is_person)
            .fetch_one(&self.pool)
            .await;
        timer.finish(result.is_ok());

        let row = result.map_err(|e| map_write_error("Failed to insert customer", e))?;
        Ok(row.into())
    }

    async fn replace(&self, key: &str, entity: &Customer) -> AppResult<Customer> {
        let timer = DbQueryTimer::new("update", "customer");
        let result = sqlx::query_as::<_, CustomerRow>(UPDATE)
            .bind(key)
            .bind(&entity.customer_name)
            .bind(&entity.customer_inn)
            .bind(&entity.customer_kpp)
            .bind(&entity.customer_legal_address)
            .bind(&entity.customer_postal_address)
            .bind(&entity.customer_email)
            .bind(&entity.customer_code_main)
            .bind(entity.is_organization)
            .bind(entity.is_person)
            .fetch_optional(&self.pool)
            .await;
        timer.finish(result.is_ok());

        result
            .map_err(|e| map_write_error("Failed to update customer", e))?
            .map(Customer::from)
            .ok_or_else(|| not_found(key))
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let timer = DbQueryTimer::new("delete", "customer");
        let result = sqlx::query(DELETE).bind(key).execute(&self.pool).await;
        timer.finish(result.is_ok());

        let result = result.map_err(|e| map_write_error("Failed to delete customer", e))?;
        if result.rows_affected() == 0 {
            return Err(not_found(key));
        }
        Ok(())
    }
}

#[async_trait]
impl PageableRepository<Customer, str, CustomerFilter, CustomerSortField>
    for PostgresCustomerRepository
{
    async fn find_all(
        &self,
        filter: &CustomerFilter,
        pagination: &Pagination,
        sort: &[SortOrder<CustomerSortField>],
    ) -> AppResult<PagedResult<Customer>> {
        let timer = DbQueryTimer::new("select_page", "customer");
        let result = self.fetch_page(filter, pagination, sort).await;
        timer.finish(result.is_ok());
        result
    }
}

impl PostgresCustomerRepository {
    async fn fetch_page(
        &self,
        filter: &CustomerFilter,
        pagination: &Pagination,
        sort: &[SortOrder<CustomerSortField>],
    ) -> AppResult<PagedResult<Customer>> {
        let predicates = build_filter(filter);
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| map_read_error("Failed to acquire connection", e))?;

        let mut page_query = TABLE.select_page(&predicates, sort, sort_column, pagination);
        let rows: Vec<CustomerRow> = page_query
            .build_query_as()
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| map_read_error("Failed to list customers", e))?;

        let mut count_query = TABLE.select_count(&predicates);
        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| map_read_error("Failed to count customers", e))?;

        let items = rows.into_iter().map(Customer::from).collect();
        Ok(PagedResult::new(items, total.max(0) as u64, pagination))
    }
}
