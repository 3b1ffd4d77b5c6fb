//! 批次仓储 PostgreSQL 实现

use async_trait::async_trait;
use purchase_adapter_postgres::{Filter, TableDef, map_read_error, map_write_error};
use purchase_bootstrap::metrics::DbQueryTimer;
use purchase_common::{PagedResult, Pagination, SortOrder};
use purchase_errors::{AppError, AppResult};
use purchase_ports::{PageableRepository, Repository};
use sqlx::PgPool;

use super::rows::LotRow;
use crate::domain::entities::{Lot, LotFilter, LotSortField};

const TABLE: TableDef = TableDef {
    table: "lot",
    columns: "lot_name, customer_code, price, currency_code, nds_rate, place_delivery, date_delivery",
    key_column: "lot_name",
};

const FIND_BY_NAME: &str = "SELECT lot_name, customer_code, price, currency_code, nds_rate, \
    place_delivery, date_delivery FROM lot WHERE lot_name = $1";

const INSERT: &str = "INSERT INTO lot (lot_name, customer_code, price, currency_code, \
    nds_rate, place_delivery, date_delivery) VALUES ($1, $2, $3, $4, $5, $6, $7) \
    RETURNING lot_name, customer_code, price, currency_code, nds_rate, place_delivery, \
    date_delivery";

const UPDATE: &str = "UPDATE lot SET customer_code = $2, price = $3, currency_code = $4, \
    nds_rate = $5, place_delivery = $6, date_delivery = $7 WHERE lot_name = $1 \
    RETURNING lot_name, customer_code, price, currency_code, nds_rate, place_delivery, \
    date_delivery";

const DELETE: &str = "DELETE FROM lot WHERE lot_name = $1";

pub struct PostgresLotRepository {
    pool: PgPool,
}

impl PostgresLotRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_page(
        &self,
        filter: &LotFilter,
        pagination: &Pagination,
        sort: &[SortOrder<LotSortField>],
    ) -> AppResult<PagedResult<Lot>> {
        let predicates = build_filter(filter);
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| map_read_error("Failed to acquire connection", e))?;

        let mut page_query = TABLE.select_page(&predicates, sort, sort_column, pagination);
        let rows: Vec<LotRow> = page_query
            .build_query_as()
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| map_read_error("Failed to list lots", e))?;

        let mut count_query = TABLE.select_count(&predicates);
        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| map_read_error("Failed to count lots", e))?;

        Ok(PagedResult::new(
            rows.into_iter().map(Lot::from).collect(),
            total.max(0) as u64,
            pagination,
        ))
    }
}

fn sort_column(field: LotSortField) -> &'static str {
    match field {
        LotSortField::LotName => "lot_name",
        LotSortField::CustomerCode => "customer_code",
        LotSortField::Price => "price",
        LotSortField::CurrencyCode => "currency_code",
        LotSortField::DateDelivery => "date_delivery",
        LotSortField::NdsRate => "nds_rate",
        LotSortField::PlaceDelivery => "place_delivery",
    }
}

fn build_filter(filter: &LotFilter) -> Filter {
    Filter::new()
        .contains("lot_name", filter.lot_name.as_deref())
        .equals("customer_code", filter.customer_code.as_deref())
        .at_least("price", filter.min_price)
        .at_most("price", filter.max_price)
        .equals("currency_code", filter.currency_code.as_deref())
        .equals("nds_rate", filter.nds_rate.as_deref())
        .contains("place_delivery", filter.place_delivery.as_deref())
}

fn not_found(name: &str) -> AppError {
    AppError::not_found(format!("Lot '{}' not found", name))
}

#[async_trait]
impl Repository<Lot, str> for PostgresLotRepository {
    async fn find_by_key(&self, key: &str) -> AppResult<Option<Lot>> {
        let timer = DbQueryTimer::new("select", "lot");
        let result = sqlx::query_as::<_, LotRow>(FIND_BY_NAME)
            .bind(key)
            .fetch_optional(&self.pool)
            .await;
        timer.finish(result.is_ok());

        Ok(result
            .map_err(|e| map_read_error("Failed to fetch lot", e))?
            .map(Lot::from))
    }

    async fn insert(&self, entity: &Lot) -> AppResult<Lot> {
        let timer = DbQueryTimer::new("insert", "lot");
        let result = sqlx::query_as::<_, LotRow>(INSERT)
            .bind(&entity.lot_name)
            .bind(&entity.customer_code)
            .bind(entity.price)
            .bind(&entity.currency_code)
            .bind(&entity.nds_rate)
            .bind(&entity.place_delivery)
            .bind(entity.date_delivery)
            .fetch_one(&self.pool)
            .await;
        timer.finish(result.is_ok());

        let row = result.map_err(|e| map_write_error("Failed to insert lot", e))?;
        Ok(row.into())
    }

    async fn replace(&self, key: &str, entity: &Lot) -> AppResult<Lot> {
        let timer = DbQueryTimer::new("update", "lot");
        let result = sqlx::query_as::<_, LotRow>(UPDATE)
            .bind(key)
            .bind(&entity.customer_code)
            .bind(entity.price)
            .bind(&entity.currency_code)
            .bind(&entity.nds_rate)
            .bind(&entity.place_delivery)
            .bind(entity.date_delivery)
            .fetch_optional(&self.pool)
            .await;
        timer.finish(result.is_ok());

        result
            .map_err(|e| map_write_error("Failed to update lot", e))?
            .map(Lot::from)
            .ok_or_else(|| not_found(key))
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let timer = DbQueryTimer::new("delete", "lot");
        let result = sqlx::query(DELETE).bind(key).execute(&self.pool).await;
        timer.finish(result.is_ok());

        let affected = result
            .map_err(|e| map_write_error("Failed to delete lot", e))?
            .rows_affected();
        if affected == 0 {
            return Err(not_found(key));
        }
        Ok(())
    }
}

#[async_trait]
impl PageableRepository<Lot, str, LotFilter, LotSortField> for PostgresLotRepository {
    async fn find_all(
        &self,
        filter: &LotFilter,
        pagination: &Pagination,
        sort: &[SortOrder<LotSortField>],
    ) -> AppResult<PagedResult<Lot>> {
        let timer = DbQueryTimer::new("select_page", "lot");
        let result = self.fetch_page(filter, pagination, sort).await;
        timer.finish(result.is_ok());
        result
    }
}
