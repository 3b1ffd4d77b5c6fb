//! 分页查询构造
//!
//! 数据查询与计数查询共用同一个 [`Filter`]，计数查询不带排序和分页。

use purchase_common::{Pagination, SortOrder};
use sqlx::{Postgres, QueryBuilder};

use crate::filter::Filter;

/// 表描述：表名、查询列和主键列
#[derive(Debug, Clone, Copy)]
pub struct TableDef {
    pub table: &'static str,
    pub columns: &'static str,
    pub key_column: &'static str,
}

impl TableDef {
    /// `SELECT columns FROM table WHERE ... ORDER BY ... LIMIT $n OFFSET $m`
    ///
    /// 主键总是作为最后的升序排序项（除非已被显式指定），保证翻页结果稳定。
    pub fn select_page<'args, K: Copy>(
        &self,
        filter: &Filter,
        sort: &[SortOrder<K>],
        column_of: impl Fn(K) -> &'static str,
        pagination: &Pagination,
    ) -> QueryBuilder<'args, Postgres> {
        let mut builder = QueryBuilder::new(format!("SELECT {} FROM {}", self.columns, self.table));
        filter.push_where(&mut builder);
        self.push_order_by(&mut builder, sort, column_of);
        builder.push(" LIMIT ");
        builder.push_bind(pagination.limit() as i64);
        builder.push(" OFFSET ");
        builder.push_bind(pagination.offset() as i64);
        builder
    }

    /// `SELECT COUNT(*) FROM table WHERE ...`
    pub fn select_count<'args>(&self, filter: &Filter) -> QueryBuilder<'args, Postgres> {
        let mut builder = QueryBuilder::new(format!("SELECT COUNT(*) FROM {}", self.table));
        filter.push_where(&mut builder);
        builder
    }

    fn push_order_by<K: Copy>(
        &self,
        builder: &mut QueryBuilder<'_, Postgres>,
        sort: &[SortOrder<K>],
        column_of: impl Fn(K) -> &'static str,
    ) {
        let mut columns: Vec<&'static str> = Vec::with_capacity(sort.len() + 1);
        builder.push(" ORDER BY ");
        for order in sort {
            let column = column_of(order.field);
            if columns.contains(&column) {
                continue;
            }
            if !columns.is_empty() {
                builder.push(", ");
            }
            builder.push(format!("{} {}", column, order.direction));
            columns.push(column);
        }
        if !columns.contains(&self.key_column) {
            if !columns.is_empty() {
                builder.push(", ");
            }
            builder.push(format!("{} ASC", self.key_column));
        }
    }
}
