//! 数据库行映射结构

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::FromRow;

use crate::domain::entities::{Customer, Lot};

/// 客户数据库行
#[derive(Debug, FromRow)]
pub struct CustomerRow {
    pub customer_code: String,
    pub customer_name: String,
    pub customer_inn: Option<String>,
    pub customer_kpp: Option<String>,
    pub customer_legal_address: Option<String>,
    pub customer_postal_address: Option<String>,
    pub customer_email: Option<String>,
    pub customer_code_main: Option<String>,
    pub is_organization: bool,
    pub is_person: bool,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Self {
            customer_code: row.customer_code,
            customer_name: row.customer_name,
            customer_inn: row.customer_inn,
            customer_kpp: row.customer_kpp,
            customer_legal_address: row.customer_legal_address,
            customer_postal_address: row.customer_postal_address,
            customer_email: row.customer_email,
            customer_code_main: row.customer_code_main,
            is_organization: row.is_organization,
            is_person: row.is_person,
        }
    }
}

/// 批次数据库行
#[derive(Debug, FromRow)]
pub struct LotRow {
    pub lot_name: String,
    pub customer_code: String,
    pub price: Decimal,
    pub currency_code: String,
    pub nds_rate: String,
    pub place_delivery: String,
    pub date_delivery: NaiveDateTime,
}

impl From<LotRow> for Lot {
    fn from(row: LotRow) -> Self {
        Self {
            lot_name: row.lot_name,
            customer_code: row.customer_code,
            price: row.price,
            currency_code: row.currency_code,
            nds_rate: row.nds_rate,
            place_delivery: row.place_delivery,
            date_delivery: row.date_delivery,
        }
    }
}
