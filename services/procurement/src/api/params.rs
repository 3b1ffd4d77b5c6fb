//! 查询参数

use std::fmt::Display;
use std::str::FromStr;

use purchase_common::{Pagination, SortParam};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, de};

use crate::domain::entities::{CustomerFilter, LotFilter};

/// 空白值视为未提供，其余去掉首尾空白后按 `FromStr` 解析
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}

/// 空白文本视为未提供，非空白文本原样保留
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|value| !value.trim().is_empty()))
}

/// 分页参数 `page`、`size`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub size: Option<i64>,
}

impl PageParams {
    pub fn pagination(&self) -> Pagination {
        Pagination::from_request(self.page, self.size)
    }
}

/// 从原始查询对中收集所有 `sort` 值，保持出现顺序
pub fn sort_params(pairs: &[(String, String)]) -> Vec<SortParam> {
    let values: Vec<&str> = pairs
        .iter()
        .filter(|(key, _)| key == "sort")
        .map(|(_, value)| value.as_str())
        .collect();
    SortParam::parse_all(&values)
}

/// `GET /api/customers` 查询参数
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerListParams {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub customer_code: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub inn: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub is_organization: Option<bool>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub is_person: Option<bool>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub customer_kpp: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub customer_legal_address: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub customer_postal_address: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub customer_email: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub customer_code_main: Option<String>,
}

impl CustomerListParams {
    pub fn filter(&self) -> CustomerFilter {
        CustomerFilter {
            customer_code: self.customer_code.clone(),
            name: self.name.clone(),
            inn: self.inn.clone(),
            customer_kpp: self.customer_kpp.clone(),
            is_organization: self.is_organization,
            is_person: self.is_person,
            customer_legal_address: self.customer_legal_address.clone(),
            customer_postal_address: self.customer_postal_address.clone(),
            customer_email: self.customer_email.clone(),
            customer_code_main: self.customer_code_main.clone(),
        }
    }
}

/// `GET /api/lots` 查询参数
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LotListParams {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub lot_name: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub customer_code: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub min_price: Option<Decimal>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub max_price: Option<Decimal>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub currency_code: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub nds_rate: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub place_delivery: Option<String>,
}

impl LotListParams {
    pub fn filter(&self) -> LotFilter {
        LotFilter {
            lot_name: self.lot_name.clone(),
            customer_code: self.customer_code.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            currency_code: self.currency_code.clone(),
            nds_rate: self.nds_rate.clone(),
            place_delivery: self.place_delivery.clone(),
        }
    }
}
