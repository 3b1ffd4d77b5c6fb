//! 集成测试公共设施：内存仓储与请求辅助函数

#![allow(dead_code)]

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::{NaiveDate, NaiveDateTime};
use procurement::api::{self, AppState};
use procurement::domain::entities::{
    Customer, CustomerFilter, CustomerSortField, Lot, LotFilter, LotSortField,
};
use purchase_common::{PagedResult, Pagination, SortDirection, SortOrder};
use purchase_errors::{AppError, AppResult};
use purchase_ports::{PageableRepository, Repository};
use rust_decimal::Decimal;
use serde_json::Value;
use tower::ServiceExt;

/// 排序键
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Key {
    Text(Option<String>),
    Bool(bool),
    Decimal(Decimal),
    Time(NaiveDateTime),
}

fn contains_ci(haystack: Option<&str>, needle: &Option<String>) -> bool {
    match needle {
        None => true,
        Some(n) => haystack
            .map(|h| h.to_lowercase().contains(&n.to_lowercase()))
            .unwrap_or(false),
    }
}

fn equals<T: PartialEq + ?Sized>(value: Option<&T>, expected: Option<&T>) -> bool {
    match expected {
        None => true,
        Some(e) => value == Some(e),
    }
}

fn compare_by<T, K: Copy>(
    a: &T,
    b: &T,
    sort: &[SortOrder<K>],
    key_of: impl Fn(&T, K) -> Key,
    primary: impl Fn(&T) -> &str,
) -> Ordering {
    for order in sort {
        let ordering = key_of(a, order.field).cmp(&key_of(b, order.field));
        let ordering = match order.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    primary(a).cmp(primary(b))
}

fn paginate<T: Clone>(items: Vec<T>, pagination: &Pagination) -> PagedResult<T> {
    let total = items.len() as u64;
    let page = items
        .into_iter()
        .skip(pagination.offset() as usize)
        .take(pagination.limit() as usize)
        .collect();
    PagedResult::new(page, total, pagination)
}

/// 内存客户仓储
#[derive(Default)]
pub struct InMemoryCustomers {
    rows: Mutex<BTreeMap<String, Customer>>,
}

fn customer_key(c: &Customer, field: CustomerSortField) -> Key {
    match field {
        CustomerSortField::CustomerCode => Key::Text(Some(c.customer_code.clone())),
        CustomerSortField::CustomerName => Key::Text(Some(c.customer_name.clone())),
        CustomerSortField::CustomerInn => Key::Text(c.customer_inn.clone()),
        CustomerSortField::CustomerKpp => Key::Text(c.customer_kpp.clone()),
        CustomerSortField::IsOrganization => Key::Bool(c.is_organization),
        CustomerSortField::IsPerson => Key::Bool(c.is_person),
        CustomerSortField::CustomerLegalAddress => Key::Text(c.customer_legal_address.clone()),
        CustomerSortField::CustomerPostalAddress => Key::Text(c.customer_postal_address.clone()),
        CustomerSortField::CustomerEmail => Key::Text(c.customer_email.clone()),
        CustomerSortField::CustomerCodeMain => Key::Text(c.customer_code_main.clone()),
    }
}

fn customer_matches(c: &Customer, f: &CustomerFilter) -> bool {
    contains_ci(Some(&c.customer_code), &f.customer_code)
        && contains_ci(Some(&c.customer_name), &f.name)
        && equals(c.customer_inn.as_deref(), f.inn.as_deref())
        && equals(c.customer_kpp.as_deref(), f.customer_kpp.as_deref())
        && equals(Some(&c.is_organization), f.is_organization.as_ref())
        && equals(Some(&c.is_person), f.is_person.as_ref())
        && contains_ci(c.customer_legal_address.as_deref(), &f.customer_legal_address)
        && contains_ci(c.customer_postal_address.as_deref(), &f.customer_postal_address)
        && contains_ci(c.customer_email.as_deref(), &f.customer_email)
        && contains_ci(c.customer_code_main.as_deref(), &f.customer_code_main)
}

#[async_trait]
impl Repository<Customer, str> for InMemoryCustomers {
    async fn find_by_key(&self, key: &str) -> AppResult<Option<Customer>> {
        Ok(self.rows.lock().unwrap().get(key).cloned())
    }

    async fn insert(&self, entity: &Customer) -> AppResult<Customer> {
        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(&entity.customer_code) {
            return Err(AppError::validation("Failed to insert customer: record already exists"));
        }
        rows.insert(entity.customer_code.clone(), entity.clone());
        Ok(entity.clone())
    }

    async fn replace(&self, key: &str, entity: &Customer) -> AppResult<Customer> {
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(key) {
            Some(row) => {
                *row = entity.clone();
                Ok(entity.clone())
            }
            None => Err(AppError::not_found(format!("Customer '{}' not found", key))),
        }
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.rows
            .lock()
            .unwrap()
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("Customer '{}' not found", key)))
    }
}

#[async_trait]
impl PageableRepository<Customer, str, CustomerFilter, CustomerSortField> for InMemoryCustomers {
    async fn find_all(
        &self,
        filter: &CustomerFilter,
        pagination: &Pagination,
        sort: &[SortOrder<CustomerSortField>],
    ) -> AppResult<PagedResult<Customer>> {
        let mut items: Vec<Customer> = self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|c| customer_matches(c, filter))
            .cloned()
            .collect();
        items.sort_by(|a, b| compare_by(a, b, sort, customer_key, |c| c.customer_code.as_str()));
        Ok(paginate(items, pagination))
    }
}

/// 内存批次仓储
#[derive(Default)]
pub struct InMemoryLots {
    rows: Mutex<BTreeMap<String, Lot>>,
}

fn lot_key(l: &Lot, field: LotSortField) -> Key {
    match field {
        LotSortField::LotName => Key::Text(Some(l.lot_name.clone())),
        LotSortField::CustomerCode => Key::Text(Some(l.customer_code.clone())),
        LotSortField::Price => Key::Decimal(l.price),
        LotSortField::CurrencyCode => Key::Text(Some(l.currency_code.clone())),
        LotSortField::DateDelivery => Key::Time(l.date_delivery),
        LotSortField::NdsRate => Key::Text(Some(l.nds_rate.clone())),
        LotSortField::PlaceDelivery => Key::Text(Some(l.place_delivery.clone())),
    }
}

fn lot_matches(l: &Lot, f: &LotFilter) -> bool {
    contains_ci(Some(&l.lot_name), &f.lot_name)
        && equals(Some(l.customer_code.as_str()), f.customer_code.as_deref())
        && f.min_price.is_none_or(|min| l.price >= min)
        && f.max_price.is_none_or(|max| l.price <= max)
        && equals(Some(l.currency_code.as_str()), f.currency_code.as_deref())
        && equals(Some(l.nds_rate.as_str()), f.nds_rate.as_deref())
        && contains_ci(Some(&l.place_delivery), &f.place_delivery)
}

#[async_trait]
impl Repository<Lot, str> for InMemoryLots {
    async fn find_by_key(&self, key: &str) -> AppResult<Option<Lot>> {
        Ok(self.rows.lock().unwrap().get(key).cloned())
    }

    async fn insert(&self, entity: &Lot) -> AppResult<Lot> {
        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(&entity.lot_name) {
            return Err(AppError::validation("Failed to insert lot: record already exists"));
        }
        rows.insert(entity.lot_name.clone(), entity.clone());
        Ok(entity.clone())
    }

    async fn replace(&self, key: &str, entity: &Lot) -> AppResult<Lot> {
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(key) {
            Some(row) => {
                *row = entity.clone();
                Ok(entity.clone())
            }
            None => Err(AppError::not_found(format!("Lot '{}' not found", key))),
        }
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.rows
            .lock()
            .unwrap()
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("Lot '{}' not found", key)))
    }
}

#[async_trait]
impl PageableRepository<Lot, str, LotFilter, LotSortField> for InMemoryLots {
    async fn find_all(
        &self,
        filter: &LotFilter,
        pagination: &Pagination,
        sort: &[SortOrder<LotSortField>],
    ) -> AppResult<PagedResult<Lot>> {
        let mut items: Vec<Lot> = self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|l| lot_matches(l, filter))
            .cloned()
            .collect();
        items.sort_by(|a, b| compare_by(a, b, sort, lot_key, |l| l.lot_name.as_str()));
        Ok(paginate(items, pagination))
    }
}

/// 基于内存仓储的完整路由
pub fn app() -> Router {
    api::router(AppState::new(
        Arc::new(InMemoryCustomers::default()),
        Arc::new(InMemoryLots::default()),
    ))
}

/// 发送请求，返回状态码、Content-Type 和 JSON 响应体（无响应体时为 `Null`）
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Option<String>, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, content_type, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = send(app, "GET", uri, None).await;
    (status, body)
}

pub fn customer_json(code: &str, name: &str) -> Value {
    serde_json::json!({
        "customerCode": code,
        "customerName": name,
    })
}

/// `price` 以 JSON 数字写入，保留原始小数位
pub fn lot_json(name: &str, customer: &str, price: &str, date: NaiveDate) -> Value {
    let price: serde_json::Number = price.parse().unwrap();
    serde_json::json!({
        "lotName": name,
        "customerCode": customer,
        "price": price,
        "currencyCode": "RUB",
        "ndsRate": "20%",
        "placeDelivery": "Moscow, Tverskaya 1",
        "dateDelivery": date.and_hms_opt(10, 0, 0).unwrap(),
    })
}

/// 提取分页响应中某个字段的值列表
pub fn column(page: &Value, field: &str) -> Vec<String> {
    page["content"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item[field].as_str().unwrap().to_string())
        .collect()
}
