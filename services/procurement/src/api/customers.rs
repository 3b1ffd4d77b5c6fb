//! `/api/customers` 端点

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use purchase_errors::AppResult;

use super::dto::PageResponse;
use super::extract::{ApiJson, ApiQuery};
use super::params::{CustomerListParams, PageParams, sort_params};
use super::AppState;
use crate::domain::entities::Customer;

pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<CustomerListParams>,
    ApiQuery(paging): ApiQuery<PageParams>,
    ApiQuery(pairs): ApiQuery<Vec<(String, String)>>,
) -> AppResult<Json<PageResponse<Customer>>> {
    let page = state
        .customers
        .list(params.filter(), paging.pagination(), &sort_params(&pairs))
        .await?;
    Ok(Json(page.into()))
}

pub async fn get(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<Customer>> {
    Ok(Json(state.customers.get(&code).await?))
}

pub async fn create(
    State(state): State<AppState>,
    ApiJson(customer): ApiJson<Customer>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    let created = state.customers.create(customer).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn replace(
    State(state): State<AppState>,
    Path(code): Path<String>,
    ApiJson(customer): ApiJson<Customer>,
) -> AppResult<Json<Customer>> {
    Ok(Json(state.customers.replace(&code, customer).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<StatusCode> {
    state.customers.delete(&code).await?;
    Ok(StatusCode::NO_CONTENT)
}
