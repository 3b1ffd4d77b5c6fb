//! `/api/lots` 端点

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use purchase_errors::AppResult;

use super::dto::PageResponse;
use super::extract::{ApiJson, ApiQuery};
use super::params::{LotListParams, PageParams, sort_params};
use super::AppState;
use crate::domain::entities::Lot;

pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<LotListParams>,
    ApiQuery(paging): ApiQuery<PageParams>,
    ApiQuery(pairs): ApiQuery<Vec<(String, String)>>,
) -> AppResult<Json<PageResponse<Lot>>> {
    let page = state
        .lots
        .list(params.filter(), paging.pagination(), &sort_params(&pairs))
        .await?;
    Ok(Json(page.into()))
}

pub async fn get(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Lot>> {
    Ok(Json(state.lots.get(&name).await?))
}

pub async fn create(
    State(state): State<AppState>,
    ApiJson(lot): ApiJson<Lot>,
) -> AppResult<(StatusCode, Json<Lot>)> {
    let created = state.lots.create(lot).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn replace(
    State(state): State<AppState>,
    Path(name): Path<String>,
    ApiJson(lot): ApiJson<Lot>,
) -> AppResult<Json<Lot>> {
    Ok(Json(state.lots.replace(&name, lot).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<StatusCode> {
    state.lots.delete(&name).await?;
    Ok(StatusCode::NO_CONTENT)
}
