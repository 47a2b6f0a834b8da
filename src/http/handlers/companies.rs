//! `/companies` handlers.

use crate::company::services::{CompanySearchQuery, CompanyUpdateRequest, NewCompanyRequest};
use crate::http::{auth::AdminUser, error::ApiError, state::AppState};
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde_json::{Value, json};

type ApiResult = Result<(StatusCode, Json<Value>), ApiError>;

/// `POST /companies` (admin): returns `{company}` with 201.
pub async fn create(
    State(state): State<AppState>,
    _admin: AdminUser,
    payload: Result<Json<NewCompanyRequest>, JsonRejection>,
) -> ApiResult {
    let Json(request) = payload?;
    let company = state.companies.create(request).await?;
    Ok((StatusCode::CREATED, Json(json!({ "company": company }))))
}

/// `GET /companies`: filtered by `nameLike`, `minEmployees`, `maxEmployees`.
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<CompanySearchQuery>, QueryRejection>,
) -> ApiResult {
    let Query(query) = params?;
    let companies = state.companies.find_all(query).await?;
    Ok((StatusCode::OK, Json(json!({ "companies": companies }))))
}

/// `GET /companies/{handle}`: returns `{company}` with its jobs.
pub async fn get(State(state): State<AppState>, Path(handle): Path<String>) -> ApiResult {
    let company = state.companies.get(&handle).await?;
    Ok((StatusCode::OK, Json(json!({ "company": company }))))
}

/// `PATCH /companies/{handle}` (admin): returns `{company}`.
pub async fn update(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(handle): Path<String>,
    payload: Result<Json<CompanyUpdateRequest>, JsonRejection>,
) -> ApiResult {
    let Json(request) = payload?;
    let company = state.companies.update(&handle, request).await?;
    Ok((StatusCode::OK, Json(json!({ "company": company }))))
}

/// `DELETE /companies/{handle}` (admin): returns `{deleted: handle}`.
pub async fn remove(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(handle): Path<String>,
) -> ApiResult {
    state.companies.remove(&handle).await?;
    Ok((StatusCode::OK, Json(json!({ "deleted": handle }))))
}
