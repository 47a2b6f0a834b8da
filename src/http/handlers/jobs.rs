//! `/jobs` handlers.

use crate::http::{auth::AdminUser, error::ApiError, state::AppState};
use crate::job::domain::JobId;
use crate::job::services::{JobSearchQuery, JobUpdateRequest, NewJobRequest};
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde_json::{Value, json};

type ApiResult = Result<(StatusCode, Json<Value>), ApiError>;

/// `POST /jobs` (admin): creates a job and returns `{job}` with 201.
pub async fn create(
    State(state): State<AppState>,
    _admin: AdminUser,
    payload: Result<Json<NewJobRequest>, JsonRejection>,
) -> ApiResult {
    let Json(request) = payload?;
    let job = state.jobs.create(request).await?;
    Ok((StatusCode::CREATED, Json(json!({ "job": job }))))
}

/// `GET /jobs`: lists jobs filtered by `title`, `minSalary`, `hasEquity`.
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<JobSearchQuery>, QueryRejection>,
) -> ApiResult {
    let Query(query) = params?;
    let jobs = state.jobs.find_all(query).await?;
    Ok((StatusCode::OK, Json(json!({ "jobs": jobs }))))
}

/// `GET /jobs/{id}`: returns `{job}` with the company nested.
pub async fn get(State(state): State<AppState>, Path(raw_id): Path<String>) -> ApiResult {
    let id = parse_id(&raw_id)?;
    let job = state.jobs.get(id).await?;
    Ok((StatusCode::OK, Json(json!({ "job": job }))))
}

/// `PATCH /jobs/{id}` (admin): applies a partial update and returns `{job}`.
pub async fn update(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(raw_id): Path<String>,
    payload: Result<Json<JobUpdateRequest>, JsonRejection>,
) -> ApiResult {
    let id = parse_id(&raw_id)?;
    let Json(request) = payload?;
    let job = state.jobs.update(id, request).await?;
    Ok((StatusCode::OK, Json(json!({ "job": job }))))
}

/// `DELETE /jobs/{id}` (admin): returns `{deleted: id}`.
pub async fn remove(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(raw_id): Path<String>,
) -> ApiResult {
    let id = parse_id(&raw_id)?;
    state.jobs.remove(id).await?;
    Ok((StatusCode::OK, Json(json!({ "deleted": id.value() }))))
}

fn parse_id(raw: &str) -> Result<JobId, ApiError> {
    raw.parse::<JobId>()
        .map_err(|err| ApiError::bad_request(err.to_string()))
}
