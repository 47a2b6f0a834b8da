//! Liveness and readiness checks.

use crate::http::{error::ApiError, state::AppState};
use axum::extract::State;
use axum::http::StatusCode;
use tracing::debug;

/// Answers as long as the process serves requests.
#[expect(clippy::unused_async, reason = "axum handlers must be async")]
pub async fn livez() -> StatusCode {
    debug!("service is live");
    StatusCode::OK
}

/// Checks the database when one is configured.
///
/// # Errors
///
/// Returns [`ApiError::Internal`] when the database cannot be reached.
pub async fn healthz(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    if let Some(pool) = &state.pool {
        crate::db::ping(pool)
            .await
            .map_err(|err| ApiError::internal(&err))?;
    }
    debug!("service is healthy");
    Ok(StatusCode::OK)
}
