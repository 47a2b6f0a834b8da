//! Route handlers.

pub mod companies;
pub mod health;
pub mod jobs;

use super::error::ApiError;

/// Fallback for unknown routes.
#[expect(clippy::unused_async, reason = "axum handlers must be async")]
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not Found".to_owned())
}
