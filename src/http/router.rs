//! Route table.

use super::handlers::{self, companies, health, jobs};
use super::middleware::log_requests;
use super::state::AppState;
use axum::Router;
use axum::middleware::from_fn;
use axum::routing::get;

/// Builds the application router over `state`.
#[must_use]
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/jobs", get(jobs::list).post(jobs::create))
        .route(
            "/jobs/{id}",
            get(jobs::get).patch(jobs::update).delete(jobs::remove),
        )
        .route("/companies", get(companies::list).post(companies::create))
        .route(
            "/companies/{handle}",
            get(companies::get)
                .patch(companies::update)
                .delete(companies::remove),
        )
        .route("/healthz", get(health::healthz))
        .route("/livez", get(health::livez))
        .fallback(handlers::not_found)
        .layer(from_fn(log_requests))
        .with_state(state)
}
