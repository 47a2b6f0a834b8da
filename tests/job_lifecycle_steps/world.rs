//! Shared world state for job lifecycle BDD scenarios.

use std::sync::Arc;

use jobboard::company::{adapters::memory::InMemoryCompanyRepository, services::CompanyService};
use jobboard::db::memory::InMemoryDatabase;
use jobboard::job::{
    adapters::memory::InMemoryJobRepository,
    domain::{Job, JobSummary},
    services::{JobService, JobServiceError},
};
use eyre::WrapErr;
use rstest::fixture;
use serde::de::DeserializeOwned;

/// Scenario world: both services over one set of in-memory tables.
pub struct JobWorld {
    pub jobs: JobService<InMemoryJobRepository>,
    pub companies: CompanyService<InMemoryCompanyRepository>,
    pub last_job: Option<Job>,
    pub last_create_result: Option<Result<Job, JobServiceError>>,
    pub last_update_result: Option<Result<Job, String>>,
    pub last_listing: Option<Vec<JobSummary>>,
}

impl JobWorld {
    /// Creates a world with empty tables.
    #[must_use]
    pub fn new() -> Self {
        let db = InMemoryDatabase::new();
        Self {
            jobs: JobService::new(Arc::new(InMemoryJobRepository::new(db.clone()))),
            companies: CompanyService::new(Arc::new(InMemoryCompanyRepository::new(db))),
            last_job: None,
            last_create_result: None,
            last_update_result: None,
            last_listing: None,
        }
    }

    /// The job most recently posted in the scenario.
    pub fn require_job(&self) -> Result<&Job, eyre::Report> {
        self.last_job
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no job has been posted in this scenario"))
    }
}

impl Default for JobWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> JobWorld {
    JobWorld::default()
}

/// Deserializes a request body the way the HTTP layer does.
pub fn request<T: DeserializeOwned>(body: serde_json::Value) -> Result<T, eyre::Report> {
    serde_json::from_value(body).wrap_err("request does not match its shape")
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
