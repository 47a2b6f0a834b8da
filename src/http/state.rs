//! Shared application state handed to every handler.

use super::auth::TokenKeys;
use crate::company::{
    adapters::{memory::InMemoryCompanyRepository, postgres::PostgresCompanyRepository},
    ports::CompanyRepository,
    services::CompanyService,
};
use crate::db::{DbPool, memory::InMemoryDatabase};
use crate::job::{
    adapters::{memory::InMemoryJobRepository, postgres::PostgresJobRepository},
    ports::JobRepository,
    services::JobService,
};
use std::sync::Arc;

/// Services, token keys and the optional pool used by the health check.
#[derive(Clone)]
pub struct AppState {
    /// Job operations.
    pub jobs: Arc<JobService<dyn JobRepository>>,
    /// Company operations.
    pub companies: Arc<CompanyService<dyn CompanyRepository>>,
    /// Token verification keys.
    pub keys: Arc<TokenKeys>,
    /// Database pool, absent when running on in-memory storage.
    pub pool: Option<DbPool>,
}

impl AppState {
    /// Wires the `PostgreSQL` repositories over `pool`.
    #[must_use]
    pub fn with_postgres(pool: DbPool, secret: &str) -> Self {
        let jobs: Arc<dyn JobRepository> = Arc::new(PostgresJobRepository::new(pool.clone()));
        let companies: Arc<dyn CompanyRepository> =
            Arc::new(PostgresCompanyRepository::new(pool.clone()));
        Self::from_parts(jobs, companies, secret, Some(pool))
    }

    /// Wires the in-memory repositories over one shared set of tables.
    #[must_use]
    pub fn in_memory(secret: &str) -> Self {
        let db = InMemoryDatabase::new();
        let jobs: Arc<dyn JobRepository> = Arc::new(InMemoryJobRepository::new(db.clone()));
        let companies: Arc<dyn CompanyRepository> =
            Arc::new(InMemoryCompanyRepository::new(db));
        Self::from_parts(jobs, companies, secret, None)
    }

    /// Wires arbitrary repositories.
    #[must_use]
    pub fn from_parts(
        jobs: Arc<dyn JobRepository>,
        companies: Arc<dyn CompanyRepository>,
        secret: &str,
        pool: Option<DbPool>,
    ) -> Self {
        Self {
            jobs: Arc::new(JobService::new(jobs)),
            companies: Arc::new(CompanyService::new(companies)),
            keys: Arc::new(TokenKeys::new(secret)),
            pool,
        }
    }
}
