//! In-memory repository for job tests.

use async_trait::async_trait;

use crate::db::memory::InMemoryDatabase;
use crate::job::{
    domain::{Job, JobDetail, JobFilter, JobId, JobSummary, JobUpdate, NewJob},
    ports::{JobRepository, JobRepositoryError, JobRepositoryResult},
};
use crate::query::QueryBuildError;

/// Thread-safe in-memory job repository.
///
/// Shares its tables with the company repository built from the same
/// [`InMemoryDatabase`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryJobRepository {
    db: InMemoryDatabase,
}

impl InMemoryJobRepository {
    /// Creates a repository over `db`.
    #[must_use]
    pub const fn new(db: InMemoryDatabase) -> Self {
        Self { db }
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn create(&self, job: &NewJob) -> JobRepositoryResult<Job> {
        let mut tables = self.db.write().map_err(JobRepositoryError::persistence)?;
        tables
            .require_company(&job.company_handle)
            .map_err(JobRepositoryError::persistence)?;

        let id = tables.next_job_id();
        let created = job.clone().into_job(id);
        tables.jobs.insert(id, created.clone());
        Ok(created)
    }

    async fn find_all(&self, filter: &JobFilter) -> JobRepositoryResult<Vec<JobSummary>> {
        let tables = self.db.read().map_err(JobRepositoryError::persistence)?;
        let mut summaries: Vec<JobSummary> = tables
            .jobs
            .values()
            .filter(|job| filter.matches(job))
            .map(|job| JobSummary {
                id: job.id,
                title: job.title.clone(),
                salary: job.salary,
                equity: job.equity.clone(),
                company_handle: job.company_handle.clone(),
                company_name: tables
                    .companies
                    .get(&job.company_handle)
                    .map(|company| company.name.clone()),
            })
            .collect();

        summaries.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
        Ok(summaries)
    }

    async fn get(&self, id: JobId) -> JobRepositoryResult<JobDetail> {
        let tables = self.db.read().map_err(JobRepositoryError::persistence)?;
        let job = tables
            .jobs
            .get(&id)
            .ok_or(JobRepositoryError::NotFound(id))?
            .clone();
        let company = tables.companies.get(&job.company_handle).cloned();
        Ok(job.into_detail(company))
    }

    async fn update(&self, id: JobId, changes: &JobUpdate) -> JobRepositoryResult<Job> {
        if changes.is_empty() {
            return Err(QueryBuildError::NoData.into());
        }

        let mut tables = self.db.write().map_err(JobRepositoryError::persistence)?;
        let job = tables
            .jobs
            .get_mut(&id)
            .ok_or(JobRepositoryError::NotFound(id))?;
        changes.apply_to(job);
        Ok(job.clone())
    }

    async fn remove(&self, id: JobId) -> JobRepositoryResult<()> {
        let mut tables = self.db.write().map_err(JobRepositoryError::persistence)?;
        tables
            .jobs
            .remove(&id)
            .map(|_| ())
            .ok_or(JobRepositoryError::NotFound(id))
    }
}
