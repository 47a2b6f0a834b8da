//! Service layer for job postings.

use super::requests::{JobSearchQuery, JobUpdateRequest, NewJobRequest};
use crate::job::{
    domain::{Job, JobDetail, JobId, JobSummary},
    ports::{JobRepository, JobRepositoryError},
};
use crate::validation::InvalidRequest;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Service-level errors for job operations.
#[derive(Debug, Error)]
pub enum JobServiceError {
    /// The request body or query failed validation.
    #[error(transparent)]
    Validation(#[from] InvalidRequest),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] JobRepositoryError),
}

/// Result type for job service operations.
pub type JobServiceResult<T> = Result<T, JobServiceError>;

/// Validates job requests and delegates to a [`JobRepository`].
pub struct JobService<R>
where
    R: JobRepository + ?Sized,
{
    repository: Arc<R>,
}

impl<R> JobService<R>
where
    R: JobRepository + ?Sized,
{
    /// Creates a new job service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates `request` and stores the job.
    ///
    /// # Errors
    ///
    /// Returns [`JobServiceError::Validation`] for an invalid request or
    /// [`JobServiceError::Repository`] when the store rejects the row.
    pub async fn create(&self, request: NewJobRequest) -> JobServiceResult<Job> {
        let new_job = request.into_new_job()?;
        let job = self.repository.create(&new_job).await?;
        info!(job_id = %job.id, company = %job.company_handle, "job created");
        Ok(job)
    }

    /// Lists jobs matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`JobServiceError::Validation`] for out-of-range parameters.
    pub async fn find_all(&self, query: JobSearchQuery) -> JobServiceResult<Vec<JobSummary>> {
        let filter = query.into_filter()?;
        Ok(self.repository.find_all(&filter).await?)
    }

    /// Fetches one job with its company.
    ///
    /// # Errors
    ///
    /// Returns [`JobRepositoryError::NotFound`] wrapped in
    /// [`JobServiceError::Repository`] when the job does not exist.
    pub async fn get(&self, id: JobId) -> JobServiceResult<JobDetail> {
        Ok(self.repository.get(id).await?)
    }

    /// Validates `request` and applies it to the job.
    ///
    /// # Errors
    ///
    /// Returns [`JobServiceError::Validation`] for an empty or invalid
    /// request and [`JobServiceError::Repository`] when the job does not
    /// exist.
    pub async fn update(&self, id: JobId, request: JobUpdateRequest) -> JobServiceResult<Job> {
        let changes = request.into_update()?;
        let job = self.repository.update(id, &changes).await?;
        info!(job_id = %id, "job updated");
        Ok(job)
    }

    /// Deletes the job.
    ///
    /// # Errors
    ///
    /// Returns [`JobServiceError::Repository`] when the job does not exist.
    pub async fn remove(&self, id: JobId) -> JobServiceResult<()> {
        self.repository.remove(id).await?;
        info!(job_id = %id, "job removed");
        Ok(())
    }
}
