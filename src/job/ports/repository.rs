//! Repository port for job creation, listing, lookup, update and removal.

use crate::job::domain::{Job, JobDetail, JobFilter, JobId, JobSummary, JobUpdate, NewJob};
use crate::query::QueryBuildError;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for job repository operations.
pub type JobRepositoryResult<T> = Result<T, JobRepositoryError>;

/// Job persistence contract.
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Inserts a job and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`JobRepositoryError::Persistence`] when the owning company
    /// does not exist or the store rejects the row.
    async fn create(&self, job: &NewJob) -> JobRepositoryResult<Job>;

    /// Lists jobs matching `filter`, ordered by title.
    ///
    /// Each row carries the owning company's name.
    async fn find_all(&self, filter: &JobFilter) -> JobRepositoryResult<Vec<JobSummary>>;

    /// Returns one job with its company nested.
    ///
    /// # Errors
    ///
    /// Returns [`JobRepositoryError::NotFound`] when no job has `id`.
    async fn get(&self, id: JobId) -> JobRepositoryResult<JobDetail>;

    /// Applies `changes` to the job and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`JobRepositoryError::InvalidInput`] when `changes` is empty
    /// and [`JobRepositoryError::NotFound`] when no job has `id`.
    async fn update(&self, id: JobId, changes: &JobUpdate) -> JobRepositoryResult<Job>;

    /// Deletes the job.
    ///
    /// # Errors
    ///
    /// Returns [`JobRepositoryError::NotFound`] when no job has `id`.
    async fn remove(&self, id: JobId) -> JobRepositoryResult<()>;
}

/// Errors returned by job repository implementations.
#[derive(Debug, Clone, Error)]
pub enum JobRepositoryError {
    /// The job was not found.
    #[error("No job: {0}")]
    NotFound(JobId),

    /// The request could not be turned into a statement.
    #[error(transparent)]
    InvalidInput(#[from] QueryBuildError),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl JobRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
