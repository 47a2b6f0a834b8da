//! Repository port for company profiles.

use crate::company::domain::{Company, CompanyDetail, CompanyFilter, CompanyHandle, CompanyUpdate};
use crate::query::QueryBuildError;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for company repository operations.
pub type CompanyRepositoryResult<T> = Result<T, CompanyRepositoryError>;

/// Company persistence contract.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Inserts a company.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyRepositoryError::DuplicateCompany`] when the handle is
    /// already taken.
    async fn create(&self, company: &Company) -> CompanyRepositoryResult<Company>;

    /// Lists companies matching `filter`, ordered by name.
    async fn find_all(&self, filter: &CompanyFilter) -> CompanyRepositoryResult<Vec<Company>>;

    /// Returns one company with its jobs.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyRepositoryError::NotFound`] when the handle is unknown.
    async fn get(&self, handle: &CompanyHandle) -> CompanyRepositoryResult<CompanyDetail>;

    /// Applies `changes` and returns the updated company.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyRepositoryError::InvalidInput`] when `changes` is
    /// empty and [`CompanyRepositoryError::NotFound`] when the handle is
    /// unknown.
    async fn update(
        &self,
        handle: &CompanyHandle,
        changes: &CompanyUpdate,
    ) -> CompanyRepositoryResult<Company>;

    /// Deletes the company and, with it, its jobs.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyRepositoryError::NotFound`] when the handle is unknown.
    async fn remove(&self, handle: &CompanyHandle) -> CompanyRepositoryResult<()>;
}

/// Errors returned by company repository implementations.
#[derive(Debug, Clone, Error)]
pub enum CompanyRepositoryError {
    /// A company with the same handle already exists.
    #[error("Duplicate company: {0}")]
    DuplicateCompany(CompanyHandle),

    /// The company was not found.
    #[error("No company: {0}")]
    NotFound(CompanyHandle),

    /// The request could not be turned into a statement.
    #[error(transparent)]
    InvalidInput(#[from] QueryBuildError),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CompanyRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
