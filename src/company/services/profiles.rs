//! Service layer for company profiles.

use super::requests::{CompanySearchQuery, CompanyUpdateRequest, NewCompanyRequest};
use crate::company::{
    domain::{Company, CompanyDetail, CompanyHandle},
    ports::{CompanyRepository, CompanyRepositoryError},
};
use crate::validation::InvalidRequest;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Service-level errors for company operations.
#[derive(Debug, Error)]
pub enum CompanyServiceError {
    /// The request body or query failed validation.
    #[error(transparent)]
    Validation(#[from] InvalidRequest),
    /// The path handle cannot name any company.
    #[error("No company: {0}")]
    UnknownHandle(String),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] CompanyRepositoryError),
}

/// Result type for company service operations.
pub type CompanyServiceResult<T> = Result<T, CompanyServiceError>;

/// Validates company requests and delegates to a [`CompanyRepository`].
pub struct CompanyService<R>
where
    R: CompanyRepository + ?Sized,
{
    repository: Arc<R>,
}

impl<R> CompanyService<R>
where
    R: CompanyRepository + ?Sized,
{
    /// Creates a new company service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates `request` and stores the company.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyServiceError::Validation`] for an invalid request and
    /// [`CompanyServiceError::Repository`] for a duplicate handle.
    pub async fn create(&self, request: NewCompanyRequest) -> CompanyServiceResult<Company> {
        let company = request.into_company()?;
        let created = self.repository.create(&company).await?;
        info!(company = %created.handle, "company created");
        Ok(created)
    }

    /// Lists companies matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyServiceError::Validation`] for malformed or inverted
    /// bounds.
    pub async fn find_all(&self, query: CompanySearchQuery) -> CompanyServiceResult<Vec<Company>> {
        let filter = query.into_filter()?;
        Ok(self.repository.find_all(&filter).await?)
    }

    /// Fetches one company with its jobs.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyServiceError::UnknownHandle`] or
    /// [`CompanyServiceError::Repository`] when the handle is unknown.
    pub async fn get(&self, handle: &str) -> CompanyServiceResult<CompanyDetail> {
        let key = lookup_handle(handle)?;
        Ok(self.repository.get(&key).await?)
    }

    /// Validates `request` and applies it to the company.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyServiceError::Validation`] for an empty or invalid
    /// request and [`CompanyServiceError::Repository`] when the handle is
    /// unknown.
    pub async fn update(
        &self,
        handle: &str,
        request: CompanyUpdateRequest,
    ) -> CompanyServiceResult<Company> {
        let key = lookup_handle(handle)?;
        let changes = request.into_update()?;
        let company = self.repository.update(&key, &changes).await?;
        info!(company = %key, "company updated");
        Ok(company)
    }

    /// Deletes the company and its jobs.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyServiceError::Repository`] when the handle is unknown.
    pub async fn remove(&self, handle: &str) -> CompanyServiceResult<()> {
        let key = lookup_handle(handle)?;
        self.repository.remove(&key).await?;
        info!(company = %key, "company removed");
        Ok(())
    }
}

fn lookup_handle(raw: &str) -> CompanyServiceResult<CompanyHandle> {
    CompanyHandle::new(raw).map_err(|_| CompanyServiceError::UnknownHandle(raw.to_owned()))
}
