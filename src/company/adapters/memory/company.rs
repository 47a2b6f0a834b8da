//! In-memory repository for company tests.

use async_trait::async_trait;

use crate::company::{
    domain::{Company, CompanyDetail, CompanyFilter, CompanyHandle, CompanyJob, CompanyUpdate},
    ports::{CompanyRepository, CompanyRepositoryError, CompanyRepositoryResult},
};
use crate::db::memory::InMemoryDatabase;
use crate::query::QueryBuildError;

/// Thread-safe in-memory company repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCompanyRepository {
    db: InMemoryDatabase,
}

impl InMemoryCompanyRepository {
    /// Creates a repository over `db`.
    #[must_use]
    pub const fn new(db: InMemoryDatabase) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn create(&self, company: &Company) -> CompanyRepositoryResult<Company> {
        let mut tables = self.db.write().map_err(CompanyRepositoryError::persistence)?;
        if tables.companies.contains_key(&company.handle) {
            return Err(CompanyRepositoryError::DuplicateCompany(
                company.handle.clone(),
            ));
        }
        tables
            .require_unique_name(&company.name, None)
            .map_err(CompanyRepositoryError::persistence)?;

        tables
            .companies
            .insert(company.handle.clone(), company.clone());
        Ok(company.clone())
    }

    async fn find_all(&self, filter: &CompanyFilter) -> CompanyRepositoryResult<Vec<Company>> {
        let tables = self.db.read().map_err(CompanyRepositoryError::persistence)?;
        let mut companies: Vec<Company> = tables
            .companies
            .values()
            .filter(|company| filter.matches(company))
            .cloned()
            .collect();
        companies.sort_by(|a, b| a.name.cmp(&b.name).then(a.handle.cmp(&b.handle)));
        Ok(companies)
    }

    async fn get(&self, handle: &CompanyHandle) -> CompanyRepositoryResult<CompanyDetail> {
        let tables = self.db.read().map_err(CompanyRepositoryError::persistence)?;
        let company = tables
            .companies
            .get(handle)
            .ok_or_else(|| CompanyRepositoryError::NotFound(handle.clone()))?
            .clone();

        // `jobs` is keyed by id, so iteration order is already id order.
        let jobs = tables
            .jobs
            .values()
            .filter(|job| job.company_handle == *handle)
            .map(|job| CompanyJob {
                id: job.id,
                title: job.title.clone(),
                salary: job.salary,
                equity: job.equity.clone(),
            })
            .collect();
        Ok(CompanyDetail { company, jobs })
    }

    async fn update(
        &self,
        handle: &CompanyHandle,
        changes: &CompanyUpdate,
    ) -> CompanyRepositoryResult<Company> {
        if changes.is_empty() {
            return Err(QueryBuildError::NoData.into());
        }

        let mut tables = self.db.write().map_err(CompanyRepositoryError::persistence)?;
        if let Some(name) = &changes.name {
            tables
                .require_unique_name(name, Some(handle))
                .map_err(CompanyRepositoryError::persistence)?;
        }
        let company = tables
            .companies
            .get_mut(handle)
            .ok_or_else(|| CompanyRepositoryError::NotFound(handle.clone()))?;
        changes.apply_to(company);
        Ok(company.clone())
    }

    async fn remove(&self, handle: &CompanyHandle) -> CompanyRepositoryResult<()> {
        let mut tables = self.db.write().map_err(CompanyRepositoryError::persistence)?;
        if tables.remove_company_cascade(handle) {
            Ok(())
        } else {
            Err(CompanyRepositoryError::NotFound(handle.clone()))
        }
    }
}
