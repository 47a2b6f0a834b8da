//! `PostgreSQL` repository implementation for company storage.

use super::{
    models::{CompanyJobRow, CompanyRow},
    queries,
};
use crate::company::{
    domain::{
        Company, CompanyDetail, CompanyFilter, CompanyHandle, CompanyJob, CompanyName,
        CompanyUpdate, EmployeeCount,
    },
    ports::{CompanyRepository, CompanyRepositoryError, CompanyRepositoryResult},
};
use crate::db::{
    DbPool,
    schema::{companies, jobs},
    statement::bind_all,
};
use crate::job::domain::{Equity, JobId, JobTitle, Salary};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
use tracing::debug;

/// `PostgreSQL`-backed company repository.
#[derive(Debug, Clone)]
pub struct PostgresCompanyRepository {
    pool: DbPool,
}

impl PostgresCompanyRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> CompanyRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> CompanyRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(CompanyRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(CompanyRepositoryError::persistence)?
    }
}

#[async_trait]
impl CompanyRepository for PostgresCompanyRepository {
    async fn create(&self, company: &Company) -> CompanyRepositoryResult<Company> {
        let handle = company.handle.clone();
        let new_row = to_row(company);

        self.run_blocking(move |connection| {
            // The primary key still enforces uniqueness if a concurrent insert
            // lands between this check and ours.
            let existing = companies::table
                .find(handle.as_str())
                .select(companies::handle)
                .first::<String>(connection)
                .optional()
                .map_err(CompanyRepositoryError::persistence)?;
            if existing.is_some() {
                return Err(CompanyRepositoryError::DuplicateCompany(handle));
            }

            let row = diesel::insert_into(companies::table)
                .values(&new_row)
                .returning(CompanyRow::as_returning())
                .get_result::<CompanyRow>(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_primary_key_violation(info.as_ref()) =>
                    {
                        CompanyRepositoryError::DuplicateCompany(handle.clone())
                    }
                    _ => CompanyRepositoryError::persistence(err),
                })?;
            row_to_company(row)
        })
        .await
    }

    async fn find_all(&self, filter: &CompanyFilter) -> CompanyRepositoryResult<Vec<Company>> {
        let built = queries::find_all(filter);
        debug!(sql = %built.sql, params = built.values.len(), "listing companies");

        self.run_blocking(move |connection| {
            let rows = bind_all(&built.sql, built.values)
                .load::<CompanyRow>(connection)
                .map_err(CompanyRepositoryError::persistence)?;
            rows.into_iter().map(row_to_company).collect()
        })
        .await
    }

    async fn get(&self, handle: &CompanyHandle) -> CompanyRepositoryResult<CompanyDetail> {
        let key = handle.clone();
        self.run_blocking(move |connection| {
            let row = companies::table
                .find(key.as_str())
                .select(CompanyRow::as_select())
                .first::<CompanyRow>(connection)
                .optional()
                .map_err(CompanyRepositoryError::persistence)?
                .ok_or_else(|| CompanyRepositoryError::NotFound(key.clone()))?;

            let job_rows = jobs::table
                .filter(jobs::company_handle.eq(key.as_str()))
                .order(jobs::id.asc())
                .select(CompanyJobRow::as_select())
                .load::<CompanyJobRow>(connection)
                .map_err(CompanyRepositoryError::persistence)?;

            Ok(CompanyDetail {
                company: row_to_company(row)?,
                jobs: job_rows
                    .into_iter()
                    .map(row_to_company_job)
                    .collect::<CompanyRepositoryResult<_>>()?,
            })
        })
        .await
    }

    async fn update(
        &self,
        handle: &CompanyHandle,
        changes: &CompanyUpdate,
    ) -> CompanyRepositoryResult<Company> {
        let built = queries::update(handle, changes)?;
        debug!(sql = %built.sql, "updating company");
        let key = handle.clone();

        self.run_blocking(move |connection| {
            let row = bind_all(&built.sql, built.values)
                .get_result::<CompanyRow>(connection)
                .optional()
                .map_err(CompanyRepositoryError::persistence)?
                .ok_or(CompanyRepositoryError::NotFound(key))?;
            row_to_company(row)
        })
        .await
    }

    async fn remove(&self, handle: &CompanyHandle) -> CompanyRepositoryResult<()> {
        let key = handle.clone();
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(companies::table.find(key.as_str()))
                .execute(connection)
                .map_err(CompanyRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(CompanyRepositoryError::NotFound(key));
            }
            Ok(())
        })
        .await
    }
}

fn is_primary_key_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == "companies_pkey")
}

fn to_row(company: &Company) -> CompanyRow {
    CompanyRow {
        handle: company.handle.as_str().to_owned(),
        name: company.name.as_str().to_owned(),
        num_employees: company.num_employees.map(EmployeeCount::value),
        description: company.description.clone(),
        logo_url: company.logo_url.clone(),
    }
}

fn row_to_company(row: CompanyRow) -> CompanyRepositoryResult<Company> {
    let CompanyRow {
        handle,
        name,
        num_employees,
        description,
        logo_url,
    } = row;

    Ok(Company {
        handle: CompanyHandle::new(handle).map_err(CompanyRepositoryError::persistence)?,
        name: CompanyName::new(name).map_err(CompanyRepositoryError::persistence)?,
        description,
        num_employees: num_employees
            .map(EmployeeCount::new)
            .transpose()
            .map_err(CompanyRepositoryError::persistence)?,
        logo_url,
    })
}

fn row_to_company_job(row: CompanyJobRow) -> CompanyRepositoryResult<CompanyJob> {
    Ok(CompanyJob {
        id: JobId::new(row.id),
        title: JobTitle::new(row.title).map_err(CompanyRepositoryError::persistence)?,
        salary: row
            .salary
            .map(Salary::new)
            .transpose()
            .map_err(CompanyRepositoryError::persistence)?,
        equity: row
            .equity
            .as_ref()
            .map(Equity::from_decimal)
            .transpose()
            .map_err(CompanyRepositoryError::persistence)?,
    })
}
