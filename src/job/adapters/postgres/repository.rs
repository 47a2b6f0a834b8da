//! `PostgreSQL` repository implementation for job storage.

use super::{
    models::{JobDetailRow, JobRow, JobSummaryRow, NewJobRow},
    queries,
};
use crate::company::domain::{Company, CompanyHandle, CompanyName, EmployeeCount};
use crate::db::{DbPool, schema::jobs, statement::bind_all};
use crate::job::{
    domain::{
        Equity, Job, JobDetail, JobFilter, JobId, JobSummary, JobTitle, JobUpdate, NewJob, Salary,
    },
    ports::{JobRepository, JobRepositoryError, JobRepositoryResult},
};
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use tracing::debug;

/// `PostgreSQL`-backed job repository.
#[derive(Debug, Clone)]
pub struct PostgresJobRepository {
    pool: DbPool,
}

impl PostgresJobRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> JobRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> JobRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(JobRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(JobRepositoryError::persistence)?
    }
}

#[async_trait]
impl JobRepository for PostgresJobRepository {
    async fn create(&self, job: &NewJob) -> JobRepositoryResult<Job> {
        let new_row = NewJobRow {
            title: job.title.as_str().to_owned(),
            salary: job.salary.map(Salary::value),
            equity: job.equity.as_ref().map(Equity::as_decimal).cloned(),
            company_handle: job.company_handle.as_str().to_owned(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(jobs::table)
                .values(&new_row)
                .returning(JobRow::as_returning())
                .get_result::<JobRow>(connection)
                .map_err(JobRepositoryError::persistence)?;
            row_to_job(row)
        })
        .await
    }

    async fn find_all(&self, filter: &JobFilter) -> JobRepositoryResult<Vec<JobSummary>> {
        let built = queries::find_all(filter);
        debug!(sql = %built.sql, params = built.values.len(), "listing jobs");

        self.run_blocking(move |connection| {
            let rows = bind_all(&built.sql, built.values)
                .load::<JobSummaryRow>(connection)
                .map_err(JobRepositoryError::persistence)?;
            rows.into_iter().map(row_to_summary).collect()
        })
        .await
    }

    async fn get(&self, id: JobId) -> JobRepositoryResult<JobDetail> {
        self.run_blocking(move |connection| {
            let row = diesel::sql_query(queries::DETAIL_SELECT)
                .bind::<diesel::sql_types::Integer, _>(id.value())
                .get_result::<JobDetailRow>(connection)
                .optional()
                .map_err(JobRepositoryError::persistence)?
                .ok_or(JobRepositoryError::NotFound(id))?;
            row_to_detail(row)
        })
        .await
    }

    async fn update(&self, id: JobId, changes: &JobUpdate) -> JobRepositoryResult<Job> {
        let built = queries::update(id, changes)?;
        debug!(sql = %built.sql, "updating job");

        self.run_blocking(move |connection| {
            let row = bind_all(&built.sql, built.values)
                .get_result::<JobRow>(connection)
                .optional()
                .map_err(JobRepositoryError::persistence)?
                .ok_or(JobRepositoryError::NotFound(id))?;
            row_to_job(row)
        })
        .await
    }

    async fn remove(&self, id: JobId) -> JobRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(jobs::table.find(id.value()))
                .execute(connection)
                .map_err(JobRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(JobRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn parse_equity(equity: Option<&BigDecimal>) -> JobRepositoryResult<Option<Equity>> {
    equity
        .map(Equity::from_decimal)
        .transpose()
        .map_err(JobRepositoryError::persistence)
}

fn row_to_job(row: JobRow) -> JobRepositoryResult<Job> {
    let JobRow {
        id,
        title,
        salary,
        equity,
        company_handle,
    } = row;

    Ok(Job {
        id: JobId::new(id),
        title: JobTitle::new(title).map_err(JobRepositoryError::persistence)?,
        salary: salary
            .map(Salary::new)
            .transpose()
            .map_err(JobRepositoryError::persistence)?,
        equity: parse_equity(equity.as_ref())?,
        company_handle: CompanyHandle::new(company_handle)
            .map_err(JobRepositoryError::persistence)?,
    })
}

fn row_to_summary(row: JobSummaryRow) -> JobRepositoryResult<JobSummary> {
    let company_name = row
        .company_name
        .map(CompanyName::new)
        .transpose()
        .map_err(JobRepositoryError::persistence)?;
    let job = row_to_job(JobRow {
        id: row.id,
        title: row.title,
        salary: row.salary,
        equity: row.equity,
        company_handle: row.company_handle,
    })?;

    Ok(JobSummary {
        id: job.id,
        title: job.title,
        salary: job.salary,
        equity: job.equity,
        company_handle: job.company_handle,
        company_name,
    })
}

fn row_to_detail(row: JobDetailRow) -> JobRepositoryResult<JobDetail> {
    let job = row_to_job(row.job)?;

    // `companies.name` is NOT NULL, so a null name means the join found no row.
    let company = match row.company_name {
        None => None,
        Some(name) => Some(Company {
            handle: job.company_handle.clone(),
            name: CompanyName::new(name).map_err(JobRepositoryError::persistence)?,
            description: row.company_description.unwrap_or_default(),
            num_employees: row
                .company_num_employees
                .map(EmployeeCount::new)
                .transpose()
                .map_err(JobRepositoryError::persistence)?,
            logo_url: row.company_logo_url,
        }),
    };
    Ok(job.into_detail(company))
}
