//! Shared test helpers for `PostgreSQL` integration tests.

pub use super::cluster::{BoxError, PostgresCluster, postgres_cluster};
use super::cluster::quote_identifier;
use jobboard::company::{
    adapters::postgres::PostgresCompanyRepository,
    domain::{Company, CompanyHandle, CompanyName, EmployeeCount},
    ports::CompanyRepository,
};
use jobboard::db::{self, DbPool};
use jobboard::job::{
    adapters::postgres::PostgresJobRepository,
    domain::{Equity, JobTitle, NewJob, Salary},
};
use rstest::fixture;
use tokio::runtime::Runtime;

/// Migrated throwaway database plus both repositories over it.
pub struct DbContext {
    pub cluster: PostgresCluster,
    pub db_name: String,
    pub pool: DbPool,
    pub jobs: PostgresJobRepository,
    pub companies: PostgresCompanyRepository,
    pub rt: Runtime,
}

impl Drop for DbContext {
    fn drop(&mut self) {
        let sql = format!(
            "DROP DATABASE IF EXISTS {} WITH (FORCE)",
            quote_identifier(&self.db_name)
        );
        drop(self.cluster.execute_admin_sql(&sql));
    }
}

fn prepare(cluster: PostgresCluster) -> Result<DbContext, BoxError> {
    let db_name = format!("jobboard_test_{}", uuid::Uuid::new_v4().simple());
    cluster.execute_admin_sql(&format!("CREATE DATABASE {}", quote_identifier(&db_name)))?;

    let pool = db::build_pool(&cluster.database_url(&db_name), 2)?;
    db::run_migrations(&pool)?;
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    Ok(DbContext {
        cluster,
        db_name,
        jobs: PostgresJobRepository::new(pool.clone()),
        companies: PostgresCompanyRepository::new(pool.clone()),
        pool,
        rt,
    })
}

/// Fresh migrated database, or `None` when no cluster is available.
#[fixture]
pub fn db_context(postgres_cluster: Option<PostgresCluster>) -> Option<DbContext> {
    let cluster = postgres_cluster?;
    Some(prepare(cluster).expect("test database setup"))
}

/// Company `c{n}` named `C{n}` with `n` employees.
pub fn company(n: i32) -> Company {
    Company {
        handle: CompanyHandle::new(format!("c{n}")).expect("valid handle"),
        name: CompanyName::new(format!("C{n}")).expect("valid name"),
        description: format!("Desc{n}"),
        num_employees: Some(EmployeeCount::new(n).expect("valid count")),
        logo_url: Some(format!("http://c{n}.img")),
    }
}

/// Job posting owned by `company_handle`.
pub fn new_job(title: &str, salary: Option<i32>, equity: Option<&str>, company_handle: &str) -> NewJob {
    NewJob {
        title: JobTitle::new(title).expect("valid title"),
        salary: salary.map(|amount| Salary::new(amount).expect("valid salary")),
        equity: equity.map(|raw| Equity::new(raw).expect("valid equity")),
        company_handle: CompanyHandle::new(company_handle).expect("valid handle"),
    }
}

/// Inserts companies `c1`, `c2` and `c3`.
pub fn seed_companies(context: &DbContext) {
    for n in 1..=3 {
        context
            .rt
            .block_on(context.companies.create(&company(n)))
            .expect("company insert");
    }
}
