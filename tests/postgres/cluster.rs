//! Cluster lifecycle helpers for `PostgreSQL` integration tests.
//!
//! One embedded cluster is started per test binary. When the cluster cannot
//! start (no network to fetch binaries, or running as root without a worker),
//! the fixture yields `None` and database tests skip themselves.

use diesel::prelude::*;
use pg_embedded_setup_unpriv::{ExecutionPrivileges, bootstrap_for_tests, detect_execution_privileges};
use postgresql_embedded::{PostgreSQL, Settings, Status};
use rstest::fixture;
use std::sync::OnceLock;
use tokio::runtime::Runtime;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

static SHARED_CLUSTER: OnceLock<Result<ManagedCluster, String>> = OnceLock::new();

/// Shared `PostgreSQL` cluster handle for integration tests.
pub type PostgresCluster = &'static ManagedCluster;

/// Managed embedded `PostgreSQL` cluster for test lifecycles.
pub struct ManagedCluster {
    settings: Settings,
    _runtime: Runtime,
    _postgres: PostgreSQL,
}

impl ManagedCluster {
    fn new() -> Result<Self, BoxError> {
        if matches!(detect_execution_privileges(), ExecutionPrivileges::Root) {
            return Err("embedded PostgreSQL does not run as root".into());
        }
        let bootstrap = bootstrap_for_tests().map_err(|err| Box::new(err) as BoxError)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let mut postgres = PostgreSQL::new(bootstrap.settings);
        runtime.block_on(async {
            postgres.setup().await?;
            if !matches!(postgres.status(), Status::Started) {
                postgres.start().await?;
            }
            Ok::<(), postgresql_embedded::Error>(())
        })?;

        Ok(Self {
            settings: postgres.settings().clone(),
            _runtime: runtime,
            _postgres: postgres,
        })
    }

    /// Connection URL for `database` on this cluster.
    #[must_use]
    pub fn database_url(&self, database: &str) -> String {
        self.settings.url(database)
    }

    /// Runs one administrative statement against the `postgres` database.
    pub fn execute_admin_sql(&self, sql: &str) -> Result<(), BoxError> {
        let mut conn = PgConnection::establish(&self.database_url("postgres"))?;
        diesel::sql_query(sql).execute(&mut conn)?;
        Ok(())
    }
}

/// Provides the shared cluster, or `None` when it could not be started.
#[fixture]
pub fn postgres_cluster() -> Option<PostgresCluster> {
    let started = SHARED_CLUSTER.get_or_init(|| {
        // Started off the test's thread so the cluster's runtime never nests
        // inside a caller's runtime.
        std::thread::spawn(|| ManagedCluster::new().map_err(|err| err.to_string()))
            .join()
            .unwrap_or_else(|_| Err("cluster start-up panicked".to_owned()))
    });
    match started {
        Ok(cluster) => Some(cluster),
        Err(reason) => {
            report_skip(reason);
            None
        }
    }
}

#[expect(
    clippy::print_stderr,
    reason = "skipped database tests must be visible in test output"
)]
fn report_skip(reason: &str) {
    eprintln!("SKIP-TEST-CLUSTER: {reason}");
}

/// Quotes an SQL identifier.
#[must_use]
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
