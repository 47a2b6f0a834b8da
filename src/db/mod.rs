//! Database plumbing shared by the job and company adapters.
//!
//! - [`schema`]: Diesel table definitions for `companies` and `jobs`
//! - [`memory`]: shared in-memory tables backing the test adapters
//! - [`statement`]: binding builder output onto raw statements
//! - [`build_pool`] and [`run_migrations`]: `PostgreSQL` connection setup

pub mod memory;
pub mod schema;
pub mod statement;

use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use thiserror::Error;

/// `PostgreSQL` connection pool shared by every `PostgreSQL` adapter.
pub type DbPool = Pool<ConnectionManager<PgConnection>>;

/// Schema migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while preparing the database.
#[derive(Debug, Error)]
pub enum DbError {
    /// The pool could not be created or could not hand out a connection.
    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),

    /// A query failed.
    #[error("database error: {0}")]
    Query(#[from] diesel::result::Error),

    /// Applying migrations failed.
    #[error("migration error: {0}")]
    Migration(String),

    /// The blocking worker thread panicked or was cancelled.
    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Builds a connection pool for `database_url`.
///
/// # Errors
///
/// Returns [`DbError::Pool`] when the pool cannot open its first connection.
pub fn build_pool(database_url: &str, max_connections: u32) -> Result<DbPool, DbError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = Pool::builder().max_size(max_connections).build(manager)?;
    Ok(pool)
}

/// Applies every pending migration and returns the applied versions.
///
/// # Errors
///
/// Returns [`DbError::Pool`] when no connection is available or
/// [`DbError::Migration`] when a migration fails.
pub fn run_migrations(pool: &DbPool) -> Result<Vec<String>, DbError> {
    let mut connection = pool.get()?;
    let applied = connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| DbError::Migration(err.to_string()))?;
    Ok(applied.iter().map(ToString::to_string).collect())
}

/// Runs `SELECT 1` on a pooled connection.
///
/// # Errors
///
/// Returns a [`DbError`] when the database cannot be reached.
pub async fn ping(pool: &DbPool) -> Result<(), DbError> {
    let shared = pool.clone();
    tokio::task::spawn_blocking(move || -> Result<(), DbError> {
        let mut connection = shared.get()?;
        diesel::sql_query("SELECT 1").execute(&mut connection)?;
        Ok(())
    })
    .await?
}
