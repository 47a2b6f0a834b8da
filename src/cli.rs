//! Command-line entry point.

use crate::config::Settings;
use crate::db::{self, DbError, DbPool};
use crate::http::{self, AppState, auth::create_token};
use crate::telemetry;
use clap::{Parser, Subcommand};
use config::ConfigError;
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::util::TryInitError;

/// Job board REST service.
#[derive(Debug, Parser)]
#[command(name = "jobboard", version, about)]
pub struct Cli {
    /// Settings file; defaults to `jobboard.toml` when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands; `serve` runs when none is given.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Serve the REST API.
    Serve {
        /// Keep data in process memory instead of `PostgreSQL`.
        #[arg(long)]
        in_memory: bool,
    },
    /// Apply pending database migrations and exit.
    Migrate,
    /// Print a signed access token.
    Token {
        /// Account name placed in the token.
        #[arg(long)]
        username: String,
        /// Grant admin rights.
        #[arg(long)]
        admin: bool,
    },
}

/// Failures that end the process.
#[derive(Debug, Error)]
pub enum CliError {
    /// Settings could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    /// The log subscriber could not be installed.
    #[error("logging setup failed: {0}")]
    Telemetry(#[from] TryInitError),
    /// Database setup failed.
    #[error(transparent)]
    Db(#[from] DbError),
    /// Binding, serving or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    /// Token signing failed.
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

/// Parses arguments and runs the chosen command.
///
/// # Errors
///
/// Returns a [`CliError`] describing the first failure.
pub async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;
    telemetry::init(&settings.log_filter)?;

    match cli.command.unwrap_or(Command::Serve { in_memory: false }) {
        Command::Serve { in_memory } => serve(&settings, in_memory).await,
        Command::Migrate => migrate(&settings).await,
        Command::Token { username, admin } => {
            let token = create_token(&settings.secret_key, &username, admin)?;
            writeln!(io::stdout().lock(), "{token}")?;
            Ok(())
        }
    }
}

async fn serve(settings: &Settings, in_memory: bool) -> Result<(), CliError> {
    let state = if in_memory {
        warn!("serving from in-memory storage; data is lost on exit");
        AppState::in_memory(&settings.secret_key)
    } else {
        let pool = connect(settings).await?;
        AppState::with_postgres(pool, &settings.secret_key)
    };
    http::serve(&settings.listen_address(), state).await?;
    Ok(())
}

async fn migrate(settings: &Settings) -> Result<(), CliError> {
    let pool = connect(settings).await?;
    let applied = tokio::task::spawn_blocking(move || db::run_migrations(&pool))
        .await
        .map_err(DbError::from)??;
    if applied.is_empty() {
        info!("database schema is up to date");
    }
    for version in applied {
        info!(%version, "applied migration");
    }
    Ok(())
}

async fn connect(settings: &Settings) -> Result<DbPool, CliError> {
    let url = settings.database_url.clone();
    let max_connections = settings.database_pool_max_connections;
    let pool = tokio::task::spawn_blocking(move || db::build_pool(&url, max_connections))
        .await
        .map_err(DbError::from)??;
    Ok(pool)
}
