//! Layered runtime settings.
//!
//! Sources, later overriding earlier: built-in defaults, an optional TOML file
//! (`jobboard.toml` unless a path is given), then `JOBBOARD_*` environment
//! variables such as `JOBBOARD_SECRET_KEY` or `JOBBOARD_PORT`.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// File read when no explicit path is given; missing is fine.
pub const DEFAULT_CONFIG_FILE: &str = "jobboard.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "JOBBOARD";

/// Validated service settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// `PostgreSQL` connection string.
    pub database_url: String,
    /// Interface to bind.
    pub listen_host: String,
    /// TCP port to bind.
    pub port: u16,
    /// HS256 secret for access tokens.
    pub secret_key: String,
    /// Upper bound on pooled connections.
    pub database_pool_max_connections: u32,
    /// Default `tracing` filter; `RUST_LOG` takes precedence.
    pub log_filter: String,
}

impl Settings {
    /// Loads settings from defaults, the config file and the environment.
    ///
    /// An explicit `path` must exist; the default file is optional.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a source cannot be read, a value has
    /// the wrong type, or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let environment = Environment::with_prefix(ENV_PREFIX).try_parsing(true);
        Self::from_config(layered(path, environment)?)
    }

    /// Deserializes and validates an already-built [`Config`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for missing or invalid values.
    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        let settings: Self = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// `host:port` string for the listener.
    #[must_use]
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.listen_host, self.port)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.secret_key.trim().is_empty() {
            return Err(ConfigError::Message("secret_key must not be empty".to_owned()));
        }
        if self.database_pool_max_connections == 0 {
            return Err(ConfigError::Message(
                "database_pool_max_connections must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

fn layered(path: Option<&Path>, environment: Environment) -> Result<Config, ConfigError> {
    let file = path.map_or_else(
        || File::with_name(DEFAULT_CONFIG_FILE).required(false),
        |explicit| File::from(explicit).required(true),
    );
    Config::builder()
        .set_default("database_url", "postgresql:///jobly")?
        .set_default("listen_host", "127.0.0.1")?
        .set_default("port", 3001)?
        .set_default("secret_key", "")?
        .set_default("database_pool_max_connections", 10)?
        .set_default("log_filter", "info")?
        .add_source(file)
        .add_source(environment)
        .build()
}
