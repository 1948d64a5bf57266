//! Database configuration parsed from environment variables.

use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Port the HTTP listener binds to.
pub const LISTEN_PORT: u16 = 8000;

/// Relative path of the schema script executed at startup.
pub const MIGRATION_PATH: &str = "./migration.sql";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingVar(&'static str),
    #[error("DATABASE_PORT is not a valid port: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub user: String,
    pub password: String,
    pub database: String,
    pub host: String,
    pub port: u16,
}

impl DbConfig {
    /// Build typed database config from environment variables.
    ///
    /// Required: `DATABASE_USER`, `DATABASE_PASSWORD`, `DATABASE_NAME`,
    /// `DATABASE_HOST`, `DATABASE_PORT`.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is missing or the port does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port_raw = require_var("DATABASE_PORT")?;
        let port = port_raw
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port_raw))?;

        Ok(Self {
            user: require_var("DATABASE_USER")?,
            password: require_var("DATABASE_PASSWORD")?,
            database: require_var("DATABASE_NAME")?,
            host: require_var("DATABASE_HOST")?,
            port,
        })
    }

    /// Connection options for the pool. Transport encryption is disabled on
    /// the database link.
    #[must_use]
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
            .ssl_mode(PgSslMode::Disable)
    }
}

fn require_var(key: &'static str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingVar(key))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
