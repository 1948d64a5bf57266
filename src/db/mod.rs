//! Database initialization and migration runner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Startup uses this module to create the shared SQLx pool and apply the
//! schema script before accepting API traffic. The pool is capped at a fixed
//! maximum and shared across all request handlers for the process lifetime.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::DbConfig;

const DB_MAX_CONNECTIONS: u32 = 10;

/// Open the `PostgreSQL` connection pool. No retry: callers treat failure as
/// fatal.
///
/// # Errors
///
/// Returns an error if the initial connection cannot be established.
pub async fn connect(config: &DbConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(DB_MAX_CONNECTIONS)
        .connect_with(config.connect_options())
        .await
}

/// Read the schema script from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read; callers treat that as fatal.
pub fn load_schema(path: &str) -> std::io::Result<String> {
    std::fs::read_to_string(path)
}

/// Execute the schema script contents as a single statement batch.
///
/// # Errors
///
/// Returns an error if any statement in the batch fails. Callers keep the
/// process alive and leave the readiness flag unset.
pub async fn apply_schema(pool: &PgPool, schema: &str) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(schema).execute(pool).await?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
