//! SQLite connection pool management

use crate::error::{AppError, AppResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Default maximum number of connections in the pool
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default connection acquire timeout in seconds
const DEFAULT_ACQUIRE_TIMEOUT: u64 = 30;

/// Create a SQLite connection pool
///
/// The database file is created if it does not exist yet. Each request
/// handler checks a connection out of this pool for the duration of one
/// repository call and returns it on every exit path.
pub async fn create_pool(database_url: &str, max_connections: Option<u32>) -> AppResult<SqlitePool> {
    info!("Creating database connection pool");

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| AppError::Pool(format!("Invalid database URL: {}", e)))?
        .create_if_missing(true);

    let max_conns = max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_conns)
        .acquire_timeout(Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT))
        .connect_with(options)
        .await
        .map_err(|e| {
            warn!("Failed to create database pool: {}", e);
            AppError::Pool(format!("Failed to connect to database: {}", e))
        })?;

    // Test the connection
    sqlx::query("SELECT 1")
        .execute(&pool)
        .await
        .map_err(|e| AppError::Database(format!("Database health check failed: {}", e)))?;

    info!("Database connection verified");

    Ok(pool)
}
