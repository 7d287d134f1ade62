//! Environment-derived runtime configuration

use crate::error::{AppError, AppResult};
use std::env;

/// Server and storage configuration
///
/// Every value has a default so the service starts with no environment
/// set; the database lands in `calls.db` next to the binary.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub workers: usize,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid port number: {}", e)))?,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://calls.db".to_string()),
            workers: env::var("SERVER_WORKERS")
                .unwrap_or_else(|_| num_cpus::get().to_string())
                .parse()
                .unwrap_or_else(|_| num_cpus::get()),
        })
    }
}
