//! Call Log Service
//!
//! A small HTTP service for recording and querying phone call logs.
//! It includes:
//!
//! - SQLite connection pool management with sqlx
//! - A repository for call record storage and paginated lookups
//! - Actix-web handlers mapping the HTTP surface onto the repository

pub mod api;
pub mod config;
pub mod database;
pub mod error;
pub mod models;

pub use error::{AppError, AppResult};
