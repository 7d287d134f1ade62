//! Database layer
//!
//! SQLite access for the call log: connection pool management, idempotent
//! schema initialization, and the call record repository.

pub mod call_repo;
pub mod pool;
pub mod schema;

pub use call_repo::{CallRepository, SqliteCallRepository};
pub use pool::create_pool;
pub use schema::init_schema;
