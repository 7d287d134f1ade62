//! Schema initialization
//!
//! The call log has a single table. Creation is idempotent so startup can
//! run it unconditionally; there is no migration machinery.

use crate::error::{AppError, AppResult};
use sqlx::SqlitePool;
use tracing::info;

const CREATE_CALLS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS calls (
    id INTEGER PRIMARY KEY,
    from_number TEXT NOT NULL,
    to_number TEXT NOT NULL,
    start_time TEXT NOT NULL
)
"#;

/// Create the calls table if it does not exist yet
pub async fn init_schema(pool: &SqlitePool) -> AppResult<()> {
    sqlx::query(CREATE_CALLS_TABLE)
        .execute(pool)
        .await
        .map_err(|e| AppError::Database(format!("Failed to initialize schema: {}", e)))?;

    info!("Database schema ready");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::create_pool;

    #[tokio::test]
    async fn test_init_schema_is_idempotent() {
        let pool = create_pool("sqlite::memory:", Some(1)).await.expect("pool");

        init_schema(&pool).await.expect("first init");
        init_schema(&pool).await.expect("second init");

        sqlx::query("INSERT INTO calls (from_number, to_number, start_time) VALUES ('1', '2', '3')")
            .execute(&pool)
            .await
            .expect("insert into initialized table");
    }
}
