//! Call record repository implementation
//!
//! Provides SQLite-backed storage for call records. Uses runtime queries
//! (not compile-time macros) to avoid requiring a database at build time;
//! every value, including the phone filter, is bound as a parameter.

use crate::error::{AppError, AppResult};
use crate::models::CallRecord;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, error, instrument};

/// Storage operations for call records
///
/// The trait is the seam between HTTP handlers and the storage engine;
/// handlers never see SQL or sqlx types.
#[async_trait]
pub trait CallRepository: Send + Sync {
    /// Insert a new call record, stamping the current instant as its
    /// start time, and return the assigned id.
    ///
    /// Either number may be absent; the not-null constraint rejects the
    /// insert in that case and no row is persisted.
    async fn create(
        &self,
        from_number: Option<&str>,
        to_number: Option<&str>,
    ) -> AppResult<i64>;

    /// Fetch one page of the records involving `phone` on either side,
    /// in insertion order.
    async fn list_by_phone(
        &self,
        phone: &str,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<CallRecord>>;

    /// Overwrite both numbers of an existing record, leaving id and
    /// start time untouched. Returns `false` when no such record exists.
    async fn update(
        &self,
        id: i64,
        from_number: Option<&str>,
        to_number: Option<&str>,
    ) -> AppResult<bool>;

    /// Remove a record permanently. Returns `false` when no such record
    /// exists.
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// SQLite implementation of CallRepository
pub struct SqliteCallRepository {
    pool: SqlitePool,
}

impl SqliteCallRepository {
    /// Create a new call repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

const CALL_SELECT_COLUMNS: &str = "id, from_number, to_number, start_time";

#[async_trait]
impl CallRepository for SqliteCallRepository {
    #[instrument(skip(self))]
    async fn create(
        &self,
        from_number: Option<&str>,
        to_number: Option<&str>,
    ) -> AppResult<i64> {
        debug!("Creating call record");

        let start_time = Utc::now().to_rfc3339();

        let row: (i64,) = sqlx::query_as(
            "INSERT INTO calls (from_number, to_number, start_time) \
             VALUES (?1, ?2, ?3) RETURNING id",
        )
        .bind(from_number)
        .bind(to_number)
        .bind(&start_time)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if e.to_string().contains("NOT NULL constraint failed") {
                AppError::ConstraintViolation(
                    "from_number and to_number are required".to_string(),
                )
            } else {
                error!("Database error creating call record: {}", e);
                AppError::Database(format!("Failed to create call record: {}", e))
            }
        })?;

        Ok(row.0)
    }

    #[instrument(skip(self))]
    async fn list_by_phone(
        &self,
        phone: &str,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<CallRecord>> {
        debug!(
            "Listing calls for {} with limit {} offset {}",
            phone, limit, offset
        );

        let query = format!(
            "SELECT {} FROM calls WHERE from_number = ?1 OR to_number = ?1 \
             ORDER BY id LIMIT ?2 OFFSET ?3",
            CALL_SELECT_COLUMNS
        );

        let rows = sqlx::query_as::<sqlx::Sqlite, CallRow>(&query)
            .bind(phone)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!("Database error listing calls for {}: {}", phone, e);
                AppError::Database(format!("Failed to fetch call records: {}", e))
            })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    async fn update(
        &self,
        id: i64,
        from_number: Option<&str>,
        to_number: Option<&str>,
    ) -> AppResult<bool> {
        debug!("Updating call record {}", id);

        let result = sqlx::query("UPDATE calls SET from_number = ?1, to_number = ?2 WHERE id = ?3")
            .bind(from_number)
            .bind(to_number)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if e.to_string().contains("NOT NULL constraint failed") {
                    AppError::ConstraintViolation(
                        "from_number and to_number are required".to_string(),
                    )
                } else {
                    error!("Database error updating call record {}: {}", id, e);
                    AppError::Database(format!("Failed to update call record: {}", e))
                }
            })?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> AppResult<bool> {
        debug!("Deleting call record {}", id);

        let result = sqlx::query("DELETE FROM calls WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Database error deleting call record {}: {}", id, e);
                AppError::Database(format!("Failed to delete call record: {}", e))
            })?;

        Ok(result.rows_affected() > 0)
    }
}

/// Helper struct for mapping database rows to the domain model
#[derive(Debug, sqlx::FromRow)]
struct CallRow {
    id: i64,
    from_number: String,
    to_number: String,
    start_time: String,
}

impl From<CallRow> for CallRecord {
    fn from(row: CallRow) -> Self {
        Self {
            id: row.id,
            from_number: row.from_number,
            to_number: row.to_number,
            start_time: row.start_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{create_pool, init_schema};

    async fn test_repo() -> SqliteCallRepository {
        let pool = create_pool("sqlite::memory:", Some(1)).await.expect("pool");
        init_schema(&pool).await.expect("schema");
        SqliteCallRepository::new(pool)
    }

    #[tokio::test]
    async fn test_create_then_list_round_trip() {
        let repo = test_repo().await;

        let id = repo
            .create(Some("1000000000"), Some("2000000000"))
            .await
            .expect("create");
        assert_eq!(id, 1);

        let calls = repo.list_by_phone("1000000000", 10, 0).await.expect("list");
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].id, 1);
        assert_eq!(calls[0].from_number, "1000000000");
        assert_eq!(calls[0].to_number, "2000000000");
        assert!(!calls[0].start_time.is_empty());
    }

    #[tokio::test]
    async fn test_list_matches_either_side() {
        let repo = test_repo().await;

        repo.create(Some("111"), Some("222")).await.expect("create");
        repo.create(Some("333"), Some("111")).await.expect("create");
        repo.create(Some("333"), Some("444")).await.expect("create");

        let calls = repo.list_by_phone("111", 10, 0).await.expect("list");
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|c| c.involves("111")));
    }

    #[tokio::test]
    async fn test_create_with_null_field_persists_nothing() {
        let repo = test_repo().await;

        let err = repo.create(None, Some("2000000000")).await.unwrap_err();
        assert!(matches!(err, AppError::ConstraintViolation(_)));

        let err = repo.create(Some("1000000000"), None).await.unwrap_err();
        assert!(matches!(err, AppError::ConstraintViolation(_)));

        let calls = repo.list_by_phone("2000000000", 10, 0).await.expect("list");
        assert!(calls.is_empty());
    }

    #[tokio::test]
    async fn test_pagination_windows_in_insertion_order() {
        let repo = test_repo().await;

        for i in 0..15 {
            repo.create(Some("555"), Some(&format!("target-{}", i)))
                .await
                .expect("create");
        }

        let first = repo.list_by_phone("555", 10, 0).await.expect("page 1");
        assert_eq!(first.len(), 10);
        assert_eq!(first[0].id, 1);
        assert_eq!(first[9].id, 10);

        let second = repo.list_by_phone("555", 10, 10).await.expect("page 2");
        assert_eq!(second.len(), 5);
        assert_eq!(second[0].id, 11);
        assert_eq!(second[4].id, 15);

        let beyond = repo.list_by_phone("555", 10, 20).await.expect("page 3");
        assert!(beyond.is_empty());
    }

    #[tokio::test]
    async fn test_update_changes_numbers_keeps_id_and_start_time() {
        let repo = test_repo().await;

        repo.create(Some("1000000000"), Some("2000000000"))
            .await
            .expect("create");
        let before = repo.list_by_phone("1000000000", 10, 0).await.expect("list");

        let updated = repo
            .update(1, Some("3000000000"), Some("4000000000"))
            .await
            .expect("update");
        assert!(updated);

        let after = repo.list_by_phone("3000000000", 10, 0).await.expect("list");
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].id, before[0].id);
        assert_eq!(after[0].start_time, before[0].start_time);
        assert_eq!(after[0].from_number, "3000000000");
        assert_eq!(after[0].to_number, "4000000000");

        let old = repo.list_by_phone("1000000000", 10, 0).await.expect("list");
        assert!(old.is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_record_reports_not_found() {
        let repo = test_repo().await;

        let updated = repo
            .update(999, Some("1"), Some("2"))
            .await
            .expect("update");
        assert!(!updated);
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let repo = test_repo().await;

        repo.create(Some("111"), Some("222")).await.expect("create");

        assert!(repo.delete(1).await.expect("delete"));
        let calls = repo.list_by_phone("111", 10, 0).await.expect("list");
        assert!(calls.is_empty());

        assert!(!repo.delete(1).await.expect("second delete"));
    }

    #[tokio::test]
    async fn test_delete_missing_record_reports_not_found() {
        let repo = test_repo().await;

        assert!(!repo.delete(999).await.expect("delete"));
    }

    #[test]
    fn test_call_row_conversion() {
        let row = CallRow {
            id: 7,
            from_number: "1000000000".to_string(),
            to_number: "2000000000".to_string(),
            start_time: "2024-01-01T00:00:00+00:00".to_string(),
        };

        let record: CallRecord = row.into();
        assert_eq!(record.id, 7);
        assert_eq!(record.from_number, "1000000000");
        assert_eq!(record.to_number, "2000000000");
        assert_eq!(record.start_time, "2024-01-01T00:00:00+00:00");
    }
}
