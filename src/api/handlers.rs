//! Call log API handlers
//!
//! Each handler parses its request, runs exactly one repository operation,
//! and serializes the outcome; errors bubble up as [`AppError`] and are
//! turned into JSON payloads by its `ResponseError` impl.

use crate::api::dto::{Ack, CallNumbers, CallReportParams, CallReportResponse};
use crate::database::{CallRepository, SqliteCallRepository};
use crate::error::AppError;
use actix_web::{
    web::{Data, Json, Path, Query},
    HttpResponse, Result,
};
use sqlx::SqlitePool;
use tracing::{debug, info, instrument};

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "call-log-service",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Record a new call
///
/// # Examples
///
/// ```text
/// POST /initiate-call {"from_number": "1000000000", "to_number": "2000000000"}
/// ```
#[instrument(skip(db, body))]
pub async fn initiate_call(
    body: Json<CallNumbers>,
    db: Data<SqlitePool>,
) -> Result<Json<Ack>> {
    let repo = SqliteCallRepository::new(db.get_ref().clone());

    let id = repo
        .create(body.from_number.as_deref(), body.to_number.as_deref())
        .await?;

    info!("Created call record {}", id);

    Ok(Json(Ack::ok()))
}

/// List calls involving a phone number, paginated
///
/// The phone is matched against either side of the call. An empty page is
/// an error, whether the phone has no calls at all or the page number is
/// past the end; the response does not distinguish the two.
///
/// # Examples
///
/// ```text
/// GET /call-report?phone=1000000000&page=1&page_size=10
/// ```
#[instrument(skip(db))]
pub async fn call_report(
    query: Query<CallReportParams>,
    db: Data<SqlitePool>,
) -> Result<Json<CallReportResponse>> {
    let phone = query
        .phone
        .as_deref()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::MissingParameter("phone".to_string()))?;

    let repo = SqliteCallRepository::new(db.get_ref().clone());

    debug!(
        "Call report for {}: page={}, page_size={}",
        phone, query.page, query.page_size
    );

    let calls = repo
        .list_by_phone(phone, query.limit(), query.offset())
        .await?;

    if calls.is_empty() {
        return Err(AppError::EmptyResult.into());
    }

    info!("Retrieved {} call records for {}", calls.len(), phone);

    Ok(Json(CallReportResponse::new(calls)))
}

/// Overwrite the numbers of an existing call record
///
/// The start time and id are left untouched.
#[instrument(skip(db, body))]
pub async fn update_call(
    path: Path<i64>,
    body: Json<CallNumbers>,
    db: Data<SqlitePool>,
) -> Result<Json<Ack>> {
    let id = path.into_inner();
    let repo = SqliteCallRepository::new(db.get_ref().clone());

    let updated = repo
        .update(id, body.from_number.as_deref(), body.to_number.as_deref())
        .await?;

    if !updated {
        return Err(AppError::CallNotFound(id).into());
    }

    info!("Updated call record {}", id);

    Ok(Json(Ack::with_message("Call Record Updated")))
}

/// Delete a call record permanently
#[instrument(skip(db))]
pub async fn delete_call(path: Path<i64>, db: Data<SqlitePool>) -> Result<Json<Ack>> {
    let id = path.into_inner();
    let repo = SqliteCallRepository::new(db.get_ref().clone());

    let deleted = repo.delete(id).await?;

    if !deleted {
        return Err(AppError::CallNotFound(id).into());
    }

    info!("Deleted call record {}", id);

    Ok(Json(Ack::with_message("Call Record Deleted")))
}
