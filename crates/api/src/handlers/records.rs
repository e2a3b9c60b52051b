//! Generic CRUD handlers shared by every [`Record`] type.
//!
//! Each handler runs in its own transaction. Returning early (including via
//! `?`) drops the transaction, which rolls it back and releases the connection.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use marketplace_core::error::CoreError;
use marketplace_core::types::DbId;
use marketplace_db::record::Record;
use marketplace_db::repositories::RecordRepo;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::state::AppState;

fn not_found<R: Record>(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: R::ENTITY,
        id,
    })
}

/// GET /{table}/
pub async fn list<R: Record>(State(state): State<AppState>) -> AppResult<Json<Vec<R>>> {
    let mut tx = state.pool.begin().await?;
    let records = RecordRepo::<R>::list(&mut *tx).await?;
    tx.commit().await?;
    Ok(Json(records))
}

/// POST /{table}/
///
/// The body carries the full record, id included.
pub async fn create<R: Record>(
    State(state): State<AppState>,
    JsonBody(record): JsonBody<R>,
) -> AppResult<(StatusCode, String)> {
    let mut tx = state.pool.begin().await?;
    RecordRepo::<R>::create(&mut *tx, &record)
        .await
        .map_err(|err| match err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Core(CoreError::Conflict(format!(
                    "{} {} already exists",
                    R::ENTITY,
                    record.id()
                )))
            }
            other => other.into(),
        })?;
    tx.commit().await?;

    tracing::info!(entity = R::ENTITY, id = record.id(), "Record created");
    Ok((StatusCode::OK, format!("{} created", R::ENTITY)))
}

/// GET /{table}/{id}/
pub async fn get_by_id<R: Record>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<R>> {
    let mut tx = state.pool.begin().await?;
    let record = RecordRepo::<R>::find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| not_found::<R>(id))?;
    tx.commit().await?;
    Ok(Json(record))
}

/// PUT /{table}/{id}/
///
/// Overwrites every field; an `id` key in the body is ignored.
pub async fn update<R: Record>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    JsonBody(fields): JsonBody<R::Fields>,
) -> AppResult<(StatusCode, String)> {
    let mut tx = state.pool.begin().await?;
    if !RecordRepo::<R>::update(&mut *tx, id, &fields).await? {
        return Err(not_found::<R>(id));
    }
    tx.commit().await?;

    tracing::info!(entity = R::ENTITY, id, "Record updated");
    Ok((StatusCode::OK, format!("{} {id} updated", R::ENTITY)))
}

/// DELETE /{table}/{id}/
pub async fn delete<R: Record>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, String)> {
    let mut tx = state.pool.begin().await?;
    if !RecordRepo::<R>::delete(&mut *tx, id).await? {
        return Err(not_found::<R>(id));
    }
    tx.commit().await?;

    tracing::info!(entity = R::ENTITY, id, "Record deleted");
    Ok((StatusCode::OK, format!("{} {id} deleted", R::ENTITY)))
}
