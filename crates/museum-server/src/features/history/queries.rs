//! Read side of the history log for administrators
//!
//! Entries are never created, edited or deleted through this surface; the
//! only writer is the exhibit update path.

use sqlx::SqlitePool;

use crate::audit::{self, LogEntryView, LogQuery};
use crate::features::shared::pagination::Paginated;

#[derive(Debug, thiserror::Error)]
pub enum HistoryQueryError {
    #[error("{0}")]
    InvalidPagination(&'static str),
    #[error("History entry {0} not found")]
    NotFound(i64),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn list(
    pool: SqlitePool,
    query: LogQuery,
) -> Result<Paginated<LogEntryView>, HistoryQueryError> {
    query
        .pagination()
        .validate()
        .map_err(HistoryQueryError::InvalidPagination)?;

    Ok(audit::list_log_entries(&pool, &query).await?)
}

#[tracing::instrument(skip(pool))]
pub async fn get(pool: SqlitePool, id: i64) -> Result<LogEntryView, HistoryQueryError> {
    audit::get_log_entry(&pool, id)
        .await?
        .ok_or(HistoryQueryError::NotFound(id))
}
