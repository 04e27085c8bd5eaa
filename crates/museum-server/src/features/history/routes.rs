//! History admin API routes (read-only)
//!
//! - `GET /api/v1/admin/history` - List entries, filtered by `exhibit_id`, `action` or `q`
//! - `GET /api/v1/admin/history/:id` - Get a single entry

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use sqlx::SqlitePool;

use super::queries::{self, HistoryQueryError};
use crate::api::response::{internal_error, not_found, validation_error, ApiResponse};
use crate::audit::LogQuery;

pub fn history_routes() -> Router<SqlitePool> {
    Router::new()
        .route("/", get(list_history))
        .route("/:id", get(get_history_entry))
}

#[tracing::instrument(skip(pool))]
async fn list_history(
    State(pool): State<SqlitePool>,
    Query(query): Query<LogQuery>,
) -> Result<Response, HistoryQueryError> {
    let response = queries::list(pool, query).await?;
    let meta = json!({ "pagination": response.pagination });
    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_meta(response.items, meta)),
    )
        .into_response())
}

#[tracing::instrument(skip(pool))]
async fn get_history_entry(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Response, HistoryQueryError> {
    let entry = queries::get(pool, id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success(entry))).into_response())
}

impl IntoResponse for HistoryQueryError {
    fn into_response(self) -> Response {
        match self {
            HistoryQueryError::InvalidPagination(_) => validation_error(self.to_string()),
            HistoryQueryError::NotFound(_) => not_found(self.to_string()),
            HistoryQueryError::Database(ref e) => internal_error("history lookup", e),
        }
    }
}
