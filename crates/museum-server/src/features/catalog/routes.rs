//! Public catalog routes
//!
//! - `GET /catalog?page=N` - Exhibits on display, 12 per page
//! - `GET /catalog/exhibits/:id` - Exhibit with photos and recent history

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use sqlx::SqlitePool;

use super::queries::{self, CatalogError, CatalogParams};
use crate::api::response::{internal_error, not_found, ApiResponse};

pub fn catalog_routes() -> Router<SqlitePool> {
    Router::new()
        .route("/", get(catalog_page))
        .route("/exhibits/:id", get(exhibit_detail))
}

#[tracing::instrument(skip(pool))]
async fn catalog_page(
    State(pool): State<SqlitePool>,
    Query(params): Query<CatalogParams>,
) -> Result<Response, CatalogError> {
    let page = queries::list_page(pool, params).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success(page))).into_response())
}

#[tracing::instrument(skip(pool))]
async fn exhibit_detail(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Response, CatalogError> {
    let detail = queries::exhibit_detail(pool, id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success(detail))).into_response())
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        match self {
            CatalogError::ExhibitNotFound(_) => not_found(self.to_string()),
            CatalogError::Database(ref e) => internal_error("catalog query", e),
        }
    }
}
