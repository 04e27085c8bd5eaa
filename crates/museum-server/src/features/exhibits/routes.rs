//! Exhibit admin API routes
//!
//! # Route Structure
//!
//! - `POST /api/v1/admin/exhibits` - Register a new exhibit
//! - `GET /api/v1/admin/exhibits` - List exhibits with filters and pagination
//! - `GET /api/v1/admin/exhibits/:id` - Get a single exhibit
//! - `PUT /api/v1/admin/exhibits/:id` - Partially update an exhibit
//! - `DELETE /api/v1/admin/exhibits/:id` - Delete an exhibit with its photos and history
//! - `POST /api/v1/admin/exhibits/actions/:action` - Apply a bulk status action
//!
//! Write endpoints record the operator named by the `x-user-id` header.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use sqlx::SqlitePool;

use super::{
    commands::{
        BulkAction, BulkStatusCommand, BulkStatusError, CreateExhibitCommand, CreateExhibitError,
        DeleteExhibitError, UpdateExhibitCommand, UpdateExhibitError,
    },
    queries::{GetExhibitError, ListExhibitsError, ListExhibitsQuery},
};
use crate::api::response::{conflict, internal_error, not_found, validation_error, ApiResponse};
use crate::middleware::acting_operator;

// ============================================================================
// Router Configuration
// ============================================================================

pub fn exhibits_routes() -> Router<SqlitePool> {
    Router::new()
        .route("/", post(create_exhibit).get(list_exhibits))
        .route(
            "/:id",
            get(get_exhibit).put(update_exhibit).delete(delete_exhibit),
        )
        .route("/actions/:action", post(apply_bulk_action))
}

// ============================================================================
// Command Handlers (Write Operations)
// ============================================================================

/// Register a new exhibit
///
/// # Response
///
/// - `201 Created` - Exhibit created
/// - `400 Bad Request` - Validation error
/// - `409 Conflict` - Inventory number already in use
#[tracing::instrument(skip(pool, command), fields(inventory_number = %command.inventory_number))]
async fn create_exhibit(
    State(pool): State<SqlitePool>,
    Json(command): Json<CreateExhibitCommand>,
) -> Result<Response, ExhibitApiError> {
    let exhibit = super::commands::create::handle(pool, command).await?;

    tracing::info!(exhibit_id = exhibit.id, "Exhibit created via API");

    Ok((StatusCode::CREATED, Json(ApiResponse::success(exhibit))).into_response())
}

/// Partially update an exhibit
///
/// The response carries the history entry the change produced, or `null`.
#[tracing::instrument(skip(pool, headers, command))]
async fn update_exhibit(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(command): Json<UpdateExhibitCommand>,
) -> Result<Response, ExhibitApiError> {
    let operator = acting_operator(&headers);
    let response = super::commands::update::handle(pool, id, command, operator).await?;

    tracing::info!(
        exhibit_id = id,
        logged = response.log_entry.is_some(),
        "Exhibit updated via API"
    );

    Ok((StatusCode::OK, Json(ApiResponse::success(response))).into_response())
}

#[tracing::instrument(skip(pool))]
async fn delete_exhibit(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Response, ExhibitApiError> {
    let response = super::commands::delete::handle(pool, id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success(response))).into_response())
}

/// Apply a bulk status action
///
/// # Request Body
///
/// ```json
/// { "ids": [1, 2, 3], "location": "Hall 2" }
/// ```
///
/// `location` is optional. The response reports how many exhibits changed.
#[tracing::instrument(skip(pool, headers, command))]
async fn apply_bulk_action(
    State(pool): State<SqlitePool>,
    Path(action): Path<String>,
    headers: HeaderMap,
    Json(command): Json<BulkStatusCommand>,
) -> Result<Response, ExhibitApiError> {
    let action: BulkAction = action.parse()?;
    let operator = acting_operator(&headers);
    let response = super::commands::bulk_status::handle(pool, action, command, operator).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(response))).into_response())
}

// ============================================================================
// Query Handlers (Read Operations)
// ============================================================================

#[tracing::instrument(skip(pool))]
async fn get_exhibit(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Response, ExhibitApiError> {
    let exhibit = super::queries::get::handle(pool, id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success(exhibit))).into_response())
}

#[tracing::instrument(skip(pool))]
async fn list_exhibits(
    State(pool): State<SqlitePool>,
    Query(query): Query<ListExhibitsQuery>,
) -> Result<Response, ExhibitApiError> {
    let response = super::queries::list::handle(pool, query).await?;

    tracing::debug!(
        count = response.items.len(),
        total = response.pagination.total,
        "Exhibits listed via API"
    );

    let meta = json!({ "pagination": response.pagination });
    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_meta(response.items, meta)),
    )
        .into_response())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Unified error type for exhibit API endpoints
#[derive(Debug)]
enum ExhibitApiError {
    Create(CreateExhibitError),
    Update(UpdateExhibitError),
    Delete(DeleteExhibitError),
    Bulk(BulkStatusError),
    Get(GetExhibitError),
    List(ListExhibitsError),
}

impl From<CreateExhibitError> for ExhibitApiError {
    fn from(err: CreateExhibitError) -> Self {
        Self::Create(err)
    }
}

impl From<UpdateExhibitError> for ExhibitApiError {
    fn from(err: UpdateExhibitError) -> Self {
        Self::Update(err)
    }
}

impl From<DeleteExhibitError> for ExhibitApiError {
    fn from(err: DeleteExhibitError) -> Self {
        Self::Delete(err)
    }
}

impl From<BulkStatusError> for ExhibitApiError {
    fn from(err: BulkStatusError) -> Self {
        Self::Bulk(err)
    }
}

impl From<GetExhibitError> for ExhibitApiError {
    fn from(err: GetExhibitError) -> Self {
        Self::Get(err)
    }
}

impl From<ListExhibitsError> for ExhibitApiError {
    fn from(err: ListExhibitsError) -> Self {
        Self::List(err)
    }
}

fn update_error_response(err: UpdateExhibitError) -> Response {
    match err {
        UpdateExhibitError::NotFound(_) => not_found(err.to_string()),
        UpdateExhibitError::Database(ref e) => internal_error("exhibit update", e),
        UpdateExhibitError::Validation(_)
        | UpdateExhibitError::NoFieldsToUpdate
        | UpdateExhibitError::InventoryNumberImmutable
        | UpdateExhibitError::UnknownOperator(_) => validation_error(err.to_string()),
    }
}

impl IntoResponse for ExhibitApiError {
    fn into_response(self) -> Response {
        match self {
            ExhibitApiError::Create(err) => match err {
                CreateExhibitError::Validation(_) => validation_error(err.to_string()),
                CreateExhibitError::DuplicateInventoryNumber(_) => conflict(err.to_string()),
                CreateExhibitError::Database(ref e) => internal_error("exhibit creation", e),
            },
            ExhibitApiError::Update(err) => update_error_response(err),
            ExhibitApiError::Delete(err) => match err {
                DeleteExhibitError::NotFound(_) => not_found(err.to_string()),
                DeleteExhibitError::Database(ref e) => internal_error("exhibit deletion", e),
            },
            ExhibitApiError::Bulk(err) => match err {
                BulkStatusError::UnknownAction(_) => not_found(err.to_string()),
                BulkStatusError::NoSelection
                | BulkStatusError::TooManyIds
                | BulkStatusError::Validation(_) => validation_error(err.to_string()),
                BulkStatusError::Update(inner) => update_error_response(inner),
                BulkStatusError::Database(ref e) => internal_error("bulk action", e),
            },
            ExhibitApiError::Get(err) => match err {
                GetExhibitError::NotFound(_) => not_found(err.to_string()),
                GetExhibitError::Database(ref e) => internal_error("exhibit lookup", e),
            },
            ExhibitApiError::List(err) => match err {
                ListExhibitsError::InvalidPagination(_) => validation_error(err.to_string()),
                ListExhibitsError::Database(ref e) => internal_error("exhibit listing", e),
            },
        }
    }
}
