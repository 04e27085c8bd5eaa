//! Operator admin API routes
//!
//! - `POST /api/v1/admin/operators` - Create an operator
//! - `GET /api/v1/admin/operators` - List operators by username
//! - `GET /api/v1/admin/operators/:id` - Get a single operator
//! - `DELETE /api/v1/admin/operators/:id` - Delete an operator; their history entries are kept

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use sqlx::SqlitePool;
use uuid::Uuid;

use super::{
    commands::{CreateOperatorCommand, CreateOperatorError, DeleteOperatorError},
    queries::{GetOperatorError, ListOperatorsError, ListOperatorsQuery},
};
use crate::api::response::{conflict, internal_error, not_found, validation_error, ApiResponse};

pub fn operators_routes() -> Router<SqlitePool> {
    Router::new()
        .route("/", post(create_operator).get(list_operators))
        .route("/:id", get(get_operator).delete(delete_operator))
}

#[tracing::instrument(skip(pool, command), fields(username = %command.username))]
async fn create_operator(
    State(pool): State<SqlitePool>,
    Json(command): Json<CreateOperatorCommand>,
) -> Result<Response, OperatorApiError> {
    let operator = super::commands::create::handle(pool, command).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(operator))).into_response())
}

#[tracing::instrument(skip(pool))]
async fn delete_operator(
    State(pool): State<SqlitePool>,
    Path(id): Path<Uuid>,
) -> Result<Response, OperatorApiError> {
    let response = super::commands::delete::handle(pool, id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success(response))).into_response())
}

#[tracing::instrument(skip(pool))]
async fn get_operator(
    State(pool): State<SqlitePool>,
    Path(id): Path<Uuid>,
) -> Result<Response, OperatorApiError> {
    let operator = super::queries::get::handle(pool, id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success(operator))).into_response())
}

#[tracing::instrument(skip(pool))]
async fn list_operators(
    State(pool): State<SqlitePool>,
    Query(query): Query<ListOperatorsQuery>,
) -> Result<Response, OperatorApiError> {
    let response = super::queries::list::handle(pool, query).await?;
    let meta = json!({ "pagination": response.pagination });
    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_meta(response.items, meta)),
    )
        .into_response())
}

#[derive(Debug)]
enum OperatorApiError {
    Create(CreateOperatorError),
    Delete(DeleteOperatorError),
    Get(GetOperatorError),
    List(ListOperatorsError),
}

impl From<CreateOperatorError> for OperatorApiError {
    fn from(err: CreateOperatorError) -> Self {
        Self::Create(err)
    }
}

impl From<DeleteOperatorError> for OperatorApiError {
    fn from(err: DeleteOperatorError) -> Self {
        Self::Delete(err)
    }
}

impl From<GetOperatorError> for OperatorApiError {
    fn from(err: GetOperatorError) -> Self {
        Self::Get(err)
    }
}

impl From<ListOperatorsError> for OperatorApiError {
    fn from(err: ListOperatorsError) -> Self {
        Self::List(err)
    }
}

impl IntoResponse for OperatorApiError {
    fn into_response(self) -> Response {
        match self {
            OperatorApiError::Create(err) => match err {
                CreateOperatorError::Validation(_) => validation_error(err.to_string()),
                CreateOperatorError::DuplicateUsername(_) => conflict(err.to_string()),
                CreateOperatorError::Database(ref e) => internal_error("operator creation", e),
            },
            OperatorApiError::Delete(err) => match err {
                DeleteOperatorError::NotFound(_) => not_found(err.to_string()),
                DeleteOperatorError::Database(ref e) => internal_error("operator deletion", e),
            },
            OperatorApiError::Get(err) => match err {
                GetOperatorError::NotFound(_) => not_found(err.to_string()),
                GetOperatorError::Database(ref e) => internal_error("operator lookup", e),
            },
            OperatorApiError::List(err) => match err {
                ListOperatorsError::InvalidPagination(_) => validation_error(err.to_string()),
                ListOperatorsError::Database(ref e) => internal_error("operator listing", e),
            },
        }
    }
}
