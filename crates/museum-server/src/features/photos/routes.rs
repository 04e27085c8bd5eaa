//! Photo admin API routes
//!
//! - `POST /api/v1/admin/photos` - Attach a photo to an exhibit
//! - `GET /api/v1/admin/photos` - List photos, filtered by `exhibit_id` or `is_main`
//! - `GET /api/v1/admin/photos/:id` - Get a single photo
//! - `PUT /api/v1/admin/photos/:id` - Change image, caption or main flag
//! - `DELETE /api/v1/admin/photos/:id` - Remove a photo

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use sqlx::SqlitePool;

use super::{
    commands::{CreatePhotoCommand, CreatePhotoError, DeletePhotoError, UpdatePhotoCommand, UpdatePhotoError},
    queries::{GetPhotoError, ListPhotosError, ListPhotosQuery},
};
use crate::api::response::{internal_error, not_found, validation_error, ApiResponse};

pub fn photos_routes() -> Router<SqlitePool> {
    Router::new()
        .route("/", post(create_photo).get(list_photos))
        .route("/:id", get(get_photo).put(update_photo).delete(delete_photo))
}

#[tracing::instrument(skip(pool, command), fields(exhibit_id = command.exhibit_id))]
async fn create_photo(
    State(pool): State<SqlitePool>,
    Json(command): Json<CreatePhotoCommand>,
) -> Result<Response, PhotoApiError> {
    let photo = super::commands::create::handle(pool, command).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(photo))).into_response())
}

#[tracing::instrument(skip(pool, command))]
async fn update_photo(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(command): Json<UpdatePhotoCommand>,
) -> Result<Response, PhotoApiError> {
    let photo = super::commands::update::handle(pool, id, command).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success(photo))).into_response())
}

#[tracing::instrument(skip(pool))]
async fn delete_photo(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Response, PhotoApiError> {
    let response = super::commands::delete::handle(pool, id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success(response))).into_response())
}

#[tracing::instrument(skip(pool))]
async fn get_photo(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Response, PhotoApiError> {
    let photo = super::queries::get::handle(pool, id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success(photo))).into_response())
}

#[tracing::instrument(skip(pool))]
async fn list_photos(
    State(pool): State<SqlitePool>,
    Query(query): Query<ListPhotosQuery>,
) -> Result<Response, PhotoApiError> {
    let response = super::queries::list::handle(pool, query).await?;
    let meta = json!({ "pagination": response.pagination });
    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_meta(response.items, meta)),
    )
        .into_response())
}

#[derive(Debug)]
enum PhotoApiError {
    Create(CreatePhotoError),
    Update(UpdatePhotoError),
    Delete(DeletePhotoError),
    Get(GetPhotoError),
    List(ListPhotosError),
}

impl From<CreatePhotoError> for PhotoApiError {
    fn from(err: CreatePhotoError) -> Self {
        Self::Create(err)
    }
}

impl From<UpdatePhotoError> for PhotoApiError {
    fn from(err: UpdatePhotoError) -> Self {
        Self::Update(err)
    }
}

impl From<DeletePhotoError> for PhotoApiError {
    fn from(err: DeletePhotoError) -> Self {
        Self::Delete(err)
    }
}

impl From<GetPhotoError> for PhotoApiError {
    fn from(err: GetPhotoError) -> Self {
        Self::Get(err)
    }
}

impl From<ListPhotosError> for PhotoApiError {
    fn from(err: ListPhotosError) -> Self {
        Self::List(err)
    }
}

impl IntoResponse for PhotoApiError {
    fn into_response(self) -> Response {
        match self {
            PhotoApiError::Create(err) => match err {
                CreatePhotoError::Validation(_) => validation_error(err.to_string()),
                CreatePhotoError::ExhibitNotFound(_) => not_found(err.to_string()),
                CreatePhotoError::Database(ref e) => internal_error("photo creation", e),
            },
            PhotoApiError::Update(err) => match err {
                UpdatePhotoError::Validation(_) | UpdatePhotoError::NoFieldsToUpdate => {
                    validation_error(err.to_string())
                },
                UpdatePhotoError::NotFound(_) => not_found(err.to_string()),
                UpdatePhotoError::Database(ref e) => internal_error("photo update", e),
            },
            PhotoApiError::Delete(err) => match err {
                DeletePhotoError::NotFound(_) => not_found(err.to_string()),
                DeletePhotoError::Database(ref e) => internal_error("photo deletion", e),
            },
            PhotoApiError::Get(err) => match err {
                GetPhotoError::NotFound(_) => not_found(err.to_string()),
                GetPhotoError::Database(ref e) => internal_error("photo lookup", e),
            },
            PhotoApiError::List(err) => match err {
                ListPhotosError::InvalidPagination(_) => validation_error(err.to_string()),
                ListPhotosError::Database(ref e) => internal_error("photo listing", e),
            },
        }
    }
}
