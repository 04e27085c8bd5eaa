use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePhotoResponse {
    pub id: i64,
    pub exhibit_id: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum DeletePhotoError {
    #[error("Photo {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: SqlitePool, id: i64) -> Result<DeletePhotoResponse, DeletePhotoError> {
    let exhibit_id: i64 = sqlx::query_scalar("DELETE FROM photos WHERE id = ?1 RETURNING exhibit_id")
        .bind(id)
        .fetch_optional(&pool)
        .await?
        .ok_or(DeletePhotoError::NotFound(id))?;

    tracing::info!(exhibit_id, "Photo deleted");

    Ok(DeletePhotoResponse { id, exhibit_id })
}
