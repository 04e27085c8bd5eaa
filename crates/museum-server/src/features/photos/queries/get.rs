use sqlx::SqlitePool;

use crate::models::{Photo, PHOTO_COLUMNS};

#[derive(Debug, thiserror::Error)]
pub enum GetPhotoError {
    #[error("Photo {0} not found")]
    NotFound(i64),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: SqlitePool, id: i64) -> Result<Photo, GetPhotoError> {
    let sql = format!("SELECT {} FROM photos WHERE id = ?1", PHOTO_COLUMNS);

    sqlx::query_as::<_, Photo>(&sql)
        .bind(id)
        .fetch_optional(&pool)
        .await?
        .ok_or(GetPhotoError::NotFound(id))
}
