//! Attach a photo to an exhibit

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::features::shared::error_helpers::is_foreign_key_violation;
use crate::features::shared::validation::{
    validate_max_length, validate_required, FieldValidationError, CAPTION_MAX, IMAGE_MAX,
};
use crate::models::{Photo, PHOTO_COLUMNS};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePhotoCommand {
    pub exhibit_id: i64,
    /// Stored path or URL of the image
    pub image: String,
    #[serde(default)]
    pub caption: String,
    /// Main photos are shown in the catalog listing
    #[serde(default)]
    pub is_main: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum CreatePhotoError {
    #[error("{0}")]
    Validation(#[from] FieldValidationError),

    #[error("Exhibit {0} not found")]
    ExhibitNotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl CreatePhotoCommand {
    pub fn validate(&self) -> Result<(), CreatePhotoError> {
        validate_required("image", &self.image, IMAGE_MAX)?;
        validate_max_length("caption", &self.caption, CAPTION_MAX)?;
        Ok(())
    }
}

#[tracing::instrument(skip(pool, command), fields(exhibit_id = command.exhibit_id, is_main = command.is_main))]
pub async fn handle(pool: SqlitePool, command: CreatePhotoCommand) -> Result<Photo, CreatePhotoError> {
    command.validate()?;

    let sql = format!(
        r#"
        INSERT INTO photos (exhibit_id, image, caption, is_main, uploaded_at)
        VALUES (?1, ?2, ?3, ?4, ?5)
        RETURNING {}
        "#,
        PHOTO_COLUMNS
    );

    let photo = sqlx::query_as::<_, Photo>(&sql)
        .bind(command.exhibit_id)
        .bind(&command.image)
        .bind(&command.caption)
        .bind(command.is_main)
        .bind(Utc::now())
        .fetch_one(&pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                CreatePhotoError::ExhibitNotFound(command.exhibit_id)
            } else {
                CreatePhotoError::Database(e)
            }
        })?;

    tracing::info!(photo_id = photo.id, "Photo added");

    Ok(photo)
}
