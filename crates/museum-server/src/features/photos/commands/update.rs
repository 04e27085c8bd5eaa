//! Update photo command

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::features::shared::validation::{
    validate_max_length, validate_required, FieldValidationError, CAPTION_MAX, IMAGE_MAX,
};
use crate::models::{Photo, PHOTO_COLUMNS};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePhotoCommand {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_main: Option<bool>,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdatePhotoError {
    #[error("{0}")]
    Validation(#[from] FieldValidationError),

    #[error("At least one field must be provided for update")]
    NoFieldsToUpdate,

    #[error("Photo {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl UpdatePhotoCommand {
    pub fn validate(&self) -> Result<(), UpdatePhotoError> {
        if self.image.is_none() && self.caption.is_none() && self.is_main.is_none() {
            return Err(UpdatePhotoError::NoFieldsToUpdate);
        }
        if let Some(ref image) = self.image {
            validate_required("image", image, IMAGE_MAX)?;
        }
        if let Some(ref caption) = self.caption {
            validate_max_length("caption", caption, CAPTION_MAX)?;
        }
        Ok(())
    }
}

#[tracing::instrument(skip(pool, command))]
pub async fn handle(
    pool: SqlitePool,
    id: i64,
    command: UpdatePhotoCommand,
) -> Result<Photo, UpdatePhotoError> {
    command.validate()?;

    let sql = format!(
        r#"
        UPDATE photos
        SET image = COALESCE(?2, image),
            caption = COALESCE(?3, caption),
            is_main = COALESCE(?4, is_main)
        WHERE id = ?1
        RETURNING {}
        "#,
        PHOTO_COLUMNS
    );

    let photo = sqlx::query_as::<_, Photo>(&sql)
        .bind(id)
        .bind(command.image.as_deref())
        .bind(command.caption.as_deref())
        .bind(command.is_main)
        .fetch_optional(&pool)
        .await?
        .ok_or(UpdatePhotoError::NotFound(id))?;

    tracing::info!(exhibit_id = photo.exhibit_id, "Photo updated");

    Ok(photo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{insert_exhibit, insert_photo, test_pool};
    use crate::models::ExhibitStatus;

    #[tokio::test]
    async fn test_update_keeps_unspecified_fields() {
        let pool = test_pool().await;
        let exhibit = insert_exhibit(&pool, "PU-1", ExhibitStatus::OnDisplay).await;
        let photo = insert_photo(&pool, exhibit.id, "a.jpg", false).await;

        let updated = handle(
            pool.clone(),
            photo.id,
            UpdatePhotoCommand {
                is_main: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert!(updated.is_main);
        assert_eq!(updated.image, "a.jpg");
        assert_eq!(updated.uploaded_at, photo.uploaded_at);

        let err = handle(
            pool,
            photo.id + 100,
            UpdatePhotoCommand {
                caption: Some("x".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, UpdatePhotoError::NotFound(_)));
    }
}
