//! Create exhibit command
//!
//! Creation never writes a history entry: the log records changes to an
//! existing exhibit, and a new one has no previous state.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::features::shared::error_helpers::map_unique_violation;
use crate::features::shared::validation::{
    validate_max_length, validate_not_blank, validate_required, FieldValidationError,
    AUTHOR_MAX, CATEGORY_MAX, CREATION_DATE_MAX, DIMENSIONS_MAX, INVENTORY_NUMBER_MAX,
    LOCATION_MAX, MATERIAL_MAX, NAME_MAX,
};
use crate::models::{Exhibit, ExhibitStatus, EXHIBIT_COLUMNS};

/// Command to register a new exhibit
///
/// # Examples
///
/// ```rust,ignore
/// let command = CreateExhibitCommand {
///     inventory_number: "MK-2024-0001".to_string(),
///     name: "Ancient vase".to_string(),
///     description: "Red-figure amphora".to_string(),
///     acquisition_date: NaiveDate::from_ymd_opt(2019, 3, 1).unwrap(),
///     status: None, // defaults to IN_STORAGE
///     current_location: "Storage".to_string(),
///     category: "Archaeology".to_string(),
///     author: String::new(),
///     creation_date: "V century BC".to_string(),
///     material: "Ceramics".to_string(),
///     dimensions: "40x30 cm".to_string(),
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExhibitCommand {
    /// Unique inventory number; cannot be changed later
    pub inventory_number: String,
    pub name: String,
    pub description: String,
    pub acquisition_date: NaiveDate,
    /// Defaults to `IN_STORAGE`
    #[serde(default)]
    pub status: Option<ExhibitStatus>,
    pub current_location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub author: String,
    /// Free text, e.g. "XVIII century"
    #[serde(default)]
    pub creation_date: String,
    #[serde(default)]
    pub material: String,
    #[serde(default)]
    pub dimensions: String,
}

/// Errors that can occur when creating an exhibit
#[derive(Debug, thiserror::Error)]
pub enum CreateExhibitError {
    #[error("{0}")]
    Validation(#[from] FieldValidationError),

    #[error("Exhibit with inventory number '{0}' already exists")]
    DuplicateInventoryNumber(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl CreateExhibitCommand {
    /// Validates the command parameters
    pub fn validate(&self) -> Result<(), CreateExhibitError> {
        validate_required("inventory_number", &self.inventory_number, INVENTORY_NUMBER_MAX)?;
        validate_required("name", &self.name, NAME_MAX)?;
        validate_not_blank("description", &self.description)?;
        validate_required("current_location", &self.current_location, LOCATION_MAX)?;
        validate_max_length("category", &self.category, CATEGORY_MAX)?;
        validate_max_length("author", &self.author, AUTHOR_MAX)?;
        validate_max_length("creation_date", &self.creation_date, CREATION_DATE_MAX)?;
        validate_max_length("material", &self.material, MATERIAL_MAX)?;
        validate_max_length("dimensions", &self.dimensions, DIMENSIONS_MAX)?;
        Ok(())
    }
}

/// Handler for creating exhibits
///
/// # Errors
///
/// - Validation errors if a field is missing or too long
/// - `DuplicateInventoryNumber` if the number is already taken; nothing is stored
/// - Database errors if the insert fails for another reason
#[tracing::instrument(
    skip(pool, command),
    fields(inventory_number = %command.inventory_number)
)]
pub async fn handle(
    pool: SqlitePool,
    command: CreateExhibitCommand,
) -> Result<Exhibit, CreateExhibitError> {
    command.validate()?;

    let now = Utc::now();
    let sql = format!(
        r#"
        INSERT INTO exhibits (
            inventory_number, name, description, acquisition_date, status,
            current_location, category, author, creation_date, material, dimensions,
            created_at, updated_at
        )
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?12)
        RETURNING {}
        "#,
        EXHIBIT_COLUMNS
    );

    let exhibit = sqlx::query_as::<_, Exhibit>(&sql)
        .bind(command.inventory_number.trim())
        .bind(&command.name)
        .bind(&command.description)
        .bind(command.acquisition_date)
        .bind(command.status.unwrap_or_default())
        .bind(&command.current_location)
        .bind(&command.category)
        .bind(&command.author)
        .bind(&command.creation_date)
        .bind(&command.material)
        .bind(&command.dimensions)
        .bind(now)
        .fetch_one(&pool)
        .await
        .map_err(|e| {
            map_unique_violation(
                e,
                CreateExhibitError::DuplicateInventoryNumber(command.inventory_number.clone()),
                CreateExhibitError::Database,
            )
        })?;

    tracing::info!(exhibit_id = exhibit.id, status = %exhibit.status, "Exhibit created");

    Ok(exhibit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{exhibit_command, test_pool};

    #[tokio::test]
    async fn test_create_defaults_to_storage_and_writes_no_history() {
        let pool = test_pool().await;
        let mut command = exhibit_command("MK-1", ExhibitStatus::OnDisplay);
        command.status = None;

        let exhibit = handle(pool.clone(), command).await.unwrap();
        assert_eq!(exhibit.status, ExhibitStatus::InStorage);
        assert_eq!(exhibit.created_at, exhibit.updated_at);

        let (logs,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM exhibit_logs")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(logs, 0);
    }

    #[tokio::test]
    async fn test_duplicate_inventory_number_rejected() {
        let pool = test_pool().await;
        handle(pool.clone(), exhibit_command("MK-7", ExhibitStatus::OnDisplay))
            .await
            .unwrap();

        let mut second = exhibit_command("MK-7", ExhibitStatus::InStorage);
        second.name = "Another".to_string();
        let err = handle(pool.clone(), second).await.unwrap_err();
        assert!(matches!(err, CreateExhibitError::DuplicateInventoryNumber(ref n) if n == "MK-7"));

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM exhibits")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_validation_rejects_blank_and_long_fields() {
        let mut command = exhibit_command("MK-8", ExhibitStatus::OnDisplay);
        command.description = "  ".to_string();
        assert!(matches!(
            command.validate(),
            Err(CreateExhibitError::Validation(FieldValidationError::Required {
                field: "description"
            }))
        ));

        let mut command = exhibit_command("MK-8", ExhibitStatus::OnDisplay);
        command.inventory_number = "X".repeat(101);
        assert!(matches!(
            command.validate(),
            Err(CreateExhibitError::Validation(FieldValidationError::TooLong { .. }))
        ));
    }
}
