//! Update exhibit command
//!
//! Every change to an existing exhibit, whether from the edit endpoint or a
//! bulk action, goes through [`handle`]. Within one transaction it reads the
//! stored state, merges the requested changes, classifies the status and
//! location transition, writes the row and appends at most one history entry.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::audit::{append_log_entry, classify, LogEntry, Placement};
use crate::features::shared::validation::{
    validate_max_length, validate_not_blank, validate_required, FieldValidationError,
    AUTHOR_MAX, CATEGORY_MAX, CREATION_DATE_MAX, DIMENSIONS_MAX, LOCATION_MAX, MATERIAL_MAX,
    NAME_MAX,
};
use crate::models::{Exhibit, ExhibitStatus, EXHIBIT_COLUMNS};

/// Partial update of an exhibit; absent fields keep their stored value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateExhibitCommand {
    /// Accepted only when equal to the stored value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acquisition_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ExhibitStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
}

/// The updated exhibit and the history entry the update produced, if any
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateExhibitResponse {
    pub exhibit: Exhibit,
    pub log_entry: Option<LogEntry>,
}

/// Errors that can occur when updating an exhibit
#[derive(Debug, thiserror::Error)]
pub enum UpdateExhibitError {
    #[error("{0}")]
    Validation(#[from] FieldValidationError),

    #[error("At least one field must be provided for update")]
    NoFieldsToUpdate,

    #[error("Inventory number cannot be changed after creation")]
    InventoryNumberImmutable,

    #[error("Exhibit {0} not found")]
    NotFound(i64),

    #[error("Operator {0} does not exist")]
    UnknownOperator(Uuid),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl UpdateExhibitCommand {
    /// Shorthand for a status change, optionally with a new location
    pub fn status(status: ExhibitStatus, location: Option<String>) -> Self {
        Self {
            status: Some(status),
            current_location: location,
            ..Default::default()
        }
    }

    fn has_changes(&self) -> bool {
        self.inventory_number.is_some()
            || self.name.is_some()
            || self.description.is_some()
            || self.acquisition_date.is_some()
            || self.status.is_some()
            || self.current_location.is_some()
            || self.category.is_some()
            || self.author.is_some()
            || self.creation_date.is_some()
            || self.material.is_some()
            || self.dimensions.is_some()
    }

    /// Validates the supplied fields
    pub fn validate(&self) -> Result<(), UpdateExhibitError> {
        if !self.has_changes() {
            return Err(UpdateExhibitError::NoFieldsToUpdate);
        }
        if let Some(ref name) = self.name {
            validate_required("name", name, NAME_MAX)?;
        }
        if let Some(ref description) = self.description {
            validate_not_blank("description", description)?;
        }
        if let Some(ref location) = self.current_location {
            validate_required("current_location", location, LOCATION_MAX)?;
        }
        if let Some(ref category) = self.category {
            validate_max_length("category", category, CATEGORY_MAX)?;
        }
        if let Some(ref author) = self.author {
            validate_max_length("author", author, AUTHOR_MAX)?;
        }
        if let Some(ref creation_date) = self.creation_date {
            validate_max_length("creation_date", creation_date, CREATION_DATE_MAX)?;
        }
        if let Some(ref material) = self.material {
            validate_max_length("material", material, MATERIAL_MAX)?;
        }
        if let Some(ref dimensions) = self.dimensions {
            validate_max_length("dimensions", dimensions, DIMENSIONS_MAX)?;
        }
        Ok(())
    }

    /// Overlay the supplied fields on the stored exhibit
    fn apply_to(self, current: &Exhibit) -> Result<Exhibit, UpdateExhibitError> {
        if let Some(ref number) = self.inventory_number {
            if number.trim() != current.inventory_number {
                return Err(UpdateExhibitError::InventoryNumberImmutable);
            }
        }

        let mut next = current.clone();
        if let Some(name) = self.name {
            next.name = name;
        }
        if let Some(description) = self.description {
            next.description = description;
        }
        if let Some(date) = self.acquisition_date {
            next.acquisition_date = date;
        }
        if let Some(status) = self.status {
            next.status = status;
        }
        if let Some(location) = self.current_location {
            next.current_location = location;
        }
        if let Some(category) = self.category {
            next.category = category;
        }
        if let Some(author) = self.author {
            next.author = author;
        }
        if let Some(creation_date) = self.creation_date {
            next.creation_date = creation_date;
        }
        if let Some(material) = self.material {
            next.material = material;
        }
        if let Some(dimensions) = self.dimensions {
            next.dimensions = dimensions;
        }
        Ok(next)
    }
}

/// Handler for updating exhibits
///
/// `performed_by` is recorded on the history entry. It must name an existing
/// operator when given.
///
/// # Errors
///
/// - Validation errors, including an attempt to change the inventory number
/// - `NotFound` if the exhibit does not exist
/// - `UnknownOperator` if `performed_by` names no operator
/// - Database errors; the exhibit row and the history entry are then both
///   left untouched
#[tracing::instrument(skip(pool, command, performed_by), fields(exhibit_id = id, operator = ?performed_by))]
pub async fn handle(
    pool: SqlitePool,
    id: i64,
    command: UpdateExhibitCommand,
    performed_by: Option<Uuid>,
) -> Result<UpdateExhibitResponse, UpdateExhibitError> {
    command.validate()?;

    // Take the write lock before the first read so concurrent saves queue on
    // the busy timeout instead of failing to upgrade a shared lock.
    let mut tx = pool.begin_with("BEGIN IMMEDIATE").await?;

    if let Some(operator_id) = performed_by {
        let known: Option<i64> = sqlx::query_scalar("SELECT 1 FROM operators WHERE id = ?1")
            .bind(operator_id)
            .fetch_optional(&mut *tx)
            .await?;
        if known.is_none() {
            return Err(UpdateExhibitError::UnknownOperator(operator_id));
        }
    }

    let select_sql = format!("SELECT {} FROM exhibits WHERE id = ?1", EXHIBIT_COLUMNS);
    let current = sqlx::query_as::<_, Exhibit>(&select_sql)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(UpdateExhibitError::NotFound(id))?;

    let next = command.apply_to(&current)?;

    let event = classify(
        Placement::new(current.status, &current.current_location),
        Placement::new(next.status, &next.current_location),
    );

    let update_sql = format!(
        r#"
        UPDATE exhibits
        SET name = ?2, description = ?3, acquisition_date = ?4, status = ?5,
            current_location = ?6, category = ?7, author = ?8, creation_date = ?9,
            material = ?10, dimensions = ?11, updated_at = ?12
        WHERE id = ?1
        RETURNING {}
        "#,
        EXHIBIT_COLUMNS
    );
    let exhibit = sqlx::query_as::<_, Exhibit>(&update_sql)
        .bind(id)
        .bind(&next.name)
        .bind(&next.description)
        .bind(next.acquisition_date)
        .bind(next.status)
        .bind(&next.current_location)
        .bind(&next.category)
        .bind(&next.author)
        .bind(&next.creation_date)
        .bind(&next.material)
        .bind(&next.dimensions)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

    let log_entry = match event {
        Some(ref event) => Some(append_log_entry(&mut *tx, id, event, performed_by).await?),
        None => None,
    };

    tx.commit().await?;

    tracing::info!(
        status = %exhibit.status,
        logged = log_entry.as_ref().map(|entry| entry.action.as_str()),
        "Exhibit updated"
    );

    Ok(UpdateExhibitResponse { exhibit, log_entry })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{recent_for_exhibit, LogAction};
    use crate::features::shared::test_helpers::{insert_exhibit, insert_operator, test_pool};

    async fn log_count(pool: &SqlitePool, exhibit_id: i64) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM exhibit_logs WHERE exhibit_id = ?1")
            .bind(exhibit_id)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_metadata_only_update_writes_no_history() {
        let pool = test_pool().await;
        let exhibit = insert_exhibit(&pool, "A-1", ExhibitStatus::OnDisplay).await;

        let response = handle(
            pool.clone(),
            exhibit.id,
            UpdateExhibitCommand {
                name: Some("Renamed".to_string()),
                material: Some("Bronze".to_string()),
                status: Some(ExhibitStatus::OnDisplay),
                current_location: Some("Hall 1".to_string()),
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap();

        assert_eq!(response.exhibit.name, "Renamed");
        assert_eq!(response.exhibit.material, "Bronze");
        assert!(response.exhibit.updated_at >= exhibit.updated_at);
        assert!(response.log_entry.is_none());
        assert_eq!(log_count(&pool, exhibit.id).await, 0);
    }

    #[tokio::test]
    async fn test_storage_to_restoration_records_operator() {
        let pool = test_pool().await;
        let exhibit = insert_exhibit(&pool, "A-2", ExhibitStatus::InStorage).await;
        let operator = insert_operator(&pool, "restorer").await;

        let response = handle(
            pool.clone(),
            exhibit.id,
            UpdateExhibitCommand::status(ExhibitStatus::InRestoration, None),
            Some(operator.id),
        )
        .await
        .unwrap();

        let entry = response.log_entry.unwrap();
        assert_eq!(entry.action, LogAction::SentToRestoration);
        assert_eq!(entry.from_status, Some(ExhibitStatus::InStorage));
        assert_eq!(entry.to_status, Some(ExhibitStatus::InRestoration));
        assert_eq!(entry.from_location, "Hall 1");
        assert_eq!(entry.to_location, "Hall 1");
        assert_eq!(entry.performed_by, Some(operator.id));
        assert_eq!(
            entry.notes,
            "Status changed from \"In storage\" to \"In restoration\""
        );
        assert_eq!(log_count(&pool, exhibit.id).await, 1);
    }

    #[tokio::test]
    async fn test_status_and_location_change_yields_single_entry() {
        let pool = test_pool().await;
        let exhibit = insert_exhibit(&pool, "A-3", ExhibitStatus::InRestoration).await;

        let response = handle(
            pool.clone(),
            exhibit.id,
            UpdateExhibitCommand::status(ExhibitStatus::OnDisplay, Some("Hall 3".to_string())),
            None,
        )
        .await
        .unwrap();

        let entry = response.log_entry.unwrap();
        assert_eq!(entry.action, LogAction::ReturnedFromRestoration);
        assert_eq!(entry.to_location, "Hall 3");
        assert_eq!(entry.performed_by, None);
        assert_eq!(log_count(&pool, exhibit.id).await, 1);
    }

    #[tokio::test]
    async fn test_loan_to_storage() {
        let pool = test_pool().await;
        let exhibit = insert_exhibit(&pool, "A-4", ExhibitStatus::OnLoan).await;

        let response = handle(
            pool.clone(),
            exhibit.id,
            UpdateExhibitCommand::status(ExhibitStatus::InStorage, Some("Vault".to_string())),
            None,
        )
        .await
        .unwrap();

        assert_eq!(response.log_entry.unwrap().action, LogAction::SentToStorage);
    }

    #[tokio::test]
    async fn test_location_only_change() {
        let pool = test_pool().await;
        let exhibit = insert_exhibit(&pool, "A-5", ExhibitStatus::OnDisplay).await;

        handle(
            pool.clone(),
            exhibit.id,
            UpdateExhibitCommand {
                current_location: Some("Hall 2".to_string()),
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap();

        let history = recent_for_exhibit(&pool, exhibit.id, 10).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].action, LogAction::LocationChange);
        assert_eq!(
            history[0].notes,
            "Location changed from \"Hall 1\" to \"Hall 2\""
        );
    }

    #[tokio::test]
    async fn test_unknown_operator_rolls_back() {
        let pool = test_pool().await;
        let exhibit = insert_exhibit(&pool, "A-6", ExhibitStatus::OnDisplay).await;

        let err = handle(
            pool.clone(),
            exhibit.id,
            UpdateExhibitCommand::status(ExhibitStatus::OnLoan, None),
            Some(Uuid::new_v4()),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, UpdateExhibitError::UnknownOperator(_)));

        let status: ExhibitStatus = sqlx::query_scalar("SELECT status FROM exhibits WHERE id = ?1")
            .bind(exhibit.id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(status, ExhibitStatus::OnDisplay);
        assert_eq!(log_count(&pool, exhibit.id).await, 0);
    }

    #[tokio::test]
    async fn test_missing_exhibit_and_immutable_number() {
        let pool = test_pool().await;
        let err = handle(
            pool.clone(),
            404,
            UpdateExhibitCommand::status(ExhibitStatus::OnLoan, None),
            None,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, UpdateExhibitError::NotFound(404)));

        let exhibit = insert_exhibit(&pool, "A-7", ExhibitStatus::OnDisplay).await;
        let err = handle(
            pool.clone(),
            exhibit.id,
            UpdateExhibitCommand {
                inventory_number: Some("A-8".to_string()),
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, UpdateExhibitError::InventoryNumberImmutable));

        let same = handle(
            pool.clone(),
            exhibit.id,
            UpdateExhibitCommand {
                inventory_number: Some("A-7".to_string()),
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap();
        assert_eq!(same.exhibit.inventory_number, "A-7");
    }

    #[test]
    fn test_empty_command_rejected() {
        assert!(matches!(
            UpdateExhibitCommand::default().validate(),
            Err(UpdateExhibitError::NoFieldsToUpdate)
        ));
    }
}
