//! Bulk status actions
//!
//! Moves a selection of exhibits to one target status. Exhibits already in the
//! target status are left alone and not counted; ids that do not exist are
//! skipped. Each changed exhibit goes through the regular update path in its
//! own transaction, so each gets its own history entry.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::update::{self, UpdateExhibitCommand, UpdateExhibitError};
use crate::features::shared::validation::{validate_required, FieldValidationError, LOCATION_MAX};
use crate::models::ExhibitStatus;

/// Upper bound on ids in a single request
pub const MAX_BULK_IDS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BulkAction {
    MoveToStorage,
    SendToRestoration,
    ReturnToDisplay,
    SendOnLoan,
}

impl BulkAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            BulkAction::MoveToStorage => "move-to-storage",
            BulkAction::SendToRestoration => "send-to-restoration",
            BulkAction::ReturnToDisplay => "return-to-display",
            BulkAction::SendOnLoan => "send-on-loan",
        }
    }

    pub fn target_status(&self) -> ExhibitStatus {
        match self {
            BulkAction::MoveToStorage => ExhibitStatus::InStorage,
            BulkAction::SendToRestoration => ExhibitStatus::InRestoration,
            BulkAction::ReturnToDisplay => ExhibitStatus::OnDisplay,
            BulkAction::SendOnLoan => ExhibitStatus::OnLoan,
        }
    }

    /// Confirmation shown to the operator, e.g. "Returned to display: 2 exhibit(s)"
    pub fn message(&self, updated: usize) -> String {
        let verb = match self {
            BulkAction::MoveToStorage => "Moved to storage",
            BulkAction::SendToRestoration => "Sent to restoration",
            BulkAction::ReturnToDisplay => "Returned to display",
            BulkAction::SendOnLoan => "Sent on loan",
        };
        format!("{}: {} exhibit(s)", verb, updated)
    }
}

impl fmt::Display for BulkAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BulkAction {
    type Err = BulkStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            BulkAction::MoveToStorage,
            BulkAction::SendToRestoration,
            BulkAction::ReturnToDisplay,
            BulkAction::SendOnLoan,
        ]
        .into_iter()
        .find(|action| action.as_str() == s)
        .ok_or_else(|| BulkStatusError::UnknownAction(s.to_string()))
    }
}

/// Request body of a bulk action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkStatusCommand {
    pub ids: Vec<i64>,
    /// New location for every changed exhibit; when absent, locations are kept
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkStatusResponse {
    pub action: BulkAction,
    pub updated: usize,
    pub updated_ids: Vec<i64>,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum BulkStatusError {
    #[error("Unknown bulk action '{0}'")]
    UnknownAction(String),

    #[error("At least one exhibit id is required")]
    NoSelection,

    #[error("At most {} exhibits can be changed at once", MAX_BULK_IDS)]
    TooManyIds,

    #[error("{0}")]
    Validation(#[from] FieldValidationError),

    #[error("{0}")]
    Update(#[from] UpdateExhibitError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl BulkStatusCommand {
    pub fn validate(&self) -> Result<(), BulkStatusError> {
        if self.ids.is_empty() {
            return Err(BulkStatusError::NoSelection);
        }
        if self.ids.len() > MAX_BULK_IDS {
            return Err(BulkStatusError::TooManyIds);
        }
        if let Some(ref location) = self.location {
            validate_required("location", location, LOCATION_MAX)?;
        }
        Ok(())
    }
}

/// Apply `action` to every selected exhibit, in request order
///
/// Duplicated ids are processed once.
#[tracing::instrument(
    skip(pool, command, performed_by),
    fields(action = %action, selected = command.ids.len())
)]
pub async fn handle(
    pool: SqlitePool,
    action: BulkAction,
    command: BulkStatusCommand,
    performed_by: Option<Uuid>,
) -> Result<BulkStatusResponse, BulkStatusError> {
    command.validate()?;

    let target = action.target_status();
    let mut seen = std::collections::HashSet::new();
    let mut updated_ids = Vec::new();

    for id in command.ids.into_iter().filter(|id| seen.insert(*id)) {
        let current: Option<ExhibitStatus> =
            sqlx::query_scalar("SELECT status FROM exhibits WHERE id = ?1")
                .bind(id)
                .fetch_optional(&pool)
                .await?;

        match current {
            None => {
                tracing::warn!(exhibit_id = id, "Skipping unknown exhibit in bulk action");
                continue;
            },
            Some(status) if status == target => continue,
            Some(_) => {},
        }

        let changes = UpdateExhibitCommand::status(target, command.location.clone());
        match update::handle(pool.clone(), id, changes, performed_by).await {
            Ok(_) => updated_ids.push(id),
            // Deleted between the status read and the update
            Err(UpdateExhibitError::NotFound(_)) => continue,
            Err(e) => return Err(e.into()),
        }
    }

    let updated = updated_ids.len();
    tracing::info!(updated, "Bulk action applied");

    Ok(BulkStatusResponse {
        action,
        updated,
        updated_ids,
        message: action.message(updated),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{recent_for_exhibit, LogAction};
    use crate::features::shared::test_helpers::{insert_exhibit, insert_operator, test_pool};

    #[tokio::test]
    async fn test_return_to_display_counts_only_changed() {
        let pool = test_pool().await;
        let a = insert_exhibit(&pool, "B-1", ExhibitStatus::InStorage).await;
        let b = insert_exhibit(&pool, "B-2", ExhibitStatus::InRestoration).await;
        let c = insert_exhibit(&pool, "B-3", ExhibitStatus::OnDisplay).await;
        let operator = insert_operator(&pool, "admin").await;

        let response = handle(
            pool.clone(),
            BulkAction::ReturnToDisplay,
            BulkStatusCommand {
                ids: vec![a.id, b.id, c.id],
                location: None,
            },
            Some(operator.id),
        )
        .await
        .unwrap();

        assert_eq!(response.updated, 2);
        assert_eq!(response.updated_ids, vec![a.id, b.id]);
        assert_eq!(response.message, "Returned to display: 2 exhibit(s)");

        let a_history = recent_for_exhibit(&pool, a.id, 10).await.unwrap();
        assert_eq!(a_history.len(), 1);
        assert_eq!(a_history[0].action, LogAction::StatusChange);
        assert_eq!(a_history[0].performed_by, Some(operator.id));

        let b_history = recent_for_exhibit(&pool, b.id, 10).await.unwrap();
        assert_eq!(b_history[0].action, LogAction::ReturnedFromRestoration);
        assert_eq!(b_history[0].to_location, "Hall 1");

        assert!(recent_for_exhibit(&pool, c.id, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_and_duplicate_ids_are_skipped() {
        let pool = test_pool().await;
        let a = insert_exhibit(&pool, "B-4", ExhibitStatus::OnDisplay).await;

        let response = handle(
            pool.clone(),
            BulkAction::SendOnLoan,
            BulkStatusCommand {
                ids: vec![9999, a.id, a.id],
                location: Some("Partner museum".to_string()),
            },
            None,
        )
        .await
        .unwrap();

        assert_eq!(response.updated, 1);
        assert_eq!(response.message, "Sent on loan: 1 exhibit(s)");

        let history = recent_for_exhibit(&pool, a.id, 10).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].action, LogAction::SentOnLoan);
        assert_eq!(history[0].to_location, "Partner museum");
    }

    #[tokio::test]
    async fn test_empty_selection_rejected() {
        let pool = test_pool().await;
        let err = handle(
            pool,
            BulkAction::MoveToStorage,
            BulkStatusCommand {
                ids: vec![],
                location: None,
            },
            None,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, BulkStatusError::NoSelection));
    }

    #[test]
    fn test_action_parsing_and_messages() {
        assert_eq!(
            "send-to-restoration".parse::<BulkAction>().unwrap(),
            BulkAction::SendToRestoration
        );
        assert!(matches!(
            "burn".parse::<BulkAction>(),
            Err(BulkStatusError::UnknownAction(_))
        ));
        assert_eq!(BulkAction::MoveToStorage.message(0), "Moved to storage: 0 exhibit(s)");
        assert_eq!(
            BulkAction::SendToRestoration.target_status(),
            ExhibitStatus::InRestoration
        );
    }
}
