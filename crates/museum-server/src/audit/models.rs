//! Exhibit history data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::features::shared::pagination::PaginationParams;
use crate::models::ExhibitStatus;

/// Number of history entries shown on the public exhibit page
pub const RECENT_HISTORY_LIMIT: i64 = 10;

/// Kind of change recorded in the history log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogAction {
    StatusChange,
    LocationChange,
    SentToRestoration,
    ReturnedFromRestoration,
    SentToStorage,
    SentOnLoan,
    ReturnedFromLoan,
    /// Never produced by the classifier; kept so stored rows of this kind stay readable
    Other,
}

impl LogAction {
    pub const ALL: [LogAction; 8] = [
        LogAction::StatusChange,
        LogAction::LocationChange,
        LogAction::SentToRestoration,
        LogAction::ReturnedFromRestoration,
        LogAction::SentToStorage,
        LogAction::SentOnLoan,
        LogAction::ReturnedFromLoan,
        LogAction::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StatusChange => "STATUS_CHANGE",
            Self::LocationChange => "LOCATION_CHANGE",
            Self::SentToRestoration => "SENT_TO_RESTORATION",
            Self::ReturnedFromRestoration => "RETURNED_FROM_RESTORATION",
            Self::SentToStorage => "SENT_TO_STORAGE",
            Self::SentOnLoan => "SENT_ON_LOAN",
            Self::ReturnedFromLoan => "RETURNED_FROM_LOAN",
            Self::Other => "OTHER",
        }
    }
}

impl std::fmt::Display for LogAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LogAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogAction::ALL
            .into_iter()
            .find(|action| action.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown log action '{}'", s))
    }
}

/// A classified status/location change, ready to be appended to the log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeEvent {
    pub action: LogAction,
    pub from_status: ExhibitStatus,
    pub to_status: ExhibitStatus,
    pub from_location: String,
    pub to_location: String,
    pub notes: String,
}

/// History entry as stored; entries are never modified after insertion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct LogEntry {
    pub id: i64,
    pub exhibit_id: i64,
    pub action: LogAction,
    pub from_status: Option<ExhibitStatus>,
    pub to_status: Option<ExhibitStatus>,
    pub from_location: String,
    pub to_location: String,
    pub timestamp: DateTime<Utc>,
    pub notes: String,
    pub performed_by: Option<Uuid>,
}

/// History entry joined with its exhibit and performer, for listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct LogEntryView {
    pub id: i64,
    pub exhibit_id: i64,
    pub inventory_number: String,
    pub exhibit_name: String,
    pub action: LogAction,
    pub from_status: Option<ExhibitStatus>,
    pub to_status: Option<ExhibitStatus>,
    pub from_location: String,
    pub to_location: String,
    pub timestamp: DateTime<Utc>,
    pub notes: String,
    pub performed_by: Option<Uuid>,
    pub performed_by_username: Option<String>,
}

/// Filters for the history listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogQuery {
    pub exhibit_id: Option<i64>,
    pub action: Option<LogAction>,
    /// Case-insensitive match on notes, inventory number and exhibit name
    pub q: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl LogQuery {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.page, self.per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_str_round_trip() {
        for action in LogAction::ALL {
            assert_eq!(action.as_str().parse::<LogAction>(), Ok(action));
            assert_eq!(action.to_string(), action.as_str());
        }
        assert!("MOVED".parse::<LogAction>().is_err());
    }

    #[test]
    fn test_action_serde_uses_stored_vocabulary() {
        assert_eq!(
            serde_json::to_string(&LogAction::ReturnedFromRestoration).unwrap(),
            "\"RETURNED_FROM_RESTORATION\""
        );
    }
}
