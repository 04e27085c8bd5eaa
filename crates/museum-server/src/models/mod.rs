//! Catalog records as stored in the database

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Where an exhibit currently is, in lifecycle terms
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExhibitStatus {
    OnDisplay,
    InRestoration,
    #[default]
    InStorage,
    OnLoan,
}

impl ExhibitStatus {
    pub const ALL: [ExhibitStatus; 4] = [
        ExhibitStatus::OnDisplay,
        ExhibitStatus::InRestoration,
        ExhibitStatus::InStorage,
        ExhibitStatus::OnLoan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExhibitStatus::OnDisplay => "ON_DISPLAY",
            ExhibitStatus::InRestoration => "IN_RESTORATION",
            ExhibitStatus::InStorage => "IN_STORAGE",
            ExhibitStatus::OnLoan => "ON_LOAN",
        }
    }

    /// Human-readable label, used in history notes
    pub fn label(&self) -> &'static str {
        match self {
            ExhibitStatus::OnDisplay => "On display",
            ExhibitStatus::InRestoration => "In restoration",
            ExhibitStatus::InStorage => "In storage",
            ExhibitStatus::OnLoan => "On loan",
        }
    }
}

impl fmt::Display for ExhibitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown exhibit status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for ExhibitStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExhibitStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// A catalogued physical item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Exhibit {
    pub id: i64,
    pub inventory_number: String,
    pub name: String,
    pub description: String,
    pub acquisition_date: NaiveDate,
    pub status: ExhibitStatus,
    pub current_location: String,
    pub category: String,
    pub author: String,
    pub creation_date: String,
    pub material: String,
    pub dimensions: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Column list matching [`Exhibit`], for `SELECT` and `RETURNING` clauses
pub const EXHIBIT_COLUMNS: &str = "id, inventory_number, name, description, acquisition_date, \
     status, current_location, category, author, creation_date, material, dimensions, \
     created_at, updated_at";

/// An image attached to an exhibit; `image` is a stored path or URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Photo {
    pub id: i64,
    pub exhibit_id: i64,
    pub image: String,
    pub caption: String,
    pub is_main: bool,
    pub uploaded_at: DateTime<Utc>,
}

pub const PHOTO_COLUMNS: &str = "id, exhibit_id, image, caption, is_main, uploaded_at";

/// Photo display order: flagged first, then most recent
pub const PHOTO_DISPLAY_ORDER: &str = "is_main DESC, uploaded_at DESC, id DESC";

/// Staff account that may be recorded as the actor of a change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Operator {
    pub id: Uuid,
    pub username: String,
    pub email: Option<String>,
    pub is_staff: bool,
    pub created_at: DateTime<Utc>,
}

pub const OPERATOR_COLUMNS: &str = "id, username, email, is_staff, created_at";
