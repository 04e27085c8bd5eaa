//! Change classification
//!
//! Decides whether saving an exhibit produces a history entry and of which
//! kind. Only status and location are considered; edits to any other field
//! never produce an entry.
//!
//! When the status changed, the first matching rule wins:
//!
//! 1. new status is `IN_RESTORATION` -> `SENT_TO_RESTORATION`
//! 2. old status `IN_RESTORATION`, new `ON_DISPLAY` -> `RETURNED_FROM_RESTORATION`
//! 3. new status is `IN_STORAGE` -> `SENT_TO_STORAGE`
//! 4. new status is `ON_LOAN` -> `SENT_ON_LOAN`
//! 5. old status was `ON_LOAN` -> `RETURNED_FROM_LOAN`
//! 6. anything else -> `STATUS_CHANGE`
//!
//! A location-only change yields `LOCATION_CHANGE`. A change to both fields
//! yields a single status-kind entry carrying both locations.

use super::models::{ChangeEvent, LogAction};
use crate::models::ExhibitStatus;

/// The part of an exhibit's state that the history log tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement<'a> {
    pub status: ExhibitStatus,
    pub location: &'a str,
}

impl<'a> Placement<'a> {
    pub fn new(status: ExhibitStatus, location: &'a str) -> Self {
        Self { status, location }
    }
}

/// Classify the transition from `previous` to `pending`
///
/// Returns `None` when neither status nor location differs.
pub fn classify(previous: Placement<'_>, pending: Placement<'_>) -> Option<ChangeEvent> {
    if previous.status != pending.status {
        let action = status_action(previous.status, pending.status);
        return Some(ChangeEvent {
            action,
            from_status: previous.status,
            to_status: pending.status,
            from_location: previous.location.to_string(),
            to_location: pending.location.to_string(),
            notes: format!(
                "Status changed from \"{}\" to \"{}\"",
                previous.status.label(),
                pending.status.label()
            ),
        });
    }

    if previous.location != pending.location {
        return Some(ChangeEvent {
            action: LogAction::LocationChange,
            from_status: previous.status,
            to_status: pending.status,
            from_location: previous.location.to_string(),
            to_location: pending.location.to_string(),
            notes: format!(
                "Location changed from \"{}\" to \"{}\"",
                previous.location, pending.location
            ),
        });
    }

    None
}

fn status_action(previous: ExhibitStatus, pending: ExhibitStatus) -> LogAction {
    use ExhibitStatus::*;

    match (previous, pending) {
        (_, InRestoration) => LogAction::SentToRestoration,
        (InRestoration, OnDisplay) => LogAction::ReturnedFromRestoration,
        (_, InStorage) => LogAction::SentToStorage,
        (_, OnLoan) => LogAction::SentOnLoan,
        (OnLoan, _) => LogAction::ReturnedFromLoan,
        _ => LogAction::StatusChange,
    }
}
