//! Exhibit history
//!
//! Every status or location change of an exhibit is recorded as an immutable
//! log entry. The decision of whether (and how) a save is recorded lives in
//! [`classifier`]; [`queries`] appends entries inside the caller's
//! transaction and serves the read paths.
//!
//! # Example
//!
//! ```no_run
//! use museum_server::audit::{classify, Placement};
//! use museum_server::models::ExhibitStatus;
//!
//! let event = classify(
//!     Placement::new(ExhibitStatus::InStorage, "Vault B"),
//!     Placement::new(ExhibitStatus::InRestoration, "Workshop"),
//! );
//! assert!(event.is_some());
//! ```

pub mod classifier;
pub mod models;
pub mod queries;

pub use classifier::{classify, Placement};
pub use models::{ChangeEvent, LogAction, LogEntry, LogEntryView, LogQuery, RECENT_HISTORY_LIMIT};
pub use queries::{append_log_entry, get_log_entry, list_log_entries, recent_for_exhibit};
