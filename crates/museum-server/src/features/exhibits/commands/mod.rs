pub mod bulk_status;
pub mod create;
pub mod delete;
pub mod update;

pub use bulk_status::{BulkAction, BulkStatusCommand, BulkStatusError, BulkStatusResponse};
pub use create::{CreateExhibitCommand, CreateExhibitError};
pub use delete::{DeleteExhibitError, DeleteExhibitResponse};
pub use update::{UpdateExhibitCommand, UpdateExhibitError, UpdateExhibitResponse};
