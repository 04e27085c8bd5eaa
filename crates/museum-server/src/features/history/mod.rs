//! Administrative view of the exhibit history log

pub mod queries;
pub mod routes;

pub use queries::HistoryQueryError;
pub use routes::history_routes;
