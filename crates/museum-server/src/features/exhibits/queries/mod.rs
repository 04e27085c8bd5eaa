pub mod get;
pub mod list;

pub use get::GetExhibitError;
pub use list::{ListExhibitsError, ListExhibitsQuery};
