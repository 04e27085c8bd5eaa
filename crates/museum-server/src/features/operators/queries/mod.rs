pub mod get;
pub mod list;

pub use get::GetOperatorError;
pub use list::{ListOperatorsError, ListOperatorsQuery};
