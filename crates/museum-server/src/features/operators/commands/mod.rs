pub mod create;
pub mod delete;

pub use create::{CreateOperatorCommand, CreateOperatorError};
pub use delete::{DeleteOperatorError, DeleteOperatorResponse};
