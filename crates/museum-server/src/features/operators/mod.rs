//! Operators: staff accounts recorded as the performer of history entries

pub mod commands;
pub mod queries;
pub mod routes;

pub use commands::{
    CreateOperatorCommand, CreateOperatorError, DeleteOperatorError, DeleteOperatorResponse,
};
pub use queries::{GetOperatorError, ListOperatorsError, ListOperatorsQuery};
pub use routes::operators_routes;
