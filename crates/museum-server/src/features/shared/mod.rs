//! Shared utilities for feature modules
//!
//! - `pagination`: page parameters, metadata and the forgiving catalog page lookup
//! - `validation`: field length and presence checks
//! - `error_helpers`: constraint violation detection

pub mod error_helpers;
pub mod pagination;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;

pub use pagination::{resolve_page, Paginated, PaginationMetadata, PaginationParams};
pub use validation::FieldValidationError;
