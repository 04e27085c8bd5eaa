//! Shared validation utilities
//!
//! Field limits are counted in characters, not bytes, so that names in any
//! script get the same allowance.
//!
//! # Examples
//!
//! ```rust,ignore
//! use museum_server::features::shared::validation::{validate_required, validate_max_length};
//!
//! validate_required("name", &command.name, 255)?;
//! validate_max_length("category", &command.category, 100)?;
//! ```

use thiserror::Error;

pub const INVENTORY_NUMBER_MAX: usize = 100;
pub const NAME_MAX: usize = 255;
pub const LOCATION_MAX: usize = 255;
pub const CATEGORY_MAX: usize = 100;
pub const AUTHOR_MAX: usize = 255;
pub const CREATION_DATE_MAX: usize = 100;
pub const MATERIAL_MAX: usize = 255;
pub const DIMENSIONS_MAX: usize = 255;
pub const IMAGE_MAX: usize = 500;
pub const CAPTION_MAX: usize = 255;
pub const USERNAME_MAX: usize = 150;

/// Errors that can occur during field validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldValidationError {
    #[error("{field} is required and cannot be empty")]
    Required { field: &'static str },

    #[error("{field} must be at most {max_length} characters")]
    TooLong {
        field: &'static str,
        max_length: usize,
    },
}

/// Validate a mandatory text field
///
/// # Rules
/// - Must not be empty after trimming whitespace
/// - Must not exceed `max_length` characters
pub fn validate_required(
    field: &'static str,
    value: &str,
    max_length: usize,
) -> Result<(), FieldValidationError> {
    if value.trim().is_empty() {
        return Err(FieldValidationError::Required { field });
    }
    validate_max_length(field, value, max_length)
}

/// Validate an optional text field that may be empty
pub fn validate_max_length(
    field: &'static str,
    value: &str,
    max_length: usize,
) -> Result<(), FieldValidationError> {
    if value.chars().count() > max_length {
        return Err(FieldValidationError::TooLong { field, max_length });
    }
    Ok(())
}

/// Validate an unbounded mandatory text field such as a description
pub fn validate_not_blank(field: &'static str, value: &str) -> Result<(), FieldValidationError> {
    if value.trim().is_empty() {
        return Err(FieldValidationError::Required { field });
    }
    Ok(())
}
