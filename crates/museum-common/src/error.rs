//! Error types shared across the museum workspace

use thiserror::Error;

/// Result type alias for shared operations
pub type Result<T> = std::result::Result<T, MuseumError>;

/// Errors raised by the shared plumbing (configuration parsing, logging setup)
#[derive(Error, Debug)]
pub enum MuseumError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl MuseumError {
    /// Shorthand for an invalid configuration value
    pub fn invalid_value(key: &str, value: &str) -> Self {
        Self::Config(format!("invalid value '{}' for {}", value, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message() {
        let err = MuseumError::invalid_value("LOG_LEVEL", "loud");
        assert_eq!(
            err.to_string(),
            "Configuration error: invalid value 'loud' for LOG_LEVEL"
        );
    }
}
