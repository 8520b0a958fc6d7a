//! Error types for rapport.

use thiserror::Error;

/// Errors that can occur in rapport operations.
///
/// The reminder calculator never produces these: malformed recurrence
/// falls back to the original event date instead of failing.
#[derive(Error, Debug)]
pub enum RapportError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
}

impl RapportError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        RapportError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type alias for rapport operations.
pub type RapportResult<T> = Result<T, RapportError>;
