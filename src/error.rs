//! Error types for the non-validation paths
//!
//! Validation failures are ordinary values (see `ValidationFailure`); the
//! errors here cover configuration IO, definition parsing and lookups made
//! through the mutation API.

use thiserror::Error;

/// Errors raised while building or mutating a form
#[derive(Debug, Error)]
pub enum FormError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No field with identifier '{0}'")]
    UnknownField(String),

    #[error("No field at index {0}")]
    NoFieldAt(usize),

    #[error("Option {option} out of range ({count} options)")]
    OptionOutOfRange { option: usize, count: usize },

    #[error("Could not determine a configuration directory")]
    NoConfigDir,
}

pub type Result<T> = std::result::Result<T, FormError>;
