//! Error types for nutriplan
//!
//! The calculation core is total and never returns an error. These types belong
//! to the adapters that sit in front of it (form validation, JSON, FFI).

use thiserror::Error;

/// Errors raised while validating user-supplied input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Field '{field}' is not a valid number: {value:?}")]
    NotANumber { field: &'static str, value: String },

    #[error("Field '{field}' must be positive")]
    NotPositive { field: &'static str },

    #[error("No option selected for '{field}'")]
    MissingSelection { field: &'static str },
}

/// Errors that can occur in the JSON pipeline
#[derive(Debug, Error)]
pub enum ComputeError {
    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),
}
