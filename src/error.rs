//! Error types for minuta.
//!
//! The rendering pipeline itself is total and never returns these. They cover
//! the outer surface only: loading configuration, reading field dictionaries
//! and templates from disk, and reporting lint failures from the CLI.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for minuta operations.
#[derive(Error, Debug)]
pub enum MinutaError {
    /// Bad arguments, unreadable input, or invalid configuration.
    #[error("{0}")]
    UserError(String),

    /// A template failed lint checks.
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl MinutaError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            MinutaError::UserError(_) => exit_codes::USER_ERROR,
            MinutaError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
        }
    }
}

/// Result type alias for minuta operations.
pub type Result<T> = std::result::Result<T, MinutaError>;
