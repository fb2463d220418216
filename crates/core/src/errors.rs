//! Core error types for rentslip.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! (file I/O, JSON layout) are converted to these types by the storage layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application.
///
/// The calculator and the formatters never produce one of these; they degrade
/// bad input to zero. Errors only come out of the history store, the save
/// gate and configuration loading.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Informe o nome do imóvel ou do locatário para salvar no histórico")]
    MissingPartyName,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// True for errors the user can fix by editing the form. These are shown
    /// as a notice and never abort the session.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

// === From implementations for common error types ===

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Repository(err.to_string())
    }
}
