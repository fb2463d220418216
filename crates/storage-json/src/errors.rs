//! Storage-specific error types for the JSON file store.
//!
//! These wrap I/O and serde errors and are converted to the storage-agnostic
//! `rentslip_core::Error` before they leave this crate.

use rentslip_core::errors::Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Store file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store file is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unsupported store version {found} (expected at most {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Store lock poisoned")]
    LockPoisoned,
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::UnsupportedVersion { .. } => Error::ConstraintViolation(err.to_string()),
            other => Error::Repository(other.to_string()),
        }
    }
}

/// Extension trait for converting storage Results to core Results.
pub trait IntoCore<T> {
    fn into_core(self) -> rentslip_core::Result<T>;
}

impl<T> IntoCore<T> for std::result::Result<T, StorageError> {
    fn into_core(self) -> rentslip_core::Result<T> {
        self.map_err(Error::from)
    }
}
