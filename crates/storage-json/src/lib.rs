//! JSON file storage implementation for rentslip.
//!
//! This crate provides the persistent key-value store and the repository
//! implementations of the traits defined in `rentslip-core`:
//! - a single-file JSON key-value store
//! - the payment history repository, kept under one key of that store
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!   storage-json (this crate)
//!              │
//!              ▼
//!        rentslip.json
//! ```

pub mod errors;
pub mod history;
pub mod kv;

pub use errors::StorageError;
pub use history::HistoryRepository;
pub use kv::{JsonKeyValueStore, KeyValueStore};

// Re-export from rentslip-core for convenience
pub use rentslip_core::errors::{Error, Result};
