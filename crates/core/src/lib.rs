//! rentslip Core - Domain entities, calculator, services, and traits.
//!
//! This crate contains the business logic for rentslip: the payment
//! breakdown calculator, the form layer that feeds it, the history service
//! and the exporters. It is storage-agnostic and defines traits that are
//! implemented by the `storage-json` crate.

pub mod constants;
pub mod errors;
pub mod export;
pub mod history;
pub mod payments;
pub mod utils;

// Re-export the calculator surface
pub use payments::{compute_breakdown, PaymentBreakdown, PaymentForm, PaymentRecord};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
