//! History module - saved payment snapshots, service, and traits.

mod history_model;
mod history_service;
mod history_traits;

#[cfg(test)]
mod history_service_tests;

pub use history_model::HistoryEntry;
pub use history_service::HistoryService;
pub use history_traits::{HistoryRepositoryTrait, HistoryServiceTrait};
