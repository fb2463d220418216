//! JSON storage implementation for the payment history.

mod repository;

pub use repository::HistoryRepository;
