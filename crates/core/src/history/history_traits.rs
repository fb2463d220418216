use crate::errors::Result;
use crate::history::history_model::HistoryEntry;
use crate::payments::PaymentRecord;

/// Trait for history persistence.
///
/// The whole list is read and written at once; it lives under a single
/// storage key.
pub trait HistoryRepositoryTrait: Send + Sync {
    /// Loads entries in stored order.
    fn load_entries(&self) -> Result<Vec<HistoryEntry>>;
    fn save_entries(&self, entries: &[HistoryEntry]) -> Result<()>;
}

/// Trait for history service operations
pub trait HistoryServiceTrait: Send + Sync {
    /// Entries, most recent first.
    fn list(&self) -> Result<Vec<HistoryEntry>>;
    fn get(&self, id: &str) -> Result<HistoryEntry>;
    /// Validates and stores a snapshot of `record`.
    fn save(&self, record: &PaymentRecord) -> Result<HistoryEntry>;
    fn append(&self, entry: HistoryEntry) -> Result<HistoryEntry>;
    /// Returns whether an entry with `id` existed.
    fn remove(&self, id: &str) -> Result<bool>;
}
