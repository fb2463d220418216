use std::sync::Arc;

use log::debug;
use rentslip_core::constants::HISTORY_STORAGE_KEY;
use rentslip_core::history::{HistoryEntry, HistoryRepositoryTrait};
use rentslip_core::Result;

use crate::kv::KeyValueStore;

/// Keeps the history as one ordered JSON array under `paymentHistory`.
pub struct HistoryRepository {
    store: Arc<dyn KeyValueStore>,
}

impl HistoryRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        HistoryRepository { store }
    }
}

impl HistoryRepositoryTrait for HistoryRepository {
    fn load_entries(&self) -> Result<Vec<HistoryEntry>> {
        match self.store.get(HISTORY_STORAGE_KEY)? {
            Some(value) => {
                let entries: Vec<HistoryEntry> = serde_json::from_value(value)?;
                debug!("Loaded {} history entries", entries.len());
                Ok(entries)
            }
            None => Ok(Vec::new()),
        }
    }

    fn save_entries(&self, entries: &[HistoryEntry]) -> Result<()> {
        let value = serde_json::to_value(entries)?;
        self.store.set(HISTORY_STORAGE_KEY, value)
    }
}
