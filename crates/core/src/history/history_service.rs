use log::{debug, info, warn};
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use super::history_model::HistoryEntry;
use super::history_traits::{HistoryRepositoryTrait, HistoryServiceTrait};
use crate::errors::{Error, Result, ValidationError};
use crate::payments::{compute_breakdown, PaymentRecord};

/// Service for the saved-payment history.
///
/// Every call loads the list from the repository and every mutation writes it
/// back, so there is no cached state to go stale between commands.
pub struct HistoryService {
    repository: Arc<dyn HistoryRepositoryTrait>,
}

impl HistoryService {
    pub fn new(repository: Arc<dyn HistoryRepositoryTrait>) -> Self {
        HistoryService { repository }
    }

    fn new_entry_id() -> String {
        Uuid::now_v7().to_string()
    }
}

impl HistoryServiceTrait for HistoryService {
    fn list(&self) -> Result<Vec<HistoryEntry>> {
        let mut entries = self.repository.load_entries()?;
        // Stable sort: entries saved in the same millisecond keep stored order.
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(entries)
    }

    fn get(&self, id: &str) -> Result<HistoryEntry> {
        self.repository
            .load_entries()?
            .into_iter()
            .find(|entry| entry.id == id)
            .ok_or_else(|| Error::NotFound(format!("History entry '{}'", id)))
    }

    fn save(&self, record: &PaymentRecord) -> Result<HistoryEntry> {
        if !record.has_party_name() {
            warn!("Refusing to save payment without property or tenant name");
            return Err(ValidationError::MissingPartyName.into());
        }

        let breakdown = compute_breakdown(record);
        let entry = HistoryEntry {
            id: Self::new_entry_id(),
            date: Utc::now(),
            total: breakdown.total,
            payment_data: record.clone(),
        };

        let saved = self.append(entry)?;
        info!(
            "Saved payment {} for '{}' ({}), total {}",
            saved.id, saved.payment_data.property_name, saved.payment_data.month, saved.total
        );
        Ok(saved)
    }

    fn append(&self, entry: HistoryEntry) -> Result<HistoryEntry> {
        let mut entries = self.repository.load_entries()?;
        if entries.iter().any(|existing| existing.id == entry.id) {
            return Err(Error::ConstraintViolation(format!(
                "History entry '{}' already exists",
                entry.id
            )));
        }

        entries.insert(0, entry.clone());
        self.repository.save_entries(&entries)?;
        debug!("History now holds {} entries", entries.len());
        Ok(entry)
    }

    fn remove(&self, id: &str) -> Result<bool> {
        let mut entries = self.repository.load_entries()?;
        let before = entries.len();
        entries.retain(|entry| entry.id != id);

        if entries.len() == before {
            debug!("No history entry '{}' to remove", id);
            return Ok(false);
        }

        self.repository.save_entries(&entries)?;
        info!("Removed history entry {}", id);
        Ok(true)
    }
}
