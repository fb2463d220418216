#[cfg(test)]
mod tests {
    use crate::errors::{Error, Result, ValidationError};
    use crate::history::{
        HistoryEntry, HistoryRepositoryTrait, HistoryService, HistoryServiceTrait,
    };
    use crate::payments::{compute_breakdown, PaymentRecord};
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};

    // --- Mock HistoryRepository ---
    #[derive(Clone, Default)]
    struct MockHistoryRepository {
        entries: Arc<Mutex<Vec<HistoryEntry>>>,
        writes: Arc<Mutex<usize>>,
    }

    impl MockHistoryRepository {
        fn stored(&self) -> Vec<HistoryEntry> {
            self.entries.lock().unwrap().clone()
        }

        fn write_count(&self) -> usize {
            *self.writes.lock().unwrap()
        }
    }

    impl HistoryRepositoryTrait for MockHistoryRepository {
        fn load_entries(&self) -> Result<Vec<HistoryEntry>> {
            Ok(self.entries.lock().unwrap().clone())
        }

        fn save_entries(&self, entries: &[HistoryEntry]) -> Result<()> {
            *self.entries.lock().unwrap() = entries.to_vec();
            *self.writes.lock().unwrap() += 1;
            Ok(())
        }
    }

    fn setup() -> (MockHistoryRepository, HistoryService) {
        let repository = MockHistoryRepository::default();
        let service = HistoryService::new(Arc::new(repository.clone()));
        (repository, service)
    }

    fn sample_record() -> PaymentRecord {
        PaymentRecord {
            property_name: "Apartamento Centro".to_string(),
            tenant_name: "João Silva".to_string(),
            month: "2024-03".to_string(),
            rent_value: dec!(1500),
            condo_fee: dec!(300),
            water_fee: dec!(50),
            electricity_bill: dec!(120),
            property_tax: dec!(1200),
            is_property_tax_monthly: false,
            management_fee: dec!(150),
            ..PaymentRecord::default()
        }
    }

    fn entry_at(id: &str, millis: i64) -> HistoryEntry {
        HistoryEntry {
            id: id.to_string(),
            date: Utc.timestamp_millis_opt(millis).unwrap(),
            total: dec!(10.00),
            payment_data: PaymentRecord::default(),
        }
    }

    #[test]
    fn test_save_stores_snapshot_and_total() {
        let (repository, service) = setup();
        let record = sample_record();

        let entry = service.save(&record).unwrap();

        assert_eq!(entry.total, dec!(1920.00));
        assert_eq!(entry.payment_data, record);
        assert!(!entry.id.is_empty());
        assert_eq!(repository.stored(), vec![entry]);
    }

    #[test]
    fn test_save_accepts_either_name() {
        let (_, service) = setup();

        let tenant_only = PaymentRecord {
            tenant_name: "Maria".to_string(),
            ..PaymentRecord::default()
        };
        let property_only = PaymentRecord {
            property_name: "Casa 2".to_string(),
            ..PaymentRecord::default()
        };

        assert!(service.save(&tenant_only).is_ok());
        assert!(service.save(&property_only).is_ok());
        assert_eq!(service.list().unwrap().len(), 2);
    }

    #[test]
    fn test_save_without_names_is_refused() {
        let (repository, service) = setup();
        let record = PaymentRecord {
            property_name: "   ".to_string(),
            rent_value: dec!(1000),
            ..PaymentRecord::default()
        };

        let err = service.save(&record).unwrap_err();

        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingPartyName)
        ));
        assert!(err.is_user_facing());
        assert!(repository.stored().is_empty());
        assert_eq!(repository.write_count(), 0);
    }

    #[test]
    fn test_saved_ids_are_unique() {
        let (_, service) = setup();
        let record = sample_record();

        let ids: std::collections::HashSet<String> = (0..50)
            .map(|_| service.save(&record).unwrap().id)
            .collect();

        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_list_is_most_recent_first() {
        let (_, service) = setup();
        service.append(entry_at("old", 1_000)).unwrap();
        service.append(entry_at("new", 3_000)).unwrap();
        service.append(entry_at("middle", 2_000)).unwrap();

        let ids: Vec<String> = service.list().unwrap().into_iter().map(|e| e.id).collect();

        assert_eq!(ids, vec!["new", "middle", "old"]);
    }

    #[test]
    fn test_list_keeps_stored_order_for_same_instant() {
        let (_, service) = setup();
        service.append(entry_at("first", 5_000)).unwrap();
        service.append(entry_at("second", 5_000)).unwrap();

        let ids: Vec<String> = service.list().unwrap().into_iter().map(|e| e.id).collect();

        assert_eq!(ids, vec!["second", "first"]);
    }

    #[test]
    fn test_append_rejects_duplicate_id() {
        let (_, service) = setup();
        service.append(entry_at("dup", 1_000)).unwrap();

        let err = service.append(entry_at("dup", 2_000)).unwrap_err();

        assert!(matches!(err, Error::ConstraintViolation(_)));
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_get_and_remove() {
        let (repository, service) = setup();
        let saved = service.save(&sample_record()).unwrap();

        assert_eq!(service.get(&saved.id).unwrap(), saved);
        assert!(service.remove(&saved.id).unwrap());
        assert!(matches!(service.get(&saved.id), Err(Error::NotFound(_))));
        assert!(repository.stored().is_empty());
    }

    #[test]
    fn test_remove_unknown_id_does_not_write() {
        let (repository, service) = setup();
        service.save(&sample_record()).unwrap();
        let writes = repository.write_count();

        assert!(!service.remove("missing").unwrap());
        assert_eq!(repository.write_count(), writes);
        assert_eq!(repository.stored().len(), 1);
    }

    #[test]
    fn test_stored_snapshot_reproduces_total() {
        let (_, service) = setup();
        let saved = service.save(&sample_record()).unwrap();

        let reloaded = service.get(&saved.id).unwrap();

        assert_eq!(compute_breakdown(&reloaded.payment_data).total, saved.total);
    }
}
