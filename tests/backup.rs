#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use logicheck::db::record_store::RecordStore;
    use logicheck::db::store::MemoryStore;
    use logicheck::libs::backup::{parse_backup, Backup};
    use logicheck::libs::config::StorageConfig;
    use logicheck::libs::error::BackupError;
    use logicheck::libs::manual::{DriverType, ManualReason, NewManualEntry};
    use logicheck::libs::record::NewVehicle;
    use test_context::{test_context, TestContext};

    struct BackupTestContext {
        store: RecordStore<MemoryStore>,
    }

    impl TestContext for BackupTestContext {
        fn setup() -> Self {
            let mut store = RecordStore::load(MemoryStore::new(), StorageConfig::default()).unwrap();
            let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
            store.add_day(date).unwrap();
            store.add_vehicle(date, NewVehicle::parse("ABC1234", "John", "5").unwrap()).unwrap();
            let input = NewManualEntry::parse("Maria", "XYZ9876", DriverType::Telog, 10, 4, ManualReason::NotDone).unwrap();
            store.add_manual_entry(date, input).unwrap();
            store.update_profile(Some("Ana Souza".to_string()), Some("ana@example.com".to_string())).unwrap();
            BackupTestContext { store }
        }
    }

    fn empty_store() -> RecordStore<MemoryStore> {
        RecordStore::load(MemoryStore::new(), StorageConfig::default()).unwrap()
    }

    #[test_context(BackupTestContext)]
    #[test]
    fn test_round_trip_reproduces_state(ctx: &mut BackupTestContext) {
        let json = ctx.store.backup().to_json().unwrap();

        let mut target = empty_store();
        target.restore(parse_backup(json.as_bytes()).unwrap()).unwrap();

        assert_eq!(target.days(), ctx.store.days());
        assert_eq!(target.manual_entries(), ctx.store.manual_entries());
        assert_eq!(target.profile(), ctx.store.profile());
    }

    #[test_context(BackupTestContext)]
    #[test]
    fn test_document_shape(ctx: &mut BackupTestContext) {
        let json = ctx.store.backup().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value["days"].is_array());
        assert!(value["manualEntries"].is_array());
        assert_eq!(value["profile"]["name"], "Ana Souza");
        assert_eq!(value["days"][0]["records"][0]["invoiceCount"], 5);
        assert_eq!(value["manualEntries"][0]["reworkTimeMinutes"], 8);
        // pretty-printed
        assert!(json.contains('\n'));
    }

    #[test_context(BackupTestContext)]
    #[test]
    fn test_legacy_array_keeps_profile(ctx: &mut BackupTestContext) {
        let legacy = br#"[{"date":"2024-12-01","records":[{"id":"x","plate":"AAA-0000","driver":"Old","invoiceCount":1,"timestamp":1}]}]"#;
        ctx.store.restore(parse_backup(legacy).unwrap()).unwrap();

        assert_eq!(ctx.store.days().len(), 1);
        assert_eq!(ctx.store.days()[0].records[0].driver, "Old");
        assert!(ctx.store.manual_entries().is_empty());
        assert_eq!(ctx.store.profile().name, "Ana Souza");
    }

    #[test_context(BackupTestContext)]
    #[test]
    fn test_malformed_backup_leaves_state(ctx: &mut BackupTestContext) {
        let before = ctx.store.days().to_vec();
        let result = parse_backup(b"{\"days\": [");
        assert!(matches!(result, Err(BackupError::Malformed(_))));
        assert_eq!(ctx.store.days(), before.as_slice());
    }

    #[test_context(BackupTestContext)]
    #[test]
    fn test_restore_persists_through_store(ctx: &mut BackupTestContext) {
        let json = ctx.store.backup().to_json().unwrap();

        let mut target = empty_store();
        target.restore(parse_backup(json.as_bytes()).unwrap()).unwrap();

        let reloaded = RecordStore::load(target.into_inner(), StorageConfig::default()).unwrap();
        assert_eq!(reloaded.days(), ctx.store.days());
        assert_eq!(reloaded.profile().email, "ana@example.com");
    }

    #[test_context(BackupTestContext)]
    #[test]
    fn test_duplicate_days_are_rejected(ctx: &mut BackupTestContext) {
        let before = ctx.store.days().to_vec();
        let doc = br#"{"days":[{"date":"2025-01-10","records":[]},{"date":"2025-01-10","records":[]}]}"#;

        let result = parse_backup(doc);
        assert!(matches!(result, Err(BackupError::DuplicateDay(d)) if d == NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()));
        assert_eq!(ctx.store.days(), before.as_slice());
    }

    #[test_context(BackupTestContext)]
    #[test]
    fn test_unscanned_above_total_is_rejected(ctx: &mut BackupTestContext) {
        let doc = br#"{"days":[],"manualEntries":[{"id":"m1","date":"2025-01-10","timestamp":1,"driver":"Ana","plate":"ABC-1234","totalNfs":1,"unscannedNfs":9,"reason":"Outros"}]}"#;

        let result = parse_backup(doc);
        assert!(matches!(
            result,
            Err(BackupError::UnscannedExceedsTotal { ref id, unscanned: 9, total: 1 }) if id == "m1"
        ));
        assert_eq!(ctx.store.manual_entries().len(), 1);
    }

    #[test_context(BackupTestContext)]
    #[test]
    fn test_restored_days_reach_every_operation(ctx: &mut BackupTestContext) {
        let doc = br#"{"days":[{"date":"2025-01-08","records":[]},{"date":"2025-01-12","records":[]},{"date":"2025-01-10","records":[]}]}"#;
        ctx.store.restore(parse_backup(doc).unwrap()).unwrap();

        let dates: Vec<_> = ctx.store.days().iter().map(|d| d.date.to_string()).collect();
        assert_eq!(dates, vec!["2025-01-12", "2025-01-10", "2025-01-08"]);

        let date = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
        ctx.store.add_day(date).unwrap();
        assert_eq!(ctx.store.days()[2].date, date);
    }

    #[test]
    fn test_default_file_name() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(Backup::default_file_name(today), "backup_logicheck_FULL_2025-03-07.json");
    }
}
