#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use logicheck::db::db::Db;
    use logicheck::db::record_store::RecordStore;
    use logicheck::libs::auth::{CredentialCheck, ProfileCredentials};
    use logicheck::libs::config::Config;
    use logicheck::libs::export::{ExportFormat, Exporter};
    use logicheck::libs::filter::DayFilter;
    use logicheck::libs::formatter::{format_clock, format_minutes};
    use logicheck::libs::kpi::ManualKpis;
    use logicheck::libs::manual::{DriverType, ManualReason, NewManualEntry};
    use logicheck::libs::record::NewVehicle;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct WorkflowTestContext {
        temp_dir: TempDir,
        config: Config,
        db_path: PathBuf,
    }

    impl WorkflowTestContext {
        fn open(&self) -> RecordStore<Db> {
            let db = Db::open(&self.db_path).unwrap();
            RecordStore::load(db, self.config.storage.clone()).unwrap()
        }
    }

    impl TestContext for WorkflowTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("logicheck.db");
            WorkflowTestContext {
                temp_dir,
                config: Config::default(),
                db_path,
            }
        }
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_login_gate_then_session(ctx: &mut WorkflowTestContext) {
        let mut store = ctx.open();
        let email = ctx.config.auth.email.clone();

        assert!(!ProfileCredentials::new(&ctx.config.auth, store.profile()).verify(&email, "nope"));
        assert!(ProfileCredentials::new(&ctx.config.auth, store.profile()).verify(&email, "logicheck"));
        store.login(&email).unwrap();

        // The session survives a restart.
        assert_eq!(ctx.open().session().unwrap(), Some(email));
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_conference_day_to_csv(ctx: &mut WorkflowTestContext) {
        let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let mut store = ctx.open();
        store.add_day(date).unwrap();
        let record = store
            .add_vehicle(date, NewVehicle::parse("ABC-1234", "John", "5").unwrap())
            .unwrap();

        let stats = store.global_stats();
        assert_eq!((stats.vehicles, stats.invoices), (1, 5));

        let output_path = ctx.temp_dir.path().join("relatorio_geral.csv");
        let days = DayFilter::default().apply(store.days());
        Exporter::new(ExportFormat::Csv, Some(output_path.clone()))
            .export_vehicles(&days, &store.profile().name)
            .unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let expected = format!("10/01/2025;{};ABC-1234;John;5", format_clock(record.timestamp));
        assert!(content.lines().any(|line| line == expected));
        assert!(content.contains("Conferido por: Usuário LogiCheck"));
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_search_with_no_match_exports_nothing(ctx: &mut WorkflowTestContext) {
        let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let mut store = ctx.open();
        store.add_day(date).unwrap();
        store.add_vehicle(date, NewVehicle::parse("ABC1234", "John", "5").unwrap()).unwrap();

        let days = DayFilter::new(None, None, Some("zzz".into())).apply(store.days());
        let output_path = ctx.temp_dir.path().join("none.csv");
        assert!(Exporter::new(ExportFormat::Csv, Some(output_path.clone()))
            .export_vehicles(&days, "Ana")
            .is_err());
        assert!(!output_path.exists());
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_manual_entry_rework(ctx: &mut WorkflowTestContext) {
        let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let mut store = ctx.open();
        let input = NewManualEntry::parse("Maria", "XYZ9876", DriverType::Telog, 10, 4, ManualReason::AppDown).unwrap();
        store.add_manual_entry(date, input).unwrap();

        let kpis = ManualKpis::compute(store.manual_entries());
        assert_eq!(kpis.total_rework_minutes, 8);
        assert_eq!(format_minutes(kpis.total_rework_minutes), "8 min");
        assert_eq!(kpis.top_drivers[0].driver, "Maria");

        assert!(NewManualEntry::parse("Maria", "XYZ9876", DriverType::Telog, 3, 5, ManualReason::Other).is_err());
        assert_eq!(ctx.open().manual_entries().len(), 1);
    }
}
