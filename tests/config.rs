#[cfg(test)]
mod tests {
    use logicheck::libs::config::{Config, StorageConfig, CONFIG_FILE_NAME};
    use logicheck::libs::data_storage::DataStorage;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
        storage: DataStorage,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::at(temp_dir.path().join("logicheck"));
            ConfigTestContext { _temp_dir: temp_dir, storage }
        }
    }

    #[test]
    fn test_default_storage_keys() {
        let storage = StorageConfig::default();
        assert_eq!(storage.days_key, "romaneios_data_v1");
        assert_eq!(storage.manual_key, "romaneios_manual_index_v1");
        assert_eq!(storage.profile_key, "romaneios_user_profile_v1");
        assert_eq!(storage.session_key, "romaneios_auth_session");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_yields_default(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_back(ctx: &mut ConfigTestContext) {
        let mut config = Config::default();
        config.auth.email = "ana@example.com".to_string();
        config.storage.days_key = "days_v2".to_string();
        config.save_to(&ctx.storage).unwrap();

        assert!(ctx.storage.base_path().join(CONFIG_FILE_NAME).exists());
        assert_eq!(Config::read_from(&ctx.storage).unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file_fills_defaults(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, r#"{"auth":{"email":"ana@example.com"}}"#).unwrap();

        let config = Config::read_path(&path).unwrap();
        assert_eq!(config.auth.email, "ana@example.com");
        assert_eq!(config.auth.default_password, "logicheck");
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_file_is_an_error(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, "{not json").unwrap();
        assert!(Config::read_path(&path).is_err());
    }
}
