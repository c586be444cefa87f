#[cfg(test)]
mod tests {
    use fuelwise::libs::config::{AnalyticsConfig, Config, StoreConfig, CONFIG_FILE_NAME};
    use fuelwise::libs::data_storage::{DataStorage, DATA_DIR_ENV};
    use fuelwise::libs::trends::TrendView;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Points the data directory at a fresh temporary directory.
    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var(DATA_DIR_ENV, temp_dir.path());
            ConfigTestContext { temp_dir }
        }

        fn teardown(self) {
            std::env::remove_var(DATA_DIR_ENV);
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.analytics.is_none());
        assert!(config.store.is_none());
        assert!(config.database_path().is_none());

        let analytics = config.analytics_or_default();
        assert_eq!(analytics.fuel_price, 1.50);
        assert_eq!(analytics.alert_threshold, 80.0);
        assert_eq!(analytics.default_time_range, 30);
        assert_eq!(analytics.default_view, TrendView::Monthly);
    }

    #[test]
    fn test_config_json_shape() {
        let config = Config {
            analytics: Some(AnalyticsConfig {
                fuel_price: 1.85,
                alert_threshold: 70.0,
                default_time_range: 90,
                default_view: TrendView::Weekly,
            }),
            store: None,
        };
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["analytics"]["fuelPrice"], 1.85);
        assert_eq!(json["analytics"]["defaultTimeRange"], 90);
        assert_eq!(json["analytics"]["defaultView"], "weekly");
        assert!(json.get("store").is_none());
    }

    // Every step touches the process-wide data directory, so the whole
    // lifecycle runs as one test.
    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_lifecycle(ctx: &mut ConfigTestContext) {
        let storage = DataStorage::new();
        assert_eq!(storage.base_path(), ctx.temp_dir.path());

        // Missing file reads as defaults
        assert_eq!(Config::read().unwrap(), Config::default());

        let config = Config {
            analytics: Some(AnalyticsConfig {
                fuel_price: 2.10,
                alert_threshold: 65.0,
                default_time_range: 7,
                default_view: TrendView::Daily,
            }),
            store: Some(StoreConfig {
                database_path: Some(PathBuf::from("/srv/fleet/fuel.db")),
            }),
        };
        config.save().unwrap();
        assert!(ctx.temp_dir.path().join(CONFIG_FILE_NAME).exists());

        let loaded = Config::read().unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.analytics_or_default().fuel_price, 2.10);
        assert_eq!(loaded.database_path(), Some(PathBuf::from("/srv/fleet/fuel.db")));

        // Sections may be left out by hand
        std::fs::write(
            ctx.temp_dir.path().join(CONFIG_FILE_NAME),
            r#"{ "store": { "databasePath": "fleet.db" } }"#,
        )
        .unwrap();
        let partial = Config::read().unwrap();
        assert!(partial.analytics.is_none());
        assert_eq!(partial.analytics_or_default(), AnalyticsConfig::default());

        // A corrupt file is an error, not a silent reset
        std::fs::write(ctx.temp_dir.path().join(CONFIG_FILE_NAME), "{ not json").unwrap();
        assert!(Config::read().is_err());

        Config::delete().unwrap();
        assert!(!ctx.temp_dir.path().join(CONFIG_FILE_NAME).exists());
        // Deleting twice is fine
        Config::delete().unwrap();
        assert_eq!(Config::read().unwrap(), Config::default());
    }
}
