#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use fuelwise::db::budgets::Budgets;
    use fuelwise::db::db::Db;
    use fuelwise::db::drivers::Drivers;
    use fuelwise::db::fuel_logs::FuelLogs;
    use fuelwise::db::migrations::{get_db_version, init_with_migrations, needs_migration, MigrationManager};
    use fuelwise::db::trips::Trips;
    use fuelwise::db::vehicles::Vehicles;
    use fuelwise::db::{import_snapshot, load_snapshot};
    use fuelwise::libs::analytics::{calculate_analytics_data, TimeRange};
    use fuelwise::libs::fleet::{FleetSnapshot, TripStatus, VehicleStatus};
    use fuelwise::libs::trends::TrendView;
    use rusqlite::Connection;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/fleet.json");

    struct StoreTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
        fleet: FleetSnapshot,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("store").join("fuelwise.db");
            let fleet = FleetSnapshot::from_json_file(FIXTURE).unwrap();
            StoreTestContext {
                _temp_dir: temp_dir,
                db_path,
                fleet,
            }
        }
    }

    /// The fixture in the order the store returns records.
    fn stored_order(fleet: &FleetSnapshot) -> FleetSnapshot {
        let mut fleet = fleet.clone();
        fleet.vehicles.sort_by(|a, b| a.id.cmp(&b.id));
        fleet.drivers.sort_by(|a, b| a.id.cmp(&b.id));
        fleet.fuel_logs.sort_by(|a, b| (a.date, &a.id).cmp(&(b.date, &b.id)));
        fleet.trips.sort_by(|a, b| (a.start_time, &a.id).cmp(&(b.start_time, &b.id)));
        fleet.budgets.sort_by(|a, b| a.id.cmp(&b.id));
        for budget in fleet.budgets.iter_mut() {
            budget.vehicle_ids.sort();
        }
        fleet
    }

    fn window_start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn test_migrations_on_fresh_database() {
        let mut conn = Connection::open_in_memory().unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 0);

        init_with_migrations(&mut conn).unwrap();

        let manager = MigrationManager::new();
        assert_eq!(get_db_version(&conn).unwrap(), manager.latest_version());
        assert!(!needs_migration(&conn).unwrap());
        assert!(manager.is_migration_applied(&conn, 2).unwrap());

        let history = manager.get_migration_history(&conn).unwrap();
        let names: Vec<&str> = history.iter().map(|(_, name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["create_fleet_tables", "add_budgets", "add_anomaly_reason_and_tags"]);
    }

    #[test]
    fn test_migrations_are_idempotent() {
        let mut conn = Connection::open_in_memory().unwrap();
        init_with_migrations(&mut conn).unwrap();
        init_with_migrations(&mut conn).unwrap();

        let history = MigrationManager::new().get_migration_history(&conn).unwrap();
        assert_eq!(history.len(), 3);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_import_then_load_round_trip(ctx: &mut StoreTestContext) {
        import_snapshot(&ctx.db_path, &ctx.fleet).unwrap();
        assert!(ctx.db_path.exists());

        let stored = load_snapshot(&ctx.db_path).unwrap();
        assert_eq!(stored, stored_order(&ctx.fleet));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_import_is_an_upsert(ctx: &mut StoreTestContext) {
        let mut db = Db::open(&ctx.db_path).unwrap();
        db.import_snapshot(&ctx.fleet).unwrap();
        db.import_snapshot(&ctx.fleet).unwrap();

        let mut renamed = ctx.fleet.clone();
        renamed.vehicles[0].name = "Van One".to_string();
        renamed.budgets[1].vehicle_ids = vec!["v2".to_string()];
        db.import_snapshot(&renamed).unwrap();

        let stored = db.load_snapshot().unwrap();
        assert_eq!(stored.vehicles.len(), 3);
        assert_eq!(stored.fuel_logs.len(), 4);
        assert_eq!(stored.vehicles[0].name, "Van One");
        assert_eq!(stored.budgets[1].vehicle_ids, vec!["v2".to_string()]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_stored_fleet_matches_file_analytics(ctx: &mut StoreTestContext) {
        let mut db = Db::open(&ctx.db_path).unwrap();
        db.import_snapshot(&ctx.fleet).unwrap();
        let stored = db.load_snapshot().unwrap();

        let range = TimeRange::days(30).unwrap();
        let now = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap().and_hms_opt(12, 0, 0).unwrap();
        let data = calculate_analytics_data(&stored, range, TrendView::Weekly, now);
        assert_eq!(data, calculate_analytics_data(&ctx.fleet, range, TrendView::Weekly, now));
        assert_eq!(data.summary.total_trips, 3);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_stored_fleet_with_no_logs_in_window(ctx: &mut StoreTestContext) {
        let mut db = Db::open(&ctx.db_path).unwrap();
        db.import_snapshot(&ctx.fleet).unwrap();
        let stored = db.load_snapshot().unwrap();

        // Every fixture log is more than a year older than this window
        let range = TimeRange::days(30).unwrap();
        let now = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let data = calculate_analytics_data(&stored, range, TrendView::Monthly, now);
        assert_eq!(data, calculate_analytics_data(&ctx.fleet, range, TrendView::Monthly, now));

        assert_eq!(data.vehicle_performance.len(), 3);
        assert_eq!(data.budget_status.len(), 2);
        assert!(data.budget_status.iter().all(|budget| budget.current_spend == 0.0));
        assert_eq!(data.summary.total_fuel_used, 0.0);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_vehicle_and_driver_repositories(ctx: &mut StoreTestContext) {
        let mut vehicles = Vehicles::open(&ctx.db_path).unwrap();
        for vehicle in &ctx.fleet.vehicles {
            vehicles.upsert(vehicle).unwrap();
        }

        let truck = vehicles.fetch_by_id("v2").unwrap().unwrap();
        assert_eq!(truck.name, "Truck \"Big\", Co");
        assert_eq!(truck.status, VehicleStatus::Maintenance);
        assert_eq!(truck.license_plate, None);

        vehicles.delete("v3").unwrap();
        assert!(vehicles.fetch_by_id("v3").unwrap().is_none());
        assert_eq!(vehicles.fetch_all().unwrap().len(), 2);
        assert!(vehicles.delete("v3").is_err());

        let mut drivers = Drivers::open(&ctx.db_path).unwrap();
        for driver in &ctx.fleet.drivers {
            drivers.upsert(driver).unwrap();
        }
        let alice = drivers.fetch_by_id("d1").unwrap().unwrap();
        assert_eq!(alice, ctx.fleet.drivers[0]);
        assert!(drivers.delete("ghost").is_err());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_fuel_log_and_trip_repositories(ctx: &mut StoreTestContext) {
        let mut logs = FuelLogs::open(&ctx.db_path).unwrap();
        for log in &ctx.fleet.fuel_logs {
            logs.upsert(log).unwrap();
        }

        let all: Vec<String> = logs.fetch_all().unwrap().into_iter().map(|log| log.id).collect();
        assert_eq!(all, vec!["f4", "f1", "f2", "f3"]);
        assert_eq!(logs.fetch_since(window_start()).unwrap().len(), 3);

        let f3 = logs.fetch_by_id("f3").unwrap().unwrap();
        assert!(f3.is_anomalous);
        assert_eq!(f3.anomaly_reason.as_deref(), Some("Manual review"));
        assert_eq!(f3.tag, "");

        logs.delete("f4").unwrap();
        assert!(logs.fetch_by_id("f4").unwrap().is_none());
        assert!(logs.delete("f4").is_err());

        let mut trips = Trips::open(&ctx.db_path).unwrap();
        for trip in &ctx.fleet.trips {
            trips.upsert(trip).unwrap();
        }

        let t1 = trips.fetch_by_id("t1").unwrap().unwrap();
        assert_eq!(t1, ctx.fleet.trips[0]);
        let t4 = trips.fetch_by_id("t4").unwrap().unwrap();
        assert_eq!(t4.status, TripStatus::Planned);
        assert_eq!(t4.end_time, None);
        assert_eq!(trips.fetch_since(window_start()).unwrap().len(), 3);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_budget_repository(ctx: &mut StoreTestContext) {
        let mut budgets = Budgets::open(&ctx.db_path).unwrap();
        for budget in &ctx.fleet.budgets {
            budgets.upsert(budget).unwrap();
        }

        let delivery = budgets.fetch_by_id("b1").unwrap().unwrap();
        assert_eq!(delivery, ctx.fleet.budgets[0]);

        let logistics = budgets.fetch_by_id("b2").unwrap().unwrap();
        assert_eq!(logistics.alert_threshold, None);
        assert_eq!(logistics.weekly_limit, Some(10.0));
        assert_eq!(logistics.vehicle_ids, vec!["ghost".to_string(), "v2".to_string()]);

        let mut changed = ctx.fleet.budgets[0].clone();
        changed.monthly_limit = 60.0;
        changed.vehicle_ids = vec!["v3".to_string()];
        budgets.upsert(&changed).unwrap();
        let reloaded = budgets.fetch_by_id("b1").unwrap().unwrap();
        assert_eq!(reloaded.monthly_limit, 60.0);
        assert_eq!(reloaded.vehicle_ids, vec!["v3".to_string()]);

        budgets.delete("b1").unwrap();
        assert!(budgets.fetch_by_id("b1").unwrap().is_none());
        assert_eq!(budgets.fetch_all().unwrap().len(), 1);
        assert!(budgets.delete("b1").is_err());

        // Re-creating the budget starts with no stale vehicle rows
        let mut bare = ctx.fleet.budgets[0].clone();
        bare.vehicle_ids.clear();
        budgets.upsert(&bare).unwrap();
        assert!(budgets.fetch_by_id("b1").unwrap().unwrap().vehicle_ids.is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_clear_keeps_schema(ctx: &mut StoreTestContext) {
        let mut db = Db::open(&ctx.db_path).unwrap();
        db.import_snapshot(&ctx.fleet).unwrap();
        db.clear().unwrap();

        assert!(db.load_snapshot().unwrap().is_empty());
        assert!(!needs_migration(&db.conn).unwrap());

        db.import_snapshot(&ctx.fleet).unwrap();
        assert_eq!(db.load_snapshot().unwrap().fuel_logs.len(), 4);
    }
}
