//! Database schema migration management and versioning system.
//!
//! Every schema change to the fleet store is a numbered migration. Applied
//! versions are recorded in a `migrations` table, and opening the store runs
//! whatever is pending inside one transaction.
//!
//! ## Features
//!
//! - **Version Tracking**: Maintains records of applied migrations
//! - **Automatic Application**: Runs pending migrations when the store is opened
//! - **Transaction Safety**: A failing migration leaves the schema untouched
//! - **Rollback Support**: Development-time rollback of the version record (debug builds only)
//!
//! ## Usage
//!
//! ```rust
//! use fuelwise::db::migrations::{get_db_version, init_with_migrations, needs_migration};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open_in_memory()?;
//! init_with_migrations(&mut conn)?;
//! assert!(get_db_version(&conn)? >= 1);
//! assert!(!needs_migration(&conn)?);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info, msg_success};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of every known migration, in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: fleet rosters, fuel logs and trips
        self.add_migration(1, "create_fleet_tables", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS vehicles (
                    id TEXT NOT NULL PRIMARY KEY,
                    name TEXT NOT NULL,
                    license_plate TEXT,
                    average_consumption REAL NOT NULL DEFAULT 0,
                    efficiency_score REAL NOT NULL DEFAULT 0,
                    monthly_budget REAL NOT NULL DEFAULT 0,
                    current_spend REAL NOT NULL DEFAULT 0,
                    department TEXT NOT NULL DEFAULT '',
                    status TEXT NOT NULL DEFAULT 'active'
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS drivers (
                    id TEXT NOT NULL PRIMARY KEY,
                    name TEXT NOT NULL,
                    efficiency_score REAL NOT NULL DEFAULT 0,
                    total_trips INTEGER NOT NULL DEFAULT 0,
                    total_distance REAL NOT NULL DEFAULT 0,
                    total_fuel_used REAL NOT NULL DEFAULT 0,
                    department TEXT NOT NULL DEFAULT ''
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS fuel_logs (
                    id TEXT NOT NULL PRIMARY KEY,
                    vehicle_id TEXT NOT NULL,
                    driver_id TEXT NOT NULL,
                    date TIMESTAMP NOT NULL,
                    liters REAL NOT NULL,
                    cost REAL NOT NULL,
                    trip_distance REAL NOT NULL DEFAULT 0,
                    efficiency REAL NOT NULL DEFAULT 0,
                    is_anomalous BOOLEAN NOT NULL DEFAULT FALSE
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS trips (
                    id TEXT NOT NULL PRIMARY KEY,
                    vehicle_id TEXT NOT NULL,
                    driver_id TEXT NOT NULL,
                    start_time TIMESTAMP NOT NULL,
                    end_time TIMESTAMP,
                    distance REAL NOT NULL DEFAULT 0,
                    fuel_used REAL NOT NULL DEFAULT 0,
                    cost REAL NOT NULL DEFAULT 0,
                    status TEXT NOT NULL DEFAULT 'completed',
                    predicted_fuel REAL NOT NULL DEFAULT 0,
                    actual_fuel REAL NOT NULL DEFAULT 0,
                    route TEXT NOT NULL DEFAULT ''
                )",
                [],
            )?;

            // Window queries filter on these
            tx.execute("CREATE INDEX IF NOT EXISTS idx_fuel_logs_date ON fuel_logs(date)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_fuel_logs_vehicle ON fuel_logs(vehicle_id)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_trips_start_time ON trips(start_time)", [])?;

            Ok(())
        });

        // Version 2: department budgets and the vehicles they cover
        self.add_migration(2, "add_budgets", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS budgets (
                    id TEXT NOT NULL PRIMARY KEY,
                    department TEXT NOT NULL,
                    period TEXT NOT NULL DEFAULT 'monthly',
                    monthly_limit REAL NOT NULL,
                    weekly_limit REAL,
                    current_spend REAL NOT NULL DEFAULT 0,
                    alert_threshold REAL
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS budget_vehicles (
                    budget_id TEXT NOT NULL,
                    vehicle_id TEXT NOT NULL,
                    PRIMARY KEY (budget_id, vehicle_id),
                    FOREIGN KEY (budget_id) REFERENCES budgets(id) ON DELETE CASCADE
                )",
                [],
            )?;
            Ok(())
        });

        // Version 3: anomaly explanations and cost-allocation tags
        self.add_migration(3, "add_anomaly_reason_and_tags", |tx| {
            tx.execute("ALTER TABLE fuel_logs ADD COLUMN anomaly_reason TEXT", [])?;
            tx.execute("ALTER TABLE fuel_logs ADD COLUMN tag TEXT NOT NULL DEFAULT ''", [])?;
            tx.execute("ALTER TABLE trips ADD COLUMN tag TEXT NOT NULL DEFAULT ''", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies every migration newer than the recorded version.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!("Database is up to date");
            return Ok(());
        }

        msg_info!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;

        for migration in pending {
            msg_info!(Message::RunningMigration(migration.version, migration.name.to_string()));

            match (migration.up)(&tx) {
                Ok(()) => {
                    tx.execute(
                        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                        params![migration.version, migration.name],
                    )?;
                    msg_success!(Message::MigrationCompleted(migration.version));
                }
                Err(e) => {
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }

        tx.commit()?;
        msg_success!(Message::AllMigrationsCompleted);

        Ok(())
    }

    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        // A store that predates the migrations table reports version 0
        let version: Option<u32> = conn
            .query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))
            .unwrap_or(Some(0));

        Ok(version.unwrap_or(0))
    }

    pub fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }

    pub fn is_migration_applied(&self, conn: &Connection, version: u32) -> Result<bool> {
        let count: i32 = conn.query_row(
            "SELECT COUNT(*) FROM migrations WHERE version = ?1",
            params![version],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }

    /// Applied migrations as `(version, name, applied_at)`, oldest first.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }

    /// Forgets migrations newer than `target_version`.
    ///
    /// Only the version records are removed; tables and columns stay in place.
    #[cfg(debug_assertions)]
    pub fn rollback_to(&self, conn: &mut Connection, target_version: u32) -> Result<()> {
        let current_version = self.get_current_version(conn)?;

        if target_version >= current_version {
            msg_info!(Message::NothingToRollback);
            return Ok(());
        }

        msg_info!(Message::RollingBack(current_version, target_version));
        conn.execute("DELETE FROM migrations WHERE version > ?1", params![target_version])?;
        msg_success!(Message::RollbackCompleted(target_version));
        Ok(())
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    let manager = MigrationManager::new();
    manager.run_migrations(conn)?;
    Ok(())
}

pub fn get_db_version(conn: &Connection) -> Result<u32> {
    let manager = MigrationManager::new();
    manager.get_current_version(conn)
}

pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    let current = manager.get_current_version(conn)?;
    Ok(current < manager.latest_version())
}
