use crate::db::migrations::init_with_migrations;
use crate::db::{budgets, drivers, fuel_logs, trips, vehicles};
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::fleet::FleetSnapshot;
use crate::msg_debug;
use anyhow::Result;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};

pub const DB_FILE_NAME: &str = "fuelwise.db";

/// Connection to the fleet store with the schema brought up to date.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the store at the configured path, or `fuelwise.db` in the data directory.
    pub fn new() -> Result<Db> {
        Self::open(Self::default_path()?)
    }

    /// Opens (creating if needed) the store at `path` and applies pending migrations.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Db> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Opens the default store without touching its schema.
    #[cfg(debug_assertions)]
    pub fn new_without_migrations() -> Result<Connection> {
        Ok(Connection::open(Self::default_path()?)?)
    }

    pub fn default_path() -> Result<PathBuf> {
        match Config::read()?.database_path() {
            Some(path) => Ok(path),
            None => Ok(DataStorage::new().get_path(DB_FILE_NAME)?),
        }
    }

    /// Reads every collection into a snapshot.
    pub fn load_snapshot(&self) -> Result<FleetSnapshot> {
        let snapshot = FleetSnapshot {
            vehicles: vehicles::select_all(&self.conn)?,
            drivers: drivers::select_all(&self.conn)?,
            fuel_logs: fuel_logs::select_all(&self.conn)?,
            trips: trips::select_all(&self.conn)?,
            budgets: budgets::select_all(&self.conn)?,
        };
        msg_debug!(format!(
            "Loaded {} vehicles, {} drivers, {} fuel logs, {} trips, {} budgets from store",
            snapshot.vehicles.len(),
            snapshot.drivers.len(),
            snapshot.fuel_logs.len(),
            snapshot.trips.len(),
            snapshot.budgets.len()
        ));
        Ok(snapshot)
    }

    /// Upserts every record of `snapshot` in a single transaction.
    ///
    /// Either the whole snapshot is stored or, on any error, nothing is.
    pub fn import_snapshot(&mut self, snapshot: &FleetSnapshot) -> Result<()> {
        let tx = self.conn.transaction()?;

        for vehicle in &snapshot.vehicles {
            vehicles::upsert(&tx, vehicle)?;
        }
        for driver in &snapshot.drivers {
            drivers::upsert(&tx, driver)?;
        }
        for log in &snapshot.fuel_logs {
            fuel_logs::upsert(&tx, log)?;
        }
        for trip in &snapshot.trips {
            trips::upsert(&tx, trip)?;
        }
        for budget in &snapshot.budgets {
            budgets::upsert(&tx, budget)?;
        }

        tx.commit()?;
        Ok(())
    }

    /// Removes every fleet record, keeping the schema.
    pub fn clear(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        for table in ["budget_vehicles", "budgets", "trips", "fuel_logs", "drivers", "vehicles"] {
            tx.execute(&format!("DELETE FROM {}", table), [])?;
        }
        tx.commit()?;
        Ok(())
    }
}
