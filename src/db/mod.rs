//! Local SQLite fleet store.
//!
//! Persists the fleet collections between runs so reports can be produced
//! without re-reading the source export every time. The analytics engine
//! never queries the store directly: commands load a
//! [`FleetSnapshot`](crate::libs::fleet::FleetSnapshot) from it and hand that
//! over.
//!
//! ## Layout
//!
//! - [`db::Db`]: connection at the configured path with migrations applied
//! - [`migrations`]: versioned schema changes
//! - One repository per table: [`vehicles::Vehicles`], [`drivers::Drivers`],
//!   [`fuel_logs::FuelLogs`], [`trips::Trips`], [`budgets::Budgets`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fuelwise::db::{import_snapshot, load_snapshot};
//! use fuelwise::libs::fleet::FleetSnapshot;
//!
//! let snapshot = FleetSnapshot::from_json_file("fleet.json")?;
//! import_snapshot("fleet.db", &snapshot)?;
//! let stored = load_snapshot("fleet.db")?;
//! assert_eq!(stored.vehicles.len(), snapshot.vehicles.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod budgets;
pub mod db;
pub mod drivers;
pub mod fuel_logs;
pub mod migrations;
pub mod trips;
pub mod vehicles;

use crate::libs::fleet::FleetSnapshot;
use anyhow::Result;
use std::path::Path;

/// Opens the store at `path` and reads every collection.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<FleetSnapshot> {
    db::Db::open(path)?.load_snapshot()
}

/// Opens the store at `path` and upserts `snapshot` in one transaction.
pub fn import_snapshot<P: AsRef<Path>>(path: P, snapshot: &FleetSnapshot) -> Result<()> {
    db::Db::open(path)?.import_snapshot(snapshot)
}
