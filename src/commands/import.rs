//! Loads a JSON fleet snapshot into the local store.
//!
//! Records are upserted by id, so importing a newer export of the same fleet
//! updates existing rows instead of duplicating them. The whole import runs
//! in one transaction.

use crate::{
    db::db::Db,
    libs::{fleet::FleetSnapshot, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Snapshot document with vehicles, drivers, fuelLogs, trips and budgets
    file: PathBuf,

    /// Recompute anomaly flags against each vehicle's baseline before storing
    #[arg(short, long)]
    detect_anomalies: bool,

    /// Remove all stored fleet records first
    #[arg(long)]
    replace: bool,
}

pub fn cmd(args: ImportArgs) -> Result<()> {
    msg_info!(Message::ImportingSnapshot(args.file.display().to_string()));
    let mut snapshot = FleetSnapshot::from_json_file(&args.file)?;

    if snapshot.is_empty() {
        msg_info!(Message::SnapshotEmpty);
        return Ok(());
    }

    if args.detect_anomalies {
        let flagged = snapshot.annotate_anomalies();
        msg_info!(Message::AnomaliesFlagged(flagged));
    }

    let mut db = Db::new()?;
    if args.replace {
        db.clear()?;
        msg_info!(Message::StoreCleared);
    }
    db.import_snapshot(&snapshot)?;

    msg_success!(Message::SnapshotImported {
        vehicles: snapshot.vehicles.len(),
        drivers: snapshot.drivers.len(),
        fuel_logs: snapshot.fuel_logs.len(),
        trips: snapshot.trips.len(),
        budgets: snapshot.budgets.len(),
    });
    Ok(())
}
