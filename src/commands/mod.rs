//! Command-line interface.
//!
//! Each subcommand lives in its own module with an `Args` struct and a `cmd`
//! entry point. Commands read fleet data either from a JSON snapshot given
//! with `--file` or from the local store, run the analytics engine and print
//! or export the result.

pub mod budgets;
pub mod export;
pub mod import;
pub mod init;
pub mod metrics;
#[cfg(debug_assertions)]
pub mod migrations;
pub mod predict;
pub mod report;

use crate::db::db::Db;
use crate::libs::analytics::TimeRange;
use crate::libs::config::AnalyticsConfig;
use crate::libs::fleet::FleetSnapshot;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_info};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::Path;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure fuel price, report defaults and store location")]
    Init(init::InitArgs),
    #[command(about = "Import a JSON fleet snapshot into the local store", arg_required_else_help = true)]
    Import(import::ImportArgs),
    #[command(about = "Show fleet analytics for a time window")]
    Report(report::ReportArgs),
    #[command(about = "Show fleet efficiency and savings metrics")]
    Metrics(metrics::MetricsArgs),
    #[command(about = "Show budget usage and alerts")]
    Budgets(budgets::BudgetsArgs),
    #[command(about = "Predict fuel use for a planned trip", arg_required_else_help = true)]
    Predict(predict::PredictArgs),
    #[command(about = "Export fleet analytics to CSV, JSON, HTML or Excel")]
    Export(export::ExportArgs),
    #[cfg(debug_assertions)]
    #[command(about = "Inspect database migrations")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Import(args) => import::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Metrics(args) => metrics::cmd(args),
            Commands::Budgets(args) => budgets::cmd(args),
            Commands::Predict(args) => predict::cmd(args),
            Commands::Export(args) => export::cmd(args),
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}

/// Loads fleet data from a snapshot file, or from the store when no file is given.
///
/// Both sources yield every record and the analytics engine applies the
/// window. Budgets without their own alert threshold get the configured one.
pub(crate) fn load_fleet(file: Option<&Path>, config: &AnalyticsConfig) -> Result<FleetSnapshot> {
    let mut fleet = match file {
        Some(path) => {
            msg_info!(Message::LoadingSnapshotFile(path.display().to_string()));
            FleetSnapshot::from_json_file(path)?
        }
        None => {
            let path = Db::default_path()?;
            msg_debug!(Message::LoadingFromStore(path.display().to_string()));
            let db = Db::open(&path)?;
            let fleet = db.load_snapshot()?;
            if fleet.vehicles.is_empty() && fleet.drivers.is_empty() {
                msg_info!(Message::StoreEmpty);
            }
            fleet
        }
    };

    fleet.fill_alert_thresholds(config.alert_threshold);
    Ok(fleet)
}

/// The window requested on the command line, or the configured default.
pub(crate) fn resolve_range(range: Option<TimeRange>, config: &AnalyticsConfig) -> Result<TimeRange> {
    match range {
        Some(range) => Ok(range),
        None => Ok(TimeRange::days(config.default_time_range)?),
    }
}
