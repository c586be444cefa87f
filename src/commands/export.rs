//! Report export command.
//!
//! Computes the same analytics as `report` and writes them to a file.
//!
//! ## Supported Export Formats
//!
//! - **CSV**: sectioned tables for spreadsheet applications
//! - **JSON**: the full analytics result for programmatic processing
//! - **HTML**: a printable standalone page
//! - **Excel**: a workbook with one sheet per section

use super::{load_fleet, resolve_range};
use crate::{
    libs::{
        analytics::{calculate_analytics_data, TimeRange},
        config::Config,
        export::{ExportFormat, Exporter},
        messages::Message,
        trends::TrendView,
    },
    msg_info,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(short = 'F', long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file; defaults to fuelwise_report_<timestamp>.<ext>
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Window length in days
    #[arg(short, long)]
    range: Option<TimeRange>,

    /// Trend grouping
    #[arg(short, long, value_enum)]
    view: Option<TrendView>,

    /// Read fleet data from a JSON snapshot instead of the store
    #[arg(short, long)]
    file: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?.analytics_or_default();
    let range = resolve_range(args.range, &config)?;
    let view = args.view.unwrap_or(config.default_view);
    let now = Local::now().naive_local();

    let fleet = load_fleet(args.file.as_deref(), &config)?;
    let data = calculate_analytics_data(&fleet, range, view, now);

    msg_info!(Message::ExportingData(args.format.to_string()));
    Exporter::new(args.format, args.output).export(&data)?;

    Ok(())
}
