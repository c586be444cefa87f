//! Fleet-wide efficiency and savings metrics over all recorded data.

use super::load_fleet;
use crate::{
    libs::{
        analytics::{calculate_efficiency_metrics, calculate_savings_metrics, calculate_trip_savings},
        config::Config,
        messages::Message,
        view::View,
    },
    msg_print,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct MetricsArgs {
    /// Fuel price per liter; overrides the configured price
    #[arg(short = 'p', long)]
    fuel_price: Option<f64>,

    /// Read fleet data from a JSON snapshot instead of the store
    #[arg(short, long)]
    file: Option<PathBuf>,
}

pub fn cmd(args: MetricsArgs) -> Result<()> {
    let config = Config::read()?.analytics_or_default();
    let fuel_price = args.fuel_price.unwrap_or(config.fuel_price);

    let fleet = load_fleet(args.file.as_deref(), &config)?;

    let efficiency = calculate_efficiency_metrics(&fleet.vehicles, &fleet.fuel_logs);
    let savings = calculate_savings_metrics(&fleet.fuel_logs, &fleet.vehicles, fuel_price);
    let trip_savings = calculate_trip_savings(&fleet.trips, fuel_price);

    msg_print!(Message::EfficiencyHeader, true);
    View::efficiency(&efficiency)?;

    msg_print!(Message::SavingsHeader, true);
    View::savings(&savings)?;

    msg_print!(Message::TripSavingsHeader, true);
    View::trip_savings(&trip_savings)?;

    Ok(())
}
