//! Console fleet report.
//!
//! Prints the dashboard sections for a time window: summary totals, fuel
//! and cost trends, vehicle and driver performance, departments, budgets,
//! recent anomalies and the tag breakdown.

use super::{budgets::print_budget_alerts, load_fleet, resolve_range};
use crate::{
    libs::{
        analytics::{calculate_analytics_data, TimeRange},
        config::Config,
        messages::Message,
        trends::TrendView,
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Window length in days (e.g. 7, 30, 90, 365)
    #[arg(short, long)]
    range: Option<TimeRange>,

    /// Trend grouping
    #[arg(short, long, value_enum)]
    view: Option<TrendView>,

    /// Read fleet data from a JSON snapshot instead of the store
    #[arg(short, long)]
    file: Option<PathBuf>,
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let config = Config::read()?.analytics_or_default();
    let range = resolve_range(args.range, &config)?;
    let view = args.view.unwrap_or(config.default_view);
    let now = Local::now().naive_local();

    let fleet = load_fleet(args.file.as_deref(), &config)?;
    if fleet.fuel_logs.is_empty() || fleet.vehicles.is_empty() || fleet.drivers.is_empty() {
        msg_info!(Message::NoFleetData);
        return Ok(());
    }

    let data = calculate_analytics_data(&fleet, range, view, now);

    msg_print!(Message::ReportHeader(range.as_days(), view.to_string()), true);

    msg_print!(Message::SummaryHeader);
    View::summary(&data.summary)?;

    if !data.fuel_trend.is_empty() {
        msg_print!(Message::FuelTrendHeader, true);
        View::trend(&data.fuel_trend, false)?;
        msg_print!(Message::CostTrendHeader, true);
        View::trend(&data.cost_trend, true)?;
    }

    msg_print!(Message::VehiclesHeader, true);
    View::vehicles(&data.vehicle_performance)?;

    msg_print!(Message::DriversHeader, true);
    View::drivers(&data.driver_performance)?;

    msg_print!(Message::DepartmentsHeader, true);
    View::departments(&data.department_stats)?;

    msg_print!(Message::BudgetsHeader, true);
    if data.budget_status.is_empty() {
        msg_info!(Message::NoBudgets);
    } else {
        View::budgets(&data.budget_status)?;
        print_budget_alerts(&data.budget_status);
    }

    msg_print!(Message::AnomaliesHeader, true);
    if data.recent_anomalies.is_empty() {
        msg_info!(Message::NoAnomalies);
    } else {
        View::anomalies(&data.recent_anomalies)?;
    }

    if !data.tag_breakdown.is_empty() {
        msg_print!(Message::TagsHeader, true);
        View::tags(&data.tag_breakdown)?;
    }

    Ok(())
}
