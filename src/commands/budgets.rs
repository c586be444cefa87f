use super::{load_fleet, resolve_range};
use crate::{
    libs::{
        analytics::{calculate_analytics_data, BudgetReport, TimeRange},
        config::Config,
        messages::Message,
        metrics::BudgetLevel,
        view::View,
    },
    msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct BudgetsArgs {
    /// Window length in days used to total the spend
    #[arg(short, long)]
    range: Option<TimeRange>,

    /// Read fleet data from a JSON snapshot instead of the store
    #[arg(short, long)]
    file: Option<PathBuf>,
}

pub fn cmd(args: BudgetsArgs) -> Result<()> {
    let config = Config::read()?.analytics_or_default();
    let range = resolve_range(args.range, &config)?;
    let now = Local::now().naive_local();

    let fleet = load_fleet(args.file.as_deref(), &config)?;
    if fleet.budgets.is_empty() {
        msg_info!(Message::NoBudgets);
        return Ok(());
    }

    let data = calculate_analytics_data(&fleet, range, config.default_view, now);
    if data.budget_status.is_empty() {
        msg_info!(Message::NoFleetData);
        return Ok(());
    }

    msg_print!(Message::BudgetsHeader, true);
    View::budgets(&data.budget_status)?;
    print_budget_alerts(&data.budget_status);

    Ok(())
}

/// Warns about every budget that reached its alert threshold or its limit.
pub(crate) fn print_budget_alerts(reports: &[BudgetReport]) {
    for report in reports {
        match report.status {
            BudgetLevel::Critical => msg_warning!(Message::BudgetCritical(report.department.clone(), report.percentage)),
            BudgetLevel::Warning => msg_warning!(Message::BudgetWarning(report.department.clone(), report.percentage)),
            BudgetLevel::Good => {}
        }
    }
}
