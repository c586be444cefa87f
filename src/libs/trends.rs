//! Period grouping for fuel and cost trend charts.
//!
//! Fuel logs are bucketed by the calendar period their date falls into and a
//! value is summed per bucket. Buckets are keyed by the period's first day, so
//! the output is always in chronological order regardless of the order the
//! logs arrive in.
//!
//! ## Period Labels
//!
//! - **Daily**: `1/15/2025`
//! - **Weekly**: `Week 1/12/2025` (weeks start on Sunday)
//! - **Monthly**: `2025-1`

use crate::libs::fleet::FuelLog;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Granularity of trend grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TrendView {
    Daily,
    Weekly,
    #[default]
    Monthly,
}

impl TrendView {
    /// Lenient parse: anything that is not `daily` or `weekly` groups monthly.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "daily" => TrendView::Daily,
            "weekly" => TrendView::Weekly,
            _ => TrendView::Monthly,
        }
    }
}

impl fmt::Display for TrendView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TrendView::Daily => "daily",
            TrendView::Weekly => "weekly",
            TrendView::Monthly => "monthly",
        };
        write!(f, "{}", text)
    }
}

/// One labelled point of a trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub period: String,
    pub value: f64,
}

/// First day of the period containing `date`.
pub fn period_start(date: NaiveDate, view: TrendView) -> NaiveDate {
    match view {
        TrendView::Daily => date,
        TrendView::Weekly => date - Duration::days(date.weekday().num_days_from_sunday() as i64),
        TrendView::Monthly => NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date),
    }
}

/// Display label of the period containing `date`.
pub fn period_label(date: NaiveDate, view: TrendView) -> String {
    let start = period_start(date, view);
    match view {
        TrendView::Daily => start.format("%-m/%-d/%Y").to_string(),
        TrendView::Weekly => format!("Week {}", start.format("%-m/%-d/%Y")),
        TrendView::Monthly => format!("{}-{}", start.year(), start.month()),
    }
}

/// Sums `value` over `logs` per period, oldest period first.
pub fn group_by_period<F>(logs: &[&FuelLog], view: TrendView, value: F) -> Vec<TrendPoint>
where
    F: Fn(&FuelLog) -> f64,
{
    let mut buckets: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for log in logs {
        let start = period_start(log.date.date(), view);
        *buckets.entry(start).or_insert(0.0) += value(log);
    }

    buckets
        .into_iter()
        .map(|(start, value)| TrendPoint {
            period: period_label(start, view),
            value,
        })
        .collect()
}

/// Liters fueled per period.
pub fn fuel_trend(logs: &[&FuelLog], view: TrendView) -> Vec<TrendPoint> {
    group_by_period(logs, view, |log| log.liters)
}

/// Money spent per period.
pub fn cost_trend(logs: &[&FuelLog], view: TrendView) -> Vec<TrendPoint> {
    group_by_period(logs, view, |log| log.cost)
}
