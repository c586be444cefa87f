//! Fleet analytics aggregation engine.
//!
//! Turns the raw fleet collections into the derived metrics shown on the
//! dashboard: period totals, fuel and cost trends, per-vehicle and per-driver
//! performance, department rollups, budget status and recent anomalies.
//!
//! ## Time Window
//!
//! Fuel logs and trips are filtered to the window `[now - range, ...)`. The
//! reference time `now` is always passed in by the caller, so every result is
//! reproducible. Vehicle and driver rosters and budgets are never filtered:
//! they always describe the current fleet.
//!
//! ## Purity
//!
//! Nothing in this module performs I/O or keeps state between calls. Calling
//! [`calculate_analytics_data`] twice with the same inputs yields identical
//! results, and malformed references (a log pointing at an unknown vehicle)
//! degrade to "Unknown" labels and zeros instead of errors.
//!
//! ## Usage
//!
//! ```rust
//! use fuelwise::libs::analytics::{calculate_analytics_data, TimeRange};
//! use fuelwise::libs::fleet::FleetSnapshot;
//! use fuelwise::libs::trends::TrendView;
//!
//! let snapshot = FleetSnapshot::default();
//! let now = chrono::Local::now().naive_local();
//! let range: TimeRange = "30".parse().unwrap();
//! let data = calculate_analytics_data(&snapshot, range, TrendView::Daily, now);
//! assert_eq!(data.summary.total_fuel_used, 0.0);
//! ```

use crate::libs::error::FleetError;
use crate::libs::fleet::{BudgetPeriod, Driver, FleetSnapshot, FuelLog, Trip, TripStatus, Vehicle, VehicleStatus};
use crate::libs::metrics::{calculate_fuel_savings, expected_fuel, get_budget_status, BudgetLevel};
use crate::libs::trends::{cost_trend, fuel_trend, TrendPoint, TrendView};
use crate::msg_debug;
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

/// Number of anomalies listed in [`AnalyticsData::recent_anomalies`].
pub const RECENT_ANOMALY_LIMIT: usize = 5;

pub const UNKNOWN_VEHICLE: &str = "Unknown Vehicle";
pub const UNKNOWN_DRIVER: &str = "Unknown Driver";
pub const UNTAGGED: &str = "untagged";

/// Length of the analysis window in days.
///
/// Parsed from the stringified day counts the dashboard offers ("7", "30",
/// "90", "365"); any positive integer is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange(u32);

impl TimeRange {
    pub fn days(days: u32) -> Result<Self, FleetError> {
        if days == 0 {
            return Err(FleetError::InvalidTimeRange(days.to_string()));
        }
        Ok(Self(days))
    }

    pub fn as_days(&self) -> u32 {
        self.0
    }

    /// Earliest timestamp inside the window ending at `now`.
    ///
    /// Windows reaching past the earliest representable date start there.
    pub fn window_start(&self, now: NaiveDateTime) -> NaiveDateTime {
        now.checked_sub_signed(Duration::days(self.0 as i64))
            .unwrap_or(NaiveDateTime::MIN)
    }
}

impl Default for TimeRange {
    fn default() -> Self {
        Self(30)
    }
}

impl FromStr for TimeRange {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let days = s.trim().parse::<u32>().map_err(|_| FleetError::InvalidTimeRange(s.to_string()))?;
        if days == 0 {
            return Err(FleetError::InvalidTimeRange(s.to_string()));
        }
        Ok(Self(days))
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scalar totals over the analysis window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_fuel_used: f64,
    pub total_cost: f64,
    pub average_efficiency: f64,
    pub total_trips: usize,
    pub anomalies_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehiclePerformance {
    pub vehicle_id: String,
    pub name: String,
    pub department: String,
    pub fuel_used: f64,
    pub cost: f64,
    pub efficiency: f64,
    pub trips: usize,
    pub avg_cost_per_trip: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverPerformance {
    pub driver_id: String,
    pub name: String,
    pub department: String,
    pub fuel_used: f64,
    pub cost: f64,
    pub efficiency: f64,
    pub trips: usize,
    pub avg_cost_per_trip: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentStat {
    pub department: String,
    pub fuel_used: f64,
    pub vehicle_count: usize,
}

/// Spend of one budget's vehicles within the window, evaluated against its limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetReport {
    pub budget_id: String,
    pub department: String,
    pub period: BudgetPeriod,
    pub limit: f64,
    pub current_spend: f64,
    pub status: BudgetLevel,
    pub percentage: f64,
    pub remaining: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentAnomaly {
    pub log_id: String,
    pub date: NaiveDateTime,
    pub vehicle_id: String,
    pub vehicle_name: String,
    pub driver_id: String,
    pub driver_name: String,
    pub liters: f64,
    pub cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagStat {
    pub tag: String,
    pub fuel_used: f64,
    pub cost: f64,
    pub logs: usize,
}

/// Everything the dashboard shows for one window and grouping view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    pub summary: AnalyticsSummary,
    pub fuel_trend: Vec<TrendPoint>,
    pub cost_trend: Vec<TrendPoint>,
    pub vehicle_performance: Vec<VehiclePerformance>,
    pub driver_performance: Vec<DriverPerformance>,
    pub department_stats: Vec<DepartmentStat>,
    pub budget_status: Vec<BudgetReport>,
    pub recent_anomalies: Vec<RecentAnomaly>,
    pub tag_breakdown: Vec<TagStat>,
}

/// Configured fleet state, independent of any time window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EfficiencyMetrics {
    pub total_vehicles: usize,
    pub active_vehicles: usize,
    pub utilization_rate: f64,
    pub total_fuel_used: f64,
    pub total_cost: f64,
    pub average_efficiency: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsMetrics {
    pub total_savings: f64,
    pub total_liters_saved: f64,
    pub average_savings_per_trip: f64,
}

/// Predicted against actual fuel over completed trips.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSavings {
    pub trips_counted: usize,
    pub total_predicted_fuel: f64,
    pub total_actual_fuel: f64,
    pub total_savings: f64,
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

fn per_trip(cost: f64, trips: usize) -> f64 {
    if trips == 0 {
        0.0
    } else {
        cost / trips as f64
    }
}

/// Computes the full dashboard analytics for one window and view.
///
/// Returns an all-empty [`AnalyticsData`] when there are no fuel logs, no
/// vehicles or no drivers at all. That is the "no data yet" state, not an
/// error.
///
/// # Arguments
///
/// * `fleet` - Current fleet collections
/// * `range` - Window length in days, ending at `now`
/// * `view` - Grouping for the fuel and cost trends
/// * `now` - Reference time the window is measured back from
pub fn calculate_analytics_data(
    fleet: &FleetSnapshot,
    range: TimeRange,
    view: TrendView,
    now: NaiveDateTime,
) -> AnalyticsData {
    if fleet.fuel_logs.is_empty() || fleet.vehicles.is_empty() || fleet.drivers.is_empty() {
        msg_debug!("Analytics skipped: no fuel logs, vehicles or drivers");
        return AnalyticsData::default();
    }

    let start = range.window_start(now);
    let logs: Vec<&FuelLog> = fleet.fuel_logs.iter().filter(|log| log.date >= start).collect();
    let trips: Vec<&Trip> = fleet.trips.iter().filter(|trip| trip.start_time >= start).collect();

    msg_debug!(format!(
        "Analytics window {} days from {}: {} of {} logs, {} of {} trips",
        range,
        start,
        logs.len(),
        fleet.fuel_logs.len(),
        trips.len(),
        fleet.trips.len()
    ));

    let vehicles_by_id: HashMap<&str, &Vehicle> = fleet.vehicles.iter().map(|v| (v.id.as_str(), v)).collect();
    let drivers_by_id: HashMap<&str, &Driver> = fleet.drivers.iter().map(|d| (d.id.as_str(), d)).collect();

    AnalyticsData {
        summary: summarize(&logs, &trips),
        fuel_trend: fuel_trend(&logs, view),
        cost_trend: cost_trend(&logs, view),
        vehicle_performance: vehicle_performance(&fleet.vehicles, &logs, &trips),
        driver_performance: driver_performance(&fleet.drivers, &logs, &trips),
        department_stats: department_stats(&fleet.vehicles, &logs, &vehicles_by_id),
        budget_status: budget_status(fleet, &logs, &vehicles_by_id),
        recent_anomalies: recent_anomalies(&logs, &vehicles_by_id, &drivers_by_id),
        tag_breakdown: tag_breakdown(&logs),
    }
}

fn summarize(logs: &[&FuelLog], trips: &[&Trip]) -> AnalyticsSummary {
    AnalyticsSummary {
        total_fuel_used: logs.iter().map(|log| log.liters).sum(),
        total_cost: logs.iter().map(|log| log.cost).sum(),
        average_efficiency: mean(logs.iter().map(|log| log.efficiency)).unwrap_or(0.0),
        total_trips: trips.len(),
        anomalies_count: logs.iter().filter(|log| log.is_anomalous).count(),
    }
}

/// Per-vehicle totals for every vehicle on the roster, heaviest fuel user first.
fn vehicle_performance(vehicles: &[Vehicle], logs: &[&FuelLog], trips: &[&Trip]) -> Vec<VehiclePerformance> {
    let mut performance: Vec<VehiclePerformance> = vehicles
        .iter()
        .map(|vehicle| {
            let own_logs: Vec<&&FuelLog> = logs.iter().filter(|log| log.vehicle_id == vehicle.id).collect();
            let fuel_used = own_logs.iter().map(|log| log.liters).sum();
            let cost: f64 = own_logs.iter().map(|log| log.cost).sum();
            let efficiency = mean(own_logs.iter().map(|log| log.efficiency)).unwrap_or(vehicle.efficiency_score);
            let trip_count = trips.iter().filter(|trip| trip.vehicle_id == vehicle.id).count();

            VehiclePerformance {
                vehicle_id: vehicle.id.clone(),
                name: vehicle.name.clone(),
                department: vehicle.department.clone(),
                fuel_used,
                cost,
                efficiency,
                trips: trip_count,
                avg_cost_per_trip: per_trip(cost, trip_count),
            }
        })
        .collect();

    performance.sort_by(|a, b| b.fuel_used.total_cmp(&a.fuel_used));
    performance
}

/// Per-driver totals for every driver on the roster, most efficient first.
fn driver_performance(drivers: &[Driver], logs: &[&FuelLog], trips: &[&Trip]) -> Vec<DriverPerformance> {
    let mut performance: Vec<DriverPerformance> = drivers
        .iter()
        .map(|driver| {
            let own_logs: Vec<&&FuelLog> = logs.iter().filter(|log| log.driver_id == driver.id).collect();
            let fuel_used = own_logs.iter().map(|log| log.liters).sum();
            let cost: f64 = own_logs.iter().map(|log| log.cost).sum();
            let efficiency = mean(own_logs.iter().map(|log| log.efficiency)).unwrap_or(driver.efficiency_score);
            let trip_count = trips.iter().filter(|trip| trip.driver_id == driver.id).count();

            DriverPerformance {
                driver_id: driver.id.clone(),
                name: driver.name.clone(),
                department: driver.department.clone(),
                fuel_used,
                cost,
                efficiency,
                trips: trip_count,
                avg_cost_per_trip: per_trip(cost, trip_count),
            }
        })
        .collect();

    performance.sort_by(|a, b| b.efficiency.total_cmp(&a.efficiency));
    performance
}

fn department_stats(
    vehicles: &[Vehicle],
    logs: &[&FuelLog],
    vehicles_by_id: &HashMap<&str, &Vehicle>,
) -> Vec<DepartmentStat> {
    // department -> (fuel used, vehicle count)
    let mut departments: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for vehicle in vehicles {
        departments.entry(vehicle.department.as_str()).or_insert((0.0, 0)).1 += 1;
    }

    for log in logs {
        if let Some(vehicle) = vehicles_by_id.get(log.vehicle_id.as_str()) {
            if let Some(entry) = departments.get_mut(vehicle.department.as_str()) {
                entry.0 += log.liters;
            }
        }
    }

    departments
        .into_iter()
        .map(|(department, (fuel_used, vehicle_count))| DepartmentStat {
            department: department.to_string(),
            fuel_used,
            vehicle_count,
        })
        .collect()
}

fn budget_status(fleet: &FleetSnapshot, logs: &[&FuelLog], vehicles_by_id: &HashMap<&str, &Vehicle>) -> Vec<BudgetReport> {
    fleet
        .budgets
        .iter()
        .map(|budget| {
            let covered: HashSet<&str> = budget
                .vehicle_ids
                .iter()
                .map(String::as_str)
                .filter(|id| vehicles_by_id.contains_key(id))
                .collect();
            let current_spend: f64 = logs
                .iter()
                .filter(|log| covered.contains(log.vehicle_id.as_str()))
                .map(|log| log.cost)
                .sum();
            let status = get_budget_status(current_spend, budget.monthly_limit, budget.effective_alert_threshold());

            BudgetReport {
                budget_id: budget.id.clone(),
                department: budget.department.clone(),
                period: budget.period,
                limit: budget.monthly_limit,
                current_spend,
                status: status.status,
                percentage: status.percentage,
                remaining: status.remaining,
            }
        })
        .collect()
}

fn recent_anomalies(
    logs: &[&FuelLog],
    vehicles_by_id: &HashMap<&str, &Vehicle>,
    drivers_by_id: &HashMap<&str, &Driver>,
) -> Vec<RecentAnomaly> {
    let mut anomalous: Vec<&FuelLog> = logs.iter().copied().filter(|log| log.is_anomalous).collect();
    anomalous.sort_by(|a, b| b.date.cmp(&a.date));

    anomalous
        .into_iter()
        .take(RECENT_ANOMALY_LIMIT)
        .map(|log| RecentAnomaly {
            log_id: log.id.clone(),
            date: log.date,
            vehicle_id: log.vehicle_id.clone(),
            vehicle_name: vehicles_by_id
                .get(log.vehicle_id.as_str())
                .map(|v| v.name.clone())
                .unwrap_or_else(|| UNKNOWN_VEHICLE.to_string()),
            driver_id: log.driver_id.clone(),
            driver_name: drivers_by_id
                .get(log.driver_id.as_str())
                .map(|d| d.name.clone())
                .unwrap_or_else(|| UNKNOWN_DRIVER.to_string()),
            liters: log.liters,
            cost: log.cost,
            reason: log.anomaly_reason.clone(),
        })
        .collect()
}

fn tag_breakdown(logs: &[&FuelLog]) -> Vec<TagStat> {
    let mut tags: BTreeMap<&str, TagStat> = BTreeMap::new();
    for log in logs {
        let tag = match log.tag.trim() {
            "" => UNTAGGED,
            tag => tag,
        };
        let stat = tags.entry(tag).or_insert_with(|| TagStat {
            tag: tag.to_string(),
            fuel_used: 0.0,
            cost: 0.0,
            logs: 0,
        });
        stat.fuel_used += log.liters;
        stat.cost += log.cost;
        stat.logs += 1;
    }

    let mut breakdown: Vec<TagStat> = tags.into_values().collect();
    breakdown.sort_by(|a, b| b.fuel_used.total_cmp(&a.fuel_used));
    breakdown
}

/// Fleet-wide rollups over all logs, using the configured vehicle scores.
///
/// `average_efficiency` is the mean of the vehicles' static efficiency scores,
/// not of observed log efficiency: it describes the configured fleet rather
/// than a period.
pub fn calculate_efficiency_metrics(vehicles: &[Vehicle], fuel_logs: &[FuelLog]) -> EfficiencyMetrics {
    let total_vehicles = vehicles.len();
    let active_vehicles = vehicles.iter().filter(|v| v.status == VehicleStatus::Active).count();
    let utilization_rate = if total_vehicles == 0 {
        0.0
    } else {
        active_vehicles as f64 / total_vehicles as f64 * 100.0
    };

    EfficiencyMetrics {
        total_vehicles,
        active_vehicles,
        utilization_rate,
        total_fuel_used: fuel_logs.iter().map(|log| log.liters).sum(),
        total_cost: fuel_logs.iter().map(|log| log.cost).sum(),
        average_efficiency: mean(vehicles.iter().map(|v| v.efficiency_score)).unwrap_or(0.0),
    }
}

/// Fuel and money saved against each vehicle's baseline.
///
/// Only under-consumption counts as saving; logs that used more than expected
/// contribute nothing, as do logs whose vehicle is unknown. The average is
/// taken over every log.
pub fn calculate_savings_metrics(fuel_logs: &[FuelLog], vehicles: &[Vehicle], fuel_price: f64) -> SavingsMetrics {
    let vehicles_by_id: HashMap<&str, &Vehicle> = vehicles.iter().map(|v| (v.id.as_str(), v)).collect();

    let mut total_liters_saved = 0.0;
    let mut total_savings = 0.0;
    for log in fuel_logs {
        let Some(vehicle) = vehicles_by_id.get(log.vehicle_id.as_str()) else {
            continue;
        };
        let expected = expected_fuel(log.trip_distance, vehicle.average_consumption);
        let liters_saved = (expected - log.liters).max(0.0);
        total_liters_saved += liters_saved;
        total_savings += liters_saved * fuel_price;
    }

    let average_savings_per_trip = if fuel_logs.is_empty() {
        0.0
    } else {
        total_savings / fuel_logs.len() as f64
    };

    SavingsMetrics {
        total_savings,
        total_liters_saved,
        average_savings_per_trip,
    }
}

/// Totals predicted vs actual fuel over completed trips.
///
/// Savings may be negative when the fleet used more fuel than predicted.
pub fn calculate_trip_savings(trips: &[Trip], fuel_price: f64) -> TripSavings {
    let completed: Vec<&Trip> = trips.iter().filter(|trip| trip.status == TripStatus::Completed).collect();
    let total_predicted_fuel: f64 = completed.iter().map(|trip| trip.predicted_fuel).sum();
    let total_actual_fuel: f64 = completed.iter().map(|trip| trip.actual_fuel).sum();

    TripSavings {
        trips_counted: completed.len(),
        total_predicted_fuel,
        total_actual_fuel,
        total_savings: calculate_fuel_savings(total_predicted_fuel, total_actual_fuel, fuel_price),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_range_parsing() {
        assert_eq!("30".parse::<TimeRange>().unwrap().as_days(), 30);
        assert_eq!(" 7 ".parse::<TimeRange>().unwrap().as_days(), 7);
        assert!("0".parse::<TimeRange>().is_err());
        assert!("-5".parse::<TimeRange>().is_err());
        assert!("month".parse::<TimeRange>().is_err());
    }

    #[test]
    fn test_window_start_saturates_for_huge_ranges() {
        let now = chrono::NaiveDate::from_ymd_opt(2025, 1, 31).unwrap().and_hms_opt(12, 0, 0).unwrap();
        let range: TimeRange = "4000000000".parse().unwrap();
        assert_eq!(range.window_start(now), NaiveDateTime::MIN);
        assert_eq!(TimeRange::days(u32::MAX).unwrap().window_start(now), NaiveDateTime::MIN);
        assert_eq!(TimeRange::days(1).unwrap().window_start(now), now - Duration::days(1));
    }

    #[test]
    fn test_mean_of_nothing_is_none() {
        assert_eq!(mean(std::iter::empty()), None);
        assert_eq!(mean([2.0, 4.0].into_iter()), Some(3.0));
    }

    #[test]
    fn test_per_trip_guards_zero_trips() {
        assert_eq!(per_trip(120.0, 0), 0.0);
        assert_eq!(per_trip(120.0, 4), 30.0);
    }
}
