//! Metric primitives for fuel efficiency, anomalies, savings and budgets.
//!
//! Every function in this module is a pure calculation over one record or a
//! pair of values. The aggregation engine in [`crate::libs::analytics`] builds
//! its rollups out of these primitives.
//!
//! ## Key Formulas
//!
//! ```text
//! Efficiency Score  = clamp(vehicle_average / actual_consumption * 100, 0, 100)
//! Expected Fuel     = trip_distance / 100 * vehicle_average
//! Fuel Variance     = |liters - expected| / expected
//! Fuel Savings      = (predicted - actual) * fuel_price
//! Predicted Fuel    = distance / 100 * vehicle_consumption * (2 - driver_efficiency / 100)
//! ```
//!
//! ## Degenerate Input
//!
//! None of these functions can fail. Zero or negative denominators are caught
//! up front and answered with a neutral value (0, "good", "not anomalous"),
//! and any NaN that slips through is coerced to 0 before it is returned.

use crate::libs::fleet::{FuelLog, Vehicle};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fuel price per liter used when no price is configured.
pub const DEFAULT_FUEL_PRICE: f64 = 1.50;

/// Budget usage percentage at which a budget turns to warning.
pub const DEFAULT_ALERT_THRESHOLD: f64 = 80.0;

/// Relative deviation above which any fuel log is anomalous.
pub const ANOMALY_VARIANCE_THRESHOLD: f64 = 0.30;

/// Stricter relative deviation applied when less fuel was bought than expected.
pub const UNDERUSE_VARIANCE_THRESHOLD: f64 = 0.20;

/// Severity of a budget's spend relative to its limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetLevel {
    #[default]
    Good,
    Warning,
    Critical,
}

impl fmt::Display for BudgetLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            BudgetLevel::Good => "good",
            BudgetLevel::Warning => "warning",
            BudgetLevel::Critical => "critical",
        };
        write!(f, "{}", text)
    }
}

/// Result of evaluating spend against a budget limit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BudgetStatus {
    pub status: BudgetLevel,
    pub percentage: f64,
    pub remaining: f64,
}

/// Replaces NaN with zero.
fn finite_or_zero(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

/// Liters a trip of `distance` km should need at `average_consumption` L/100km.
pub fn expected_fuel(distance: f64, average_consumption: f64) -> f64 {
    (distance / 100.0) * average_consumption
}

/// Scores observed consumption against the vehicle's baseline.
///
/// Consuming exactly the baseline scores 100, consuming twice the baseline
/// scores 50. Anything better than the baseline is capped at 100.
///
/// A zero (or negative) actual consumption is scored as perfect efficiency,
/// which is where the unguarded ratio would clamp anyway. NaN input yields 0.
///
/// # Examples
///
/// ```rust
/// use fuelwise::libs::metrics::calculate_efficiency_score;
///
/// assert_eq!(calculate_efficiency_score(10.0, 10.0), 100.0);
/// assert_eq!(calculate_efficiency_score(20.0, 10.0), 50.0);
/// assert_eq!(calculate_efficiency_score(5.0, 10.0), 100.0);
/// ```
pub fn calculate_efficiency_score(actual_consumption: f64, vehicle_average: f64) -> f64 {
    if actual_consumption.is_nan() || vehicle_average.is_nan() {
        return 0.0;
    }
    if actual_consumption <= 0.0 {
        return 100.0;
    }
    let score = (vehicle_average / actual_consumption) * 100.0;
    finite_or_zero(score.clamp(0.0, 100.0))
}

/// Relative deviation of a log's liters from what its vehicle should have used.
///
/// Returns `None` when the expected amount is zero or negative, i.e. when the
/// trip distance or the vehicle baseline carries no information.
pub fn fuel_variance(log: &FuelLog, vehicle: &Vehicle) -> Option<f64> {
    let expected = expected_fuel(log.trip_distance, vehicle.average_consumption);
    if expected <= 0.0 || expected.is_nan() {
        return None;
    }
    let variance = (log.liters - expected).abs() / expected;
    if variance.is_nan() {
        None
    } else {
        Some(variance)
    }
}

/// Checks whether a fuel log deviates suspiciously from the vehicle baseline.
///
/// A log is anomalous when it deviates by more than 30% in either direction,
/// or by more than 20% when less fuel was bought than expected.
///
/// Logs with zero expected fuel (zero trip distance) are never anomalous.
pub fn detect_fuel_anomalies(log: &FuelLog, vehicle: &Vehicle) -> bool {
    let Some(variance) = fuel_variance(log, vehicle) else {
        return false;
    };
    let expected = expected_fuel(log.trip_distance, vehicle.average_consumption);
    variance > ANOMALY_VARIANCE_THRESHOLD || (log.liters < expected && variance > UNDERUSE_VARIANCE_THRESHOLD)
}

/// Human-readable reason for an anomalous log, `None` for a normal one.
pub fn describe_fuel_anomaly(log: &FuelLog, vehicle: &Vehicle) -> Option<String> {
    if !detect_fuel_anomalies(log, vehicle) {
        return None;
    }
    let expected = expected_fuel(log.trip_distance, vehicle.average_consumption);
    let variance = fuel_variance(log, vehicle)?;
    let direction = if log.liters > expected { "more" } else { "less" };
    Some(format!(
        "Used {:.0}% {} fuel than expected ({:.1} L vs {:.1} L)",
        variance * 100.0,
        direction,
        log.liters,
        expected
    ))
}

/// Money saved by using less fuel than predicted.
///
/// The result is negative when more fuel was used than predicted; callers
/// must not assume a non-negative saving.
///
/// # Examples
///
/// ```rust
/// use fuelwise::libs::metrics::{calculate_fuel_savings, DEFAULT_FUEL_PRICE};
///
/// assert_eq!(calculate_fuel_savings(20.0, 18.0, DEFAULT_FUEL_PRICE), 3.0);
/// assert_eq!(calculate_fuel_savings(18.0, 20.0, DEFAULT_FUEL_PRICE), -3.0);
/// ```
pub fn calculate_fuel_savings(predicted_fuel: f64, actual_fuel: f64, fuel_price: f64) -> f64 {
    finite_or_zero((predicted_fuel - actual_fuel) * fuel_price)
}

/// Evaluates spend against a budget limit.
///
/// - Non-positive budgets report `good` with zero percentage and remaining.
/// - Spend at or above the budget is `critical`.
/// - Spend at or above `threshold` percent is `warning`.
///
/// NaN values produced from bad upstream data are reported as 0.
///
/// # Examples
///
/// ```rust
/// use fuelwise::libs::metrics::{get_budget_status, BudgetLevel};
///
/// let status = get_budget_status(850.0, 1000.0, 80.0);
/// assert_eq!(status.status, BudgetLevel::Warning);
/// assert_eq!(status.percentage, 85.0);
/// assert_eq!(status.remaining, 150.0);
/// ```
pub fn get_budget_status(current_spend: f64, budget: f64, threshold: f64) -> BudgetStatus {
    if budget <= 0.0 || budget.is_nan() {
        return BudgetStatus {
            status: BudgetLevel::Good,
            percentage: 0.0,
            remaining: 0.0,
        };
    }

    let percentage = finite_or_zero((current_spend / budget) * 100.0);
    let remaining = finite_or_zero(budget - current_spend);

    let status = if percentage >= 100.0 {
        BudgetLevel::Critical
    } else if percentage >= threshold {
        BudgetLevel::Warning
    } else {
        BudgetLevel::Good
    };

    BudgetStatus { status, percentage, remaining }
}

/// Predicts the liters a driver will need for a trip in a given vehicle.
///
/// A linear derating of the vehicle baseline by driver efficiency: an
/// efficiency of 100 predicts exactly the baseline, 0 predicts twice the
/// baseline. The formula is kept exact, it is not a physical model.
///
/// # Examples
///
/// ```rust
/// use fuelwise::libs::metrics::predict_fuel_consumption;
///
/// assert_eq!(predict_fuel_consumption(100.0, 10.0, 100.0), 10.0);
/// assert_eq!(predict_fuel_consumption(100.0, 10.0, 50.0), 15.0);
/// assert_eq!(predict_fuel_consumption(100.0, 10.0, 0.0), 20.0);
/// ```
pub fn predict_fuel_consumption(distance: f64, vehicle_consumption: f64, driver_efficiency: f64) -> f64 {
    let base = expected_fuel(distance, vehicle_consumption);
    finite_or_zero(base * (2.0 - driver_efficiency / 100.0))
}
