//! Fleet domain records and the snapshot handed to the analytics engine.
//!
//! Every record here is a plain, immutable-by-convention value. The records
//! are created and changed by the persistence layer (the local SQLite store or
//! an exported JSON document); the analytics code only ever reads them.
//!
//! ## Wire Format
//!
//! Records use camelCase field names so that document-database exports load
//! without a mapping step:
//!
//! ```json
//! {
//!   "vehicles": [{ "id": "v1", "name": "Van 1", "averageConsumption": 10.0, ... }],
//!   "fuelLogs": [{ "id": "f1", "vehicleId": "v1", "date": "2025-01-15T08:30:00", ... }]
//! }
//! ```
//!
//! Missing collections default to empty, missing optional fields to their
//! documented defaults.

use crate::libs::error::Result;
use crate::libs::metrics::{describe_fuel_anomaly, detect_fuel_anomalies, DEFAULT_ALERT_THRESHOLD};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Operational state of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    #[default]
    Active,
    Maintenance,
    Inactive,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Active => "active",
            VehicleStatus::Maintenance => "maintenance",
            VehicleStatus::Inactive => "inactive",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(VehicleStatus::Active),
            "maintenance" => Some(VehicleStatus::Maintenance),
            "inactive" => Some(VehicleStatus::Inactive),
            _ => None,
        }
    }
}

/// Lifecycle state of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TripStatus {
    Planned,
    InProgress,
    #[default]
    Completed,
    Cancelled,
}

impl TripStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Planned => "planned",
            TripStatus::InProgress => "in-progress",
            TripStatus::Completed => "completed",
            TripStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "planned" => Some(TripStatus::Planned),
            "in-progress" => Some(TripStatus::InProgress),
            "completed" => Some(TripStatus::Completed),
            "cancelled" => Some(TripStatus::Cancelled),
            _ => None,
        }
    }
}

/// Budget accounting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    #[default]
    Monthly,
    Weekly,
}

impl BudgetPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetPeriod::Monthly => "monthly",
            BudgetPeriod::Weekly => "weekly",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "monthly" => Some(BudgetPeriod::Monthly),
            "weekly" => Some(BudgetPeriod::Weekly),
            _ => None,
        }
    }
}

/// A fleet vehicle with its configured consumption baseline.
///
/// `average_consumption` is the baseline in L/100km. Every computation that
/// divides by it guards against a non-positive value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_plate: Option<String>,
    pub average_consumption: f64,
    #[serde(default)]
    pub efficiency_score: f64,
    #[serde(default)]
    pub monthly_budget: f64,
    #[serde(default)]
    pub current_spend: f64,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub status: VehicleStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub efficiency_score: f64,
    #[serde(default)]
    pub total_trips: u32,
    #[serde(default)]
    pub total_distance: f64,
    #[serde(default)]
    pub total_fuel_used: f64,
    #[serde(default)]
    pub department: String,
}

/// One fueling event.
///
/// `efficiency` is the observed consumption for this event in L/100km.
/// `is_anomalous` may come precomputed from the source or be filled in on
/// import by [`FleetSnapshot::annotate_anomalies`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelLog {
    pub id: String,
    pub vehicle_id: String,
    pub driver_id: String,
    pub date: NaiveDateTime,
    pub liters: f64,
    pub cost: f64,
    #[serde(default)]
    pub trip_distance: f64,
    #[serde(default)]
    pub efficiency: f64,
    #[serde(default)]
    pub is_anomalous: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anomaly_reason: Option<String>,
    #[serde(default)]
    pub tag: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub vehicle_id: String,
    pub driver_id: String,
    pub start_time: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub fuel_used: f64,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub status: TripStatus,
    #[serde(default)]
    pub predicted_fuel: f64,
    #[serde(default)]
    pub actual_fuel: f64,
    #[serde(default)]
    pub route: String,
    #[serde(default)]
    pub tag: String,
}

/// A department fuel budget covering a set of vehicles.
///
/// A budget without its own `alert_threshold` is evaluated against the
/// configured default (80% unless overridden).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub department: String,
    #[serde(default)]
    pub period: BudgetPeriod,
    pub monthly_limit: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_limit: Option<f64>,
    #[serde(default)]
    pub current_spend: f64,
    #[serde(default)]
    pub vehicle_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_threshold: Option<f64>,
}

impl Budget {
    pub fn effective_alert_threshold(&self) -> f64 {
        self.alert_threshold.unwrap_or(DEFAULT_ALERT_THRESHOLD)
    }
}

/// The complete set of fleet collections the analytics engine works on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetSnapshot {
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
    #[serde(default)]
    pub drivers: Vec<Driver>,
    #[serde(default)]
    pub fuel_logs: Vec<FuelLog>,
    #[serde(default)]
    pub trips: Vec<Trip>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
}

impl FleetSnapshot {
    /// Parses a snapshot from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a snapshot document from disk.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn driver(&self, id: &str) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
            && self.drivers.is_empty()
            && self.fuel_logs.is_empty()
            && self.trips.is_empty()
            && self.budgets.is_empty()
    }

    /// Recomputes the anomaly flag of every fuel log against its vehicle baseline.
    ///
    /// Logs whose vehicle cannot be resolved keep whatever flag they arrived
    /// with. Returns the number of logs flagged as anomalous afterwards.
    pub fn annotate_anomalies(&mut self) -> usize {
        let vehicles = &self.vehicles;
        for log in self.fuel_logs.iter_mut() {
            let Some(vehicle) = vehicles.iter().find(|v| v.id == log.vehicle_id) else {
                continue;
            };
            log.is_anomalous = detect_fuel_anomalies(log, vehicle);
            log.anomaly_reason = describe_fuel_anomaly(log, vehicle);
        }
        self.fuel_logs.iter().filter(|log| log.is_anomalous).count()
    }

    /// Gives every budget without its own alert threshold the supplied one.
    pub fn fill_alert_thresholds(&mut self, threshold: f64) {
        for budget in self.budgets.iter_mut().filter(|b| b.alert_threshold.is_none()) {
            budget.alert_threshold = Some(threshold);
        }
    }
}
