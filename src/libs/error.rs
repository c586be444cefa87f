//! Typed errors for the fuelwise library surface.
//!
//! The analytics core itself is total and never fails; these errors cover the
//! boundaries around it: parsing user-supplied parameters, loading fleet
//! snapshots and resolving records by id.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid time range '{0}': expected a positive number of days")]
    InvalidTimeRange(String),

    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),

    #[error("Driver not found: {0}")]
    DriverNotFound(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

pub type Result<T> = std::result::Result<T, FleetError>;
