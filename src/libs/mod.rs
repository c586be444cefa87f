//! Core library modules for fuelwise.
//!
//! ## Features
//!
//! - **Domain**: Fleet records and the snapshot handed to the engine
//! - **Analytics**: Metric primitives, trend grouping and dashboard aggregation
//! - **Core Infrastructure**: Configuration, data storage, errors, messaging
//! - **User Interface**: Console tables, value formatting, report export
//!
//! ## Usage
//!
//! ```rust
//! use fuelwise::libs::analytics::{calculate_analytics_data, TimeRange};
//! use fuelwise::libs::fleet::FleetSnapshot;
//! use fuelwise::libs::trends::TrendView;
//!
//! let fleet = FleetSnapshot::from_json_str(r#"{ "vehicles": [], "drivers": [] }"#)?;
//! let now = chrono::Local::now().naive_local();
//! let data = calculate_analytics_data(&fleet, TimeRange::default(), TrendView::Weekly, now);
//! assert!(data.vehicle_performance.is_empty());
//! # Ok::<(), fuelwise::libs::error::FleetError>(())
//! ```

pub mod analytics;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod fleet;
pub mod formatter;
pub mod messages;
pub mod metrics;
pub mod trends;
pub mod view;
