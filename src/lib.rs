//! # Fuelwise - Fleet Fuel Analytics
//!
//! A command-line fleet fuel tracker that turns fuel logs, trips, vehicle and
//! driver rosters and department budgets into efficiency, cost and anomaly
//! reports.
//!
//! ## Features
//!
//! - **Analytics Engine**: Period totals, fuel and cost trends, per-vehicle,
//!   per-driver and per-department rollups
//! - **Anomaly Detection**: Fuel logs far from the vehicle baseline are flagged
//! - **Budget Tracking**: Spend per budget against its limit and alert threshold
//! - **Fuel Prediction**: Expected fuel for a planned trip
//! - **Local Store**: SQLite persistence with versioned migrations
//! - **Data Export**: CSV, JSON, HTML and Excel reports
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fuelwise::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
