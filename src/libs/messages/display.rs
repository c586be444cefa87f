//! Display implementation for fuelwise application messages.
//!
//! Every user-facing string is produced here, so wording stays consistent
//! across commands and the message macros only ever deal with [`Message`]
//! values.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed, defaults will be used".to_string(),
            Message::ConfigModuleAnalytics => "Analytics settings".to_string(),
            Message::ConfigModuleStore => "Fleet store settings".to_string(),

            // === IMPORT MESSAGES ===
            Message::ImportingSnapshot(path) => format!("Importing fleet snapshot from {}", path),
            Message::SnapshotImported {
                vehicles,
                drivers,
                fuel_logs,
                trips,
                budgets,
            } => format!(
                "Imported {} vehicle(s), {} driver(s), {} fuel log(s), {} trip(s) and {} budget(s)",
                vehicles, drivers, fuel_logs, trips, budgets
            ),
            Message::AnomaliesFlagged(count) => format!("{} fuel log(s) flagged as anomalous", count),
            Message::SnapshotEmpty => "The snapshot contains no records, nothing to import".to_string(),
            Message::StoreCleared => "Existing fleet records removed".to_string(),

            // === DATA SOURCE MESSAGES ===
            Message::LoadingSnapshotFile(path) => format!("Reading fleet data from {}", path),
            Message::LoadingFromStore(path) => format!("Reading fleet data from store {}", path),
            Message::StoreEmpty => "The fleet store is empty. Run 'fuelwise import <FILE>' first.".to_string(),

            // === REPORT MESSAGES ===
            Message::ReportHeader(days, view) => format!("Fleet report for the last {} days ({} view)", days, view),
            Message::NoFleetData => "No fuel logs, vehicles or drivers yet. Nothing to report.".to_string(),
            Message::SummaryHeader => "Summary".to_string(),
            Message::FuelTrendHeader => "Fuel usage trend (L)".to_string(),
            Message::CostTrendHeader => "Fuel cost trend".to_string(),
            Message::VehiclesHeader => "Vehicle performance".to_string(),
            Message::DriversHeader => "Driver performance".to_string(),
            Message::DepartmentsHeader => "Departments".to_string(),
            Message::BudgetsHeader => "Budgets".to_string(),
            Message::NoBudgets => "No budgets configured.".to_string(),
            Message::AnomaliesHeader => "Recent anomalies".to_string(),
            Message::NoAnomalies => "No anomalies in this period.".to_string(),
            Message::TagsHeader => "Fuel by tag".to_string(),

            // === BUDGET ALERTS ===
            Message::BudgetWarning(department, percentage) => {
                format!("Budget for '{}' is at {:.1}% of its limit", department, percentage)
            }
            Message::BudgetCritical(department, percentage) => {
                format!("Budget for '{}' is exhausted: {:.1}% of its limit spent", department, percentage)
            }

            // === METRICS MESSAGES ===
            Message::EfficiencyHeader => "Fleet efficiency".to_string(),
            Message::SavingsHeader => "Fuel savings against baseline".to_string(),
            Message::TripSavingsHeader => "Trip savings against prediction".to_string(),

            // === PREDICTION MESSAGES ===
            Message::PredictionHeader(vehicle, driver) => format!("Fuel prediction for {} driven by {}", vehicle, driver),
            Message::VehicleNotFound(id) => format!("Vehicle with ID '{}' not found", id),
            Message::DriverNotFound(id) => format!("Driver with ID '{}' not found", id),

            // === STORE MESSAGES ===
            Message::FuelLogNotFound(id) => format!("Fuel log with ID '{}' not found", id),
            Message::TripNotFound(id) => format!("Trip with ID '{}' not found", id),
            Message::BudgetNotFound(id) => format!("Budget with ID '{}' not found", id),

            // === EXPORT MESSAGES ===
            Message::ExportingData(format) => format!("Exporting fleet report as {}...", format),
            Message::ExportCompleted(path) => format!("Report exported to: {}", path),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select settings to configure".to_string(),
            Message::PromptFuelPrice => "Enter fuel price per liter".to_string(),
            Message::PromptAlertThreshold => "Enter budget alert threshold (%)".to_string(),
            Message::PromptDefaultTimeRange => "Enter default report range (days)".to_string(),
            Message::PromptDefaultView => "Select default trend view".to_string(),
            Message::PromptDatabasePath => "Enter fleet database path (leave empty for default)".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed successfully".to_string(),
            Message::NothingToRollback => "Nothing to rollback".to_string(),
            Message::RollingBack(from, to) => format!("Rolling back from v{} to v{}", from, to),
            Message::RollbackCompleted(version) => format!("Rolled back to v{}", version),
            Message::DatabaseVersion(version) => format!("Database schema version: v{}", version),
            Message::DatabaseNeedsUpdate => "Database has pending migrations".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
        };
        write!(f, "{}", text)
    }
}
