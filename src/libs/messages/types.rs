#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleAnalytics,
    ConfigModuleStore,

    // === IMPORT MESSAGES ===
    ImportingSnapshot(String), // path
    SnapshotImported {
        vehicles: usize,
        drivers: usize,
        fuel_logs: usize,
        trips: usize,
        budgets: usize,
    },
    AnomaliesFlagged(usize), // count
    SnapshotEmpty,
    StoreCleared,

    // === DATA SOURCE MESSAGES ===
    LoadingSnapshotFile(String), // path
    LoadingFromStore(String),    // path
    StoreEmpty,

    // === REPORT MESSAGES ===
    ReportHeader(u32, String), // days, view
    NoFleetData,
    SummaryHeader,
    FuelTrendHeader,
    CostTrendHeader,
    VehiclesHeader,
    DriversHeader,
    DepartmentsHeader,
    BudgetsHeader,
    NoBudgets,
    AnomaliesHeader,
    NoAnomalies,
    TagsHeader,

    // === BUDGET ALERTS ===
    BudgetWarning(String, f64),  // department, percentage
    BudgetCritical(String, f64), // department, percentage

    // === METRICS MESSAGES ===
    EfficiencyHeader,
    SavingsHeader,
    TripSavingsHeader,

    // === PREDICTION MESSAGES ===
    PredictionHeader(String, String), // vehicle name, driver name
    VehicleNotFound(String),          // id
    DriverNotFound(String),           // id

    // === STORE MESSAGES ===
    FuelLogNotFound(String), // id
    TripNotFound(String),    // id
    BudgetNotFound(String),  // id

    // === EXPORT MESSAGES ===
    ExportingData(String),   // format
    ExportCompleted(String), // path

    // === PROMPTS ===
    PromptSelectModules,
    PromptFuelPrice,
    PromptAlertThreshold,
    PromptDefaultTimeRange,
    PromptDefaultView,
    PromptDatabasePath,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    NothingToRollback,
    RollingBack(u32, u32),  // from, to
    RollbackCompleted(u32), // version
    DatabaseVersion(u32),
    DatabaseNeedsUpdate,
    DatabaseUpToDate,
    MigrationHistory,
}
