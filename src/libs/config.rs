//! Configuration management for fuelwise.
//!
//! Settings are stored as pretty-printed JSON in the per-OS data directory
//! (see [`DataStorage`]). Each section is optional, so a missing file or a
//! missing section simply means "use the defaults".
//!
//! ## Configuration Structure
//!
//! - **Analytics Config**: Fuel price, budget alert threshold and report defaults
//! - **Store Config**: Location of the SQLite fleet store
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use fuelwise::libs::config::Config;
//!
//! let config = Config::read()?;
//! let analytics = config.analytics_or_default();
//! println!("Fuel price: {:.2}", analytics.fuel_price);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::metrics::{DEFAULT_ALERT_THRESHOLD, DEFAULT_FUEL_PRICE};
use crate::libs::trends::TrendView;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Analytics settings.
///
/// ## Fields
///
/// - `fuel_price`: price per liter used for savings calculations
/// - `alert_threshold`: budget usage percentage that triggers a warning for
///   budgets that do not carry their own threshold
/// - `default_time_range`: report window in days when `--range` is omitted
/// - `default_view`: trend grouping when `--view` is omitted
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsConfig {
    pub fuel_price: f64,
    pub alert_threshold: f64,
    pub default_time_range: u32,
    pub default_view: TrendView,
}

impl Default for AnalyticsConfig {
    /// Default values:
    /// - 1.50 per liter
    /// - 80% alert threshold
    /// - 30 day window
    /// - monthly trend view
    fn default() -> Self {
        AnalyticsConfig {
            fuel_price: DEFAULT_FUEL_PRICE,
            alert_threshold: DEFAULT_ALERT_THRESHOLD,
            default_time_range: 30,
            default_view: TrendView::Monthly,
        }
    }
}

/// Location of the fleet store.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Custom database file; the data directory default is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics: Option<AnalyticsConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<StoreConfig>,
}

impl Config {
    /// Reads configuration from the data directory.
    ///
    /// A missing file is not an error and yields the default configuration.
    /// A file that exists but cannot be parsed is reported as an error.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if it exists.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    pub fn analytics_or_default(&self) -> AnalyticsConfig {
        self.analytics.clone().unwrap_or_default()
    }

    pub fn database_path(&self) -> Option<PathBuf> {
        self.store.as_ref().and_then(|store| store.database_path.clone())
    }

    /// Runs the interactive setup wizard, starting from the saved values.
    pub fn init() -> Result<Self> {
        let mut config = match Self::read() {
            Ok(config) => config,
            Err(_) => Config::default(),
        };

        let modules = vec![
            ConfigModule {
                key: "analytics".to_string(),
                name: "Analytics".to_string(),
            },
            ConfigModule {
                key: "store".to_string(),
                name: "Fleet store".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "analytics" => {
                    let default = config.analytics_or_default();
                    msg_print!(Message::ConfigModuleAnalytics);

                    let views = [TrendView::Daily, TrendView::Weekly, TrendView::Monthly];
                    let default_view_index = views.iter().position(|v| *v == default.default_view).unwrap_or(2);

                    config.analytics = Some(AnalyticsConfig {
                        fuel_price: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptFuelPrice.to_string())
                            .default(default.fuel_price)
                            .interact_text()?,
                        alert_threshold: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptAlertThreshold.to_string())
                            .default(default.alert_threshold)
                            .interact_text()?,
                        default_time_range: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDefaultTimeRange.to_string())
                            .default(default.default_time_range)
                            .validate_with(|days: &u32| if *days > 0 { Ok(()) } else { Err("range must be at least one day") })
                            .interact_text()?,
                        default_view: views[Select::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDefaultView.to_string())
                            .items(&views.iter().map(|v| v.to_string()).collect::<Vec<_>>())
                            .default(default_view_index)
                            .interact()?],
                    });
                }
                "store" => {
                    msg_print!(Message::ConfigModuleStore);
                    let current = config
                        .database_path()
                        .map(|path| path.display().to_string())
                        .unwrap_or_default();
                    let path: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDatabasePath.to_string())
                        .default(current)
                        .allow_empty(true)
                        .interact_text()?;
                    config.store = Some(StoreConfig {
                        database_path: if path.trim().is_empty() { None } else { Some(PathBuf::from(path.trim())) },
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
