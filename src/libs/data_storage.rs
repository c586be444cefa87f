use std::env::consts::OS;
use std::env::var;
use std::path::{Path, PathBuf};
use std::{fs, io};

pub const VENDOR_NAME: &str = "fleetops";
pub const APP_NAME: &str = "fuelwise";

/// Overrides the platform data directory when set.
pub const DATA_DIR_ENV: &str = "FUELWISE_DATA_DIR";

/// Per-OS application data directory holding the config file and the fleet store.
#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        if let Ok(dir) = var(DATA_DIR_ENV) {
            return Self { base_path: PathBuf::from(dir) };
        }

        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        let base_path = Path::new(&base_path).join(VENDOR_NAME).join(APP_NAME);

        Self { base_path }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of `file_name` inside the data directory, creating the directory if needed.
    pub fn get_path(&self, file_name: &str) -> io::Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
