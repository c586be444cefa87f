//! Convenient macros for application messaging and logging.
//!
//! The macros pick between two output modes at runtime:
//!
//! - **Normal mode**: plain `println!`/`eprintln!` with an emoji prefix
//! - **Debug mode**: structured `tracing` events at the matching level
//!
//! ## Debug Mode Detection
//!
//! Debug mode is on when either environment variable is set:
//! - **`FUELWISE_DEBUG`**: Application-specific debug flag
//! - **`RUST_LOG`**: Standard Rust logging configuration
//!
//! The check runs once and is cached for the lifetime of the process.
//!
//! ## Output Routing
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Macro Call    │    │   Debug Mode    │    │   Output        │
//! │   msg_info!()   │───▶│   Detection     │───▶│   Routing       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                                 │
//!                                 ▼
//!                 tracing::info!  OR  println!
//! ```
//!
//! ## Usage Examples
//!
//! ```rust
//! use fuelwise::libs::messages::Message;
//! use fuelwise::{msg_error_anyhow, msg_info, msg_success};
//!
//! msg_success!(Message::ConfigSaved);
//! msg_info!(Message::NoAnomalies, true);
//!
//! let error = msg_error_anyhow!(Message::VehicleNotFound("v-404".to_string()));
//! assert!(error.to_string().contains("v-404"));
//! ```

use std::sync::OnceLock;

/// Cached result of the debug mode check.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Checks if debug mode is enabled, with caching for performance.
///
/// Debug mode is considered enabled if `FUELWISE_DEBUG` or `RUST_LOG` is set.
/// The first call reads the environment, later calls return the cached value.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| {
        // Check for application-specific debug flag
        std::env::var("FUELWISE_DEBUG").is_ok() ||
        // Check for standard Rust logging configuration
        std::env::var("RUST_LOG").is_ok()
    })
}

/// Prints a general message with automatic debug mode routing.
///
/// Pass `true` as a second argument to surround the message with blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix and automatic routing.
///
/// ## Output Examples
///
/// ```text
/// ✅ Configuration saved successfully
/// ✅ Report exported to: fuelwise_report_20250115_143022.csv
/// ```
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix.
///
/// In normal mode errors go to stderr so they never mix with report output
/// that may be redirected to a file.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

/// Prints a warning message with ⚠️ prefix and automatic routing.
///
/// Used for budget alerts and other conditions that need attention but do
/// not stop the command.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("\n⚠️ {}\n", $msg);
        } else {
            println!("\n⚠️ {}\n", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix and automatic routing.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Debug-only message display with 🔍 prefix.
///
/// Suppressed entirely outside debug mode.
///
/// ```rust
/// use fuelwise::msg_debug;
///
/// let logs = 42;
/// msg_debug!(format!("Filtered {} fuel logs", logs));
/// ```
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` from a message with ❌ prefix.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

/// Returns early with an `anyhow::Error` built from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
