//! Value formatting for tables and exports.
//!
//! Every number the user sees goes through one of these helpers, so the
//! console tables, CSV/HTML exports and alert messages agree on precision and
//! units.
//!
//! ## Format Specifications
//!
//! - Liters: one decimal place with an `L` suffix
//! - Currency: two decimal places
//! - Percentages: one decimal place with a `%` suffix
//! - Dates: `YYYY-MM-DD HH:MM`
//!
//! Non-finite values render as zero rather than `NaN` or `inf`.
//!
//! ## Examples
//!
//! ```rust
//! use fuelwise::libs::formatter::{format_currency, format_liters, format_percentage};
//!
//! assert_eq!(format_liters(42.25), "42.3 L");
//! assert_eq!(format_currency(1234.5), "1234.50");
//! assert_eq!(format_percentage(87.56), "87.6%");
//! assert_eq!(format_liters(f64::NAN), "0.0 L");
//! ```

use chrono::NaiveDateTime;

fn finite(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

pub fn format_liters(value: f64) -> String {
    format!("{:.1} L", finite(value))
}

pub fn format_currency(value: f64) -> String {
    format!("{:.2}", finite(value))
}

pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", finite(value))
}

/// Formats an efficiency value in L/100km.
pub fn format_consumption(value: f64) -> String {
    format!("{:.1} L/100km", finite(value))
}

/// Formats a date-time for display.
///
/// ```rust
/// use chrono::NaiveDate;
/// use fuelwise::libs::formatter::format_date;
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap().and_hms_opt(8, 30, 0).unwrap();
/// assert_eq!(format_date(&date), "2025-01-15 08:30");
/// ```
pub fn format_date(date: &NaiveDateTime) -> String {
    date.format("%Y-%m-%d %H:%M").to_string()
}
