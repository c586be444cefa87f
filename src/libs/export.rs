//! Fleet report export.
//!
//! Turns an [`AnalyticsData`] result into a shareable document. The
//! renderers are pure functions returning text, so they can be tested
//! without touching the filesystem; [`Exporter`] writes their output (or an
//! Excel workbook) to disk.
//!
//! ## Formats
//!
//! - **CSV**: one section per table, separated by blank rows. Fields are
//!   quoted and escaped by the `csv` writer, so names containing commas or
//!   quotes survive a spreadsheet round trip.
//! - **JSON**: the full result, pretty-printed with camelCase keys. Parsing
//!   it back yields an identical [`AnalyticsData`].
//! - **HTML**: a self-contained printable page with inline styles.
//! - **Excel**: one worksheet per section with bold gray headers.
//!
//! ## Usage
//!
//! ```rust
//! use fuelwise::libs::analytics::AnalyticsData;
//! use fuelwise::libs::export::{render_csv, render_json};
//!
//! let data = AnalyticsData::default();
//! let csv = render_csv(&data)?;
//! assert!(csv.starts_with("SUMMARY"));
//!
//! let json = render_json(&data)?;
//! let parsed: AnalyticsData = serde_json::from_str(&json)?;
//! assert_eq!(parsed, data);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::analytics::AnalyticsData;
use crate::libs::formatter::{format_currency, format_date, format_liters, format_percentage};
use crate::libs::messages::Message;
use crate::libs::trends::TrendPoint;
use crate::{msg_debug, msg_success};
use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::fmt::{self, Write as _};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Prefix of generated export file names.
pub const DEFAULT_FILE_PREFIX: &str = "fuelwise_report";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated sections for spreadsheets.
    Csv,
    /// Pretty-printed JSON of the full analytics result.
    Json,
    /// Printable standalone HTML page.
    Html,
    /// Excel workbook with one sheet per section.
    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Html => "html",
            ExportFormat::Excel => "xlsx",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
            ExportFormat::Html => "HTML",
            ExportFormat::Excel => "Excel",
        };
        write!(f, "{}", name)
    }
}

/// Escapes text for safe inclusion in HTML element content and attributes.
///
/// ```rust
/// use fuelwise::libs::export::html_escape;
///
/// assert_eq!(html_escape("<Fleet & \"Co\">"), "&lt;Fleet &amp; &quot;Co&quot;&gt;");
/// ```
pub fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Renders the analytics result as sectioned CSV.
///
/// Sections appear in a fixed order: summary, fuel trend, cost trend,
/// vehicles, drivers, departments, budgets, anomalies and tags. Each starts
/// with a title row followed by a header row.
pub fn render_csv(data: &AnalyticsData) -> Result<String> {
    let mut buffer = Vec::new();
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(&mut buffer);

    wtr.write_record(["SUMMARY"])?;
    wtr.write_record(["Total Fuel (L)", "Total Cost", "Average Efficiency", "Trips", "Anomalies"])?;
    wtr.write_record([
        format!("{:.2}", data.summary.total_fuel_used),
        format!("{:.2}", data.summary.total_cost),
        format!("{:.2}", data.summary.average_efficiency),
        data.summary.total_trips.to_string(),
        data.summary.anomalies_count.to_string(),
    ])?;

    write_csv_trend(&mut wtr, "FUEL TREND", "Fuel (L)", &data.fuel_trend)?;
    write_csv_trend(&mut wtr, "COST TREND", "Cost", &data.cost_trend)?;

    wtr.write_record([""])?;
    wtr.write_record(["VEHICLES"])?;
    wtr.write_record(["ID", "Name", "Department", "Fuel (L)", "Cost", "Efficiency", "Trips", "Cost per Trip"])?;
    for vehicle in &data.vehicle_performance {
        wtr.write_record([
            vehicle.vehicle_id.clone(),
            vehicle.name.clone(),
            vehicle.department.clone(),
            format!("{:.2}", vehicle.fuel_used),
            format!("{:.2}", vehicle.cost),
            format!("{:.2}", vehicle.efficiency),
            vehicle.trips.to_string(),
            format!("{:.2}", vehicle.avg_cost_per_trip),
        ])?;
    }

    wtr.write_record([""])?;
    wtr.write_record(["DRIVERS"])?;
    wtr.write_record(["ID", "Name", "Department", "Fuel (L)", "Cost", "Efficiency", "Trips", "Cost per Trip"])?;
    for driver in &data.driver_performance {
        wtr.write_record([
            driver.driver_id.clone(),
            driver.name.clone(),
            driver.department.clone(),
            format!("{:.2}", driver.fuel_used),
            format!("{:.2}", driver.cost),
            format!("{:.2}", driver.efficiency),
            driver.trips.to_string(),
            format!("{:.2}", driver.avg_cost_per_trip),
        ])?;
    }

    wtr.write_record([""])?;
    wtr.write_record(["DEPARTMENTS"])?;
    wtr.write_record(["Department", "Fuel (L)", "Vehicles"])?;
    for stat in &data.department_stats {
        wtr.write_record([stat.department.clone(), format!("{:.2}", stat.fuel_used), stat.vehicle_count.to_string()])?;
    }

    wtr.write_record([""])?;
    wtr.write_record(["BUDGETS"])?;
    wtr.write_record(["ID", "Department", "Period", "Limit", "Spent", "Used (%)", "Remaining", "Status"])?;
    for budget in &data.budget_status {
        wtr.write_record([
            budget.budget_id.clone(),
            budget.department.clone(),
            budget.period.as_str().to_string(),
            format!("{:.2}", budget.limit),
            format!("{:.2}", budget.current_spend),
            format!("{:.2}", budget.percentage),
            format!("{:.2}", budget.remaining),
            budget.status.to_string(),
        ])?;
    }

    wtr.write_record([""])?;
    wtr.write_record(["ANOMALIES"])?;
    wtr.write_record(["Date", "Vehicle", "Driver", "Fuel (L)", "Cost", "Reason"])?;
    for anomaly in &data.recent_anomalies {
        wtr.write_record([
            format_date(&anomaly.date),
            anomaly.vehicle_name.clone(),
            anomaly.driver_name.clone(),
            format!("{:.2}", anomaly.liters),
            format!("{:.2}", anomaly.cost),
            anomaly.reason.clone().unwrap_or_default(),
        ])?;
    }

    wtr.write_record([""])?;
    wtr.write_record(["TAGS"])?;
    wtr.write_record(["Tag", "Fuel (L)", "Cost", "Logs"])?;
    for tag in &data.tag_breakdown {
        wtr.write_record([
            tag.tag.clone(),
            format!("{:.2}", tag.fuel_used),
            format!("{:.2}", tag.cost),
            tag.logs.to_string(),
        ])?;
    }

    wtr.flush()?;
    drop(wtr);
    Ok(String::from_utf8(buffer)?)
}

fn write_csv_trend<W: Write>(wtr: &mut csv::Writer<W>, title: &str, value_header: &str, points: &[TrendPoint]) -> Result<()> {
    wtr.write_record([""])?;
    wtr.write_record([title])?;
    wtr.write_record(["Period", value_header])?;
    for point in points {
        wtr.write_record([point.period.clone(), format!("{:.2}", point.value)])?;
    }
    Ok(())
}

/// Renders the analytics result as pretty-printed JSON.
pub fn render_json(data: &AnalyticsData) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Renders a standalone printable HTML report.
///
/// Every piece of text taken from the data is escaped with [`html_escape`].
pub fn render_html(data: &AnalyticsData, generated_at: NaiveDateTime) -> Result<String> {
    let mut html = String::new();

    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html><head><meta charset=\"utf-8\"><title>Fleet Fuel Report</title>")?;
    writeln!(html, "<style>")?;
    writeln!(html, "  body {{ font-family: Arial, sans-serif; margin: 20px; }}")?;
    writeln!(html, "  table {{ border-collapse: collapse; width: 100%; margin-bottom: 24px; }}")?;
    writeln!(html, "  th, td {{ border: 1px solid #ddd; padding: 8px; text-align: left; }}")?;
    writeln!(html, "  th {{ background-color: #f2f2f2; }}")?;
    writeln!(html, "  td.num {{ text-align: right; }}")?;
    writeln!(html, "  .good {{ color: green; }}")?;
    writeln!(html, "  .warning {{ color: #b58900; }}")?;
    writeln!(html, "  .critical {{ color: red; }}")?;
    writeln!(html, "</style></head><body>")?;

    writeln!(html, "<h1>Fleet Fuel Report</h1>")?;
    writeln!(html, "<p>Generated: {}</p>", generated_at.format("%Y-%m-%d %H:%M:%S"))?;

    writeln!(html, "<h2>Summary</h2>")?;
    writeln!(html, "<table>")?;
    writeln!(html, "<tr><th>Total Fuel</th><th>Total Cost</th><th>Average Efficiency</th><th>Trips</th><th>Anomalies</th></tr>")?;
    writeln!(
        html,
        "<tr><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{:.1}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>",
        format_liters(data.summary.total_fuel_used),
        format_currency(data.summary.total_cost),
        data.summary.average_efficiency,
        data.summary.total_trips,
        data.summary.anomalies_count
    )?;
    writeln!(html, "</table>")?;

    write_html_trend(&mut html, "Fuel Trend", &data.fuel_trend, format_liters)?;
    write_html_trend(&mut html, "Cost Trend", &data.cost_trend, format_currency)?;

    if !data.vehicle_performance.is_empty() {
        writeln!(html, "<h2>Vehicle Performance</h2>")?;
        writeln!(html, "<table>")?;
        writeln!(html, "<tr><th>Vehicle</th><th>Department</th><th>Fuel</th><th>Cost</th><th>Efficiency</th><th>Trips</th><th>Cost per Trip</th></tr>")?;
        for vehicle in &data.vehicle_performance {
            writeln!(
                html,
                "<tr><td>{}</td><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{:.1}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>",
                html_escape(&vehicle.name),
                html_escape(&vehicle.department),
                format_liters(vehicle.fuel_used),
                format_currency(vehicle.cost),
                vehicle.efficiency,
                vehicle.trips,
                format_currency(vehicle.avg_cost_per_trip)
            )?;
        }
        writeln!(html, "</table>")?;
    }

    if !data.driver_performance.is_empty() {
        writeln!(html, "<h2>Driver Performance</h2>")?;
        writeln!(html, "<table>")?;
        writeln!(html, "<tr><th>Driver</th><th>Department</th><th>Fuel</th><th>Cost</th><th>Efficiency</th><th>Trips</th><th>Cost per Trip</th></tr>")?;
        for driver in &data.driver_performance {
            writeln!(
                html,
                "<tr><td>{}</td><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{:.1}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>",
                html_escape(&driver.name),
                html_escape(&driver.department),
                format_liters(driver.fuel_used),
                format_currency(driver.cost),
                driver.efficiency,
                driver.trips,
                format_currency(driver.avg_cost_per_trip)
            )?;
        }
        writeln!(html, "</table>")?;
    }

    if !data.department_stats.is_empty() {
        writeln!(html, "<h2>Departments</h2>")?;
        writeln!(html, "<table>")?;
        writeln!(html, "<tr><th>Department</th><th>Fuel</th><th>Vehicles</th></tr>")?;
        for stat in &data.department_stats {
            writeln!(
                html,
                "<tr><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>",
                html_escape(&stat.department),
                format_liters(stat.fuel_used),
                stat.vehicle_count
            )?;
        }
        writeln!(html, "</table>")?;
    }

    if !data.budget_status.is_empty() {
        writeln!(html, "<h2>Budgets</h2>")?;
        writeln!(html, "<table>")?;
        writeln!(html, "<tr><th>Department</th><th>Period</th><th>Limit</th><th>Spent</th><th>Used</th><th>Remaining</th><th>Status</th></tr>")?;
        for budget in &data.budget_status {
            writeln!(
                html,
                "<tr><td>{}</td><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"{}\">{}</td></tr>",
                html_escape(&budget.department),
                budget.period.as_str(),
                format_currency(budget.limit),
                format_currency(budget.current_spend),
                format_percentage(budget.percentage),
                format_currency(budget.remaining),
                budget.status,
                budget.status
            )?;
        }
        writeln!(html, "</table>")?;
    }

    if !data.recent_anomalies.is_empty() {
        writeln!(html, "<h2>Recent Anomalies</h2>")?;
        writeln!(html, "<table>")?;
        writeln!(html, "<tr><th>Date</th><th>Vehicle</th><th>Driver</th><th>Fuel</th><th>Cost</th><th>Reason</th></tr>")?;
        for anomaly in &data.recent_anomalies {
            writeln!(
                html,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td>{}</td></tr>",
                format_date(&anomaly.date),
                html_escape(&anomaly.vehicle_name),
                html_escape(&anomaly.driver_name),
                format_liters(anomaly.liters),
                format_currency(anomaly.cost),
                html_escape(anomaly.reason.as_deref().unwrap_or("-"))
            )?;
        }
        writeln!(html, "</table>")?;
    }

    if !data.tag_breakdown.is_empty() {
        writeln!(html, "<h2>Fuel by Tag</h2>")?;
        writeln!(html, "<table>")?;
        writeln!(html, "<tr><th>Tag</th><th>Fuel</th><th>Cost</th><th>Logs</th></tr>")?;
        for tag in &data.tag_breakdown {
            writeln!(
                html,
                "<tr><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>",
                html_escape(&tag.tag),
                format_liters(tag.fuel_used),
                format_currency(tag.cost),
                tag.logs
            )?;
        }
        writeln!(html, "</table>")?;
    }

    writeln!(html, "</body></html>")?;
    Ok(html)
}

fn write_html_trend(html: &mut String, title: &str, points: &[TrendPoint], format_value: fn(f64) -> String) -> fmt::Result {
    if points.is_empty() {
        return Ok(());
    }
    writeln!(html, "<h2>{}</h2>", title)?;
    writeln!(html, "<table>")?;
    writeln!(html, "<tr><th>Period</th><th>Value</th></tr>")?;
    for point in points {
        writeln!(
            html,
            "<tr><td>{}</td><td class=\"num\">{}</td></tr>",
            html_escape(&point.period),
            format_value(point.value)
        )?;
    }
    writeln!(html, "</table>")
}

/// Writes an analytics result to a file in the selected format.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter. Without an explicit path the file is named
    /// `fuelwise_report_<YYYYmmdd_HHMMSS>.<ext>` in the working directory.
    ///
    /// ```rust
    /// use fuelwise::libs::export::{ExportFormat, Exporter};
    /// use std::path::PathBuf;
    ///
    /// let exporter = Exporter::new(ExportFormat::Html, Some(PathBuf::from("fleet.html")));
    /// assert_eq!(exporter.output_path(), PathBuf::from("fleet.html").as_path());
    ///
    /// let exporter = Exporter::new(ExportFormat::Excel, None);
    /// assert!(exporter.output_path().to_string_lossy().ends_with(".xlsx"));
    /// ```
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!(
                "{}_{}.{}",
                DEFAULT_FILE_PREFIX,
                Local::now().format("%Y%m%d_%H%M%S"),
                format.extension()
            ))
        });

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export(&self, data: &AnalyticsData) -> Result<()> {
        msg_debug!(format!("Writing {} report to {}", self.format, self.output_path.display()));

        match self.format {
            ExportFormat::Csv => self.write_text(&render_csv(data)?)?,
            ExportFormat::Json => self.write_text(&render_json(data)?)?,
            ExportFormat::Html => self.write_text(&render_html(data, Local::now().naive_local())?)?,
            ExportFormat::Excel => self.export_excel(data)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn write_text(&self, text: &str) -> Result<()> {
        File::create(&self.output_path)?.write_all(text.as_bytes())?;
        Ok(())
    }

    fn export_excel(&self, data: &AnalyticsData) -> Result<()> {
        let mut workbook = build_workbook(data)?;
        workbook.save(&self.output_path)?;
        Ok(())
    }
}

/// Lays the report out as a workbook, one worksheet per section in the
/// same order as the CSV export.
pub fn build_workbook(data: &AnalyticsData) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Summary")?;
        write_headers(worksheet, &["Metric", "Value"], &header_format)?;
        let summary = &data.summary;
        let rows = [
            ("Total Fuel (L)", summary.total_fuel_used),
            ("Total Cost", summary.total_cost),
            ("Average Efficiency", summary.average_efficiency),
            ("Trips", summary.total_trips as f64),
            ("Anomalies", summary.anomalies_count as f64),
        ];
        for (index, (label, value)) in rows.iter().enumerate() {
            let row = index as u32 + 1;
            worksheet.write_string(row, 0, *label)?;
            worksheet.write_number(row, 1, *value)?;
        }
        worksheet.autofit();
    }

    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Trends")?;
        write_headers(worksheet, &["Period", "Fuel (L)", "Cost"], &header_format)?;
        for (index, point) in data.fuel_trend.iter().enumerate() {
            let row = index as u32 + 1;
            worksheet.write_string(row, 0, &point.period)?;
            worksheet.write_number(row, 1, point.value)?;
            if let Some(cost) = data.cost_trend.iter().find(|c| c.period == point.period) {
                worksheet.write_number(row, 2, cost.value)?;
            }
        }
        worksheet.autofit();
    }

    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Vehicles")?;
        write_headers(
            worksheet,
            &["ID", "Name", "Department", "Fuel (L)", "Cost", "Efficiency", "Trips", "Cost per Trip"],
            &header_format,
        )?;
        for (index, vehicle) in data.vehicle_performance.iter().enumerate() {
            let row = index as u32 + 1;
            worksheet.write_string(row, 0, &vehicle.vehicle_id)?;
            worksheet.write_string(row, 1, &vehicle.name)?;
            worksheet.write_string(row, 2, &vehicle.department)?;
            worksheet.write_number(row, 3, vehicle.fuel_used)?;
            worksheet.write_number(row, 4, vehicle.cost)?;
            worksheet.write_number(row, 5, vehicle.efficiency)?;
            worksheet.write_number(row, 6, vehicle.trips as f64)?;
            worksheet.write_number(row, 7, vehicle.avg_cost_per_trip)?;
        }
        worksheet.autofit();
    }

    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Drivers")?;
        write_headers(
            worksheet,
            &["ID", "Name", "Department", "Fuel (L)", "Cost", "Efficiency", "Trips", "Cost per Trip"],
            &header_format,
        )?;
        for (index, driver) in data.driver_performance.iter().enumerate() {
            let row = index as u32 + 1;
            worksheet.write_string(row, 0, &driver.driver_id)?;
            worksheet.write_string(row, 1, &driver.name)?;
            worksheet.write_string(row, 2, &driver.department)?;
            worksheet.write_number(row, 3, driver.fuel_used)?;
            worksheet.write_number(row, 4, driver.cost)?;
            worksheet.write_number(row, 5, driver.efficiency)?;
            worksheet.write_number(row, 6, driver.trips as f64)?;
            worksheet.write_number(row, 7, driver.avg_cost_per_trip)?;
        }
        worksheet.autofit();
    }

    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Departments")?;
        write_headers(worksheet, &["Department", "Fuel (L)", "Vehicles"], &header_format)?;
        for (index, stat) in data.department_stats.iter().enumerate() {
            let row = index as u32 + 1;
            worksheet.write_string(row, 0, &stat.department)?;
            worksheet.write_number(row, 1, stat.fuel_used)?;
            worksheet.write_number(row, 2, stat.vehicle_count as f64)?;
        }
        worksheet.autofit();
    }

    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Budgets")?;
        write_headers(
            worksheet,
            &["ID", "Department", "Period", "Limit", "Spent", "Used (%)", "Remaining", "Status"],
            &header_format,
        )?;
        for (index, budget) in data.budget_status.iter().enumerate() {
            let row = index as u32 + 1;
            worksheet.write_string(row, 0, &budget.budget_id)?;
            worksheet.write_string(row, 1, &budget.department)?;
            worksheet.write_string(row, 2, budget.period.as_str())?;
            worksheet.write_number(row, 3, budget.limit)?;
            worksheet.write_number(row, 4, budget.current_spend)?;
            worksheet.write_number(row, 5, budget.percentage)?;
            worksheet.write_number(row, 6, budget.remaining)?;
            worksheet.write_string(row, 7, budget.status.to_string())?;
        }
        worksheet.autofit();
    }

    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Anomalies")?;
        write_headers(worksheet, &["Date", "Vehicle", "Driver", "Fuel (L)", "Cost", "Reason"], &header_format)?;
        for (index, anomaly) in data.recent_anomalies.iter().enumerate() {
            let row = index as u32 + 1;
            worksheet.write_string(row, 0, format_date(&anomaly.date))?;
            worksheet.write_string(row, 1, &anomaly.vehicle_name)?;
            worksheet.write_string(row, 2, &anomaly.driver_name)?;
            worksheet.write_number(row, 3, anomaly.liters)?;
            worksheet.write_number(row, 4, anomaly.cost)?;
            worksheet.write_string(row, 5, anomaly.reason.as_deref().unwrap_or(""))?;
        }
        worksheet.autofit();
    }

    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Tags")?;
        write_headers(worksheet, &["Tag", "Fuel (L)", "Cost", "Logs"], &header_format)?;
        for (index, tag) in data.tag_breakdown.iter().enumerate() {
            let row = index as u32 + 1;
            worksheet.write_string(row, 0, &tag.tag)?;
            worksheet.write_number(row, 1, tag.fuel_used)?;
            worksheet.write_number(row, 2, tag.cost)?;
            worksheet.write_number(row, 3, tag.logs as f64)?;
        }
        worksheet.autofit();
    }

    Ok(workbook)
}

fn write_headers(worksheet: &mut Worksheet, headers: &[&str], format: &Format) -> Result<()> {
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, format)?;
    }
    Ok(())
}
