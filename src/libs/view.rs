//! Console table rendering for fleet reports.
//!
//! Each function prints one section of a report with `prettytable`. Empty
//! sections are skipped by the callers, so every table printed here has at
//! least one data row.

use crate::libs::analytics::{
    AnalyticsSummary, BudgetReport, DepartmentStat, DriverPerformance, EfficiencyMetrics, RecentAnomaly, SavingsMetrics,
    TagStat, TripSavings, VehiclePerformance,
};
use crate::libs::fleet::{Driver, Vehicle};
use crate::libs::formatter::{format_consumption, format_currency, format_date, format_liters, format_percentage};
use crate::libs::trends::TrendPoint;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn summary(summary: &AnalyticsSummary) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["FUEL USED", "COST", "AVG EFFICIENCY", "TRIPS", "ANOMALIES"]);
        table.add_row(row![
            format_liters(summary.total_fuel_used),
            format_currency(summary.total_cost),
            format_consumption(summary.average_efficiency),
            summary.total_trips,
            summary.anomalies_count
        ]);
        table.printstd();

        Ok(())
    }

    /// Prints a trend as a two-column table. `currency` switches the value
    /// column between liters and money.
    pub fn trend(points: &[TrendPoint], currency: bool) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["PERIOD", if currency { "COST" } else { "FUEL" }]);
        for point in points {
            let value = if currency {
                format_currency(point.value)
            } else {
                format_liters(point.value)
            };
            table.add_row(row![point.period, r->value]);
        }
        table.printstd();

        Ok(())
    }

    pub fn vehicles(performance: &[VehiclePerformance]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "DEPARTMENT", "FUEL", "COST", "EFFICIENCY", "TRIPS", "COST/TRIP"]);
        for vehicle in performance {
            table.add_row(row![
                vehicle.vehicle_id,
                vehicle.name,
                vehicle.department,
                r->format_liters(vehicle.fuel_used),
                r->format_currency(vehicle.cost),
                r->format_consumption(vehicle.efficiency),
                r->vehicle.trips,
                r->format_currency(vehicle.avg_cost_per_trip)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn drivers(performance: &[DriverPerformance]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "DEPARTMENT", "FUEL", "COST", "EFFICIENCY", "TRIPS", "COST/TRIP"]);
        for driver in performance {
            table.add_row(row![
                driver.driver_id,
                driver.name,
                driver.department,
                r->format_liters(driver.fuel_used),
                r->format_currency(driver.cost),
                r->format_consumption(driver.efficiency),
                r->driver.trips,
                r->format_currency(driver.avg_cost_per_trip)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn departments(stats: &[DepartmentStat]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DEPARTMENT", "FUEL", "VEHICLES"]);
        for stat in stats {
            table.add_row(row![stat.department, r->format_liters(stat.fuel_used), r->stat.vehicle_count]);
        }
        table.printstd();

        Ok(())
    }

    pub fn budgets(reports: &[BudgetReport]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DEPARTMENT", "PERIOD", "LIMIT", "SPENT", "USED", "REMAINING", "STATUS"]);
        for report in reports {
            table.add_row(row![
                report.budget_id,
                report.department,
                report.period.as_str(),
                r->format_currency(report.limit),
                r->format_currency(report.current_spend),
                r->format_percentage(report.percentage),
                r->format_currency(report.remaining),
                report.status
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn anomalies(anomalies: &[RecentAnomaly]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "VEHICLE", "DRIVER", "FUEL", "COST", "REASON"]);
        for anomaly in anomalies {
            table.add_row(row![
                format_date(&anomaly.date),
                anomaly.vehicle_name,
                anomaly.driver_name,
                r->format_liters(anomaly.liters),
                r->format_currency(anomaly.cost),
                anomaly.reason.as_deref().unwrap_or("-")
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn tags(tags: &[TagStat]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TAG", "FUEL", "COST", "LOGS"]);
        for tag in tags {
            table.add_row(row![tag.tag, r->format_liters(tag.fuel_used), r->format_currency(tag.cost), r->tag.logs]);
        }
        table.printstd();

        Ok(())
    }

    pub fn efficiency(metrics: &EfficiencyMetrics) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["Vehicles", metrics.total_vehicles]);
        table.add_row(row!["Active vehicles", metrics.active_vehicles]);
        table.add_row(row!["Utilization", format_percentage(metrics.utilization_rate)]);
        table.add_row(row!["Fuel used", format_liters(metrics.total_fuel_used)]);
        table.add_row(row!["Fuel cost", format_currency(metrics.total_cost)]);
        table.add_row(row!["Average efficiency score", format!("{:.1}", metrics.average_efficiency)]);
        table.printstd();

        Ok(())
    }

    pub fn savings(metrics: &SavingsMetrics) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["Liters saved", format_liters(metrics.total_liters_saved)]);
        table.add_row(row!["Money saved", format_currency(metrics.total_savings)]);
        table.add_row(row!["Average per fuel log", format_currency(metrics.average_savings_per_trip)]);
        table.printstd();

        Ok(())
    }

    pub fn trip_savings(savings: &TripSavings) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["Completed trips", savings.trips_counted]);
        table.add_row(row!["Predicted fuel", format_liters(savings.total_predicted_fuel)]);
        table.add_row(row!["Actual fuel", format_liters(savings.total_actual_fuel)]);
        table.add_row(row!["Savings", format_currency(savings.total_savings)]);
        table.printstd();

        Ok(())
    }

    pub fn prediction(vehicle: &Vehicle, driver: &Driver, distance: f64, liters: f64, cost: f64) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["Distance", format!("{:.1} km", distance)]);
        table.add_row(row!["Vehicle baseline", format_consumption(vehicle.average_consumption)]);
        table.add_row(row!["Driver efficiency score", format!("{:.1}", driver.efficiency_score)]);
        table.add_row(row!["Predicted fuel", format_liters(liters)]);
        table.add_row(row!["Estimated cost", format_currency(cost)]);
        table.printstd();

        Ok(())
    }
}
