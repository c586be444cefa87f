#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use fuelwise::libs::analytics::{
        calculate_analytics_data, calculate_efficiency_metrics, calculate_savings_metrics, calculate_trip_savings,
        AnalyticsData, TimeRange, RECENT_ANOMALY_LIMIT, UNKNOWN_DRIVER, UNKNOWN_VEHICLE, UNTAGGED,
    };
    use fuelwise::libs::export::render_json;
    use fuelwise::libs::fleet::{FleetSnapshot, FuelLog};
    use fuelwise::libs::metrics::BudgetLevel;
    use fuelwise::libs::trends::TrendView;

    const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/fleet.json");

    fn fleet() -> FleetSnapshot {
        FleetSnapshot::from_json_file(FIXTURE).unwrap()
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 31).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    fn month() -> TimeRange {
        TimeRange::days(30).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {}, got {}", expected, actual);
    }

    fn anomalous_log(id: &str, vehicle_id: &str, driver_id: &str, day: u32) -> FuelLog {
        FuelLog {
            id: id.to_string(),
            vehicle_id: vehicle_id.to_string(),
            driver_id: driver_id.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap().and_hms_opt(9, 0, 0).unwrap(),
            liters: 40.0,
            cost: 60.0,
            trip_distance: 100.0,
            efficiency: 40.0,
            is_anomalous: true,
            anomaly_reason: None,
            tag: String::new(),
        }
    }

    #[test]
    fn test_single_vehicle_scenario() {
        let mut fleet = fleet();
        fleet.vehicles.truncate(1);
        fleet.drivers.truncate(1);
        fleet.fuel_logs.truncate(1);
        fleet.trips.clear();
        fleet.budgets.clear();
        fleet.fuel_logs[0].date = now();

        let data = calculate_analytics_data(&fleet, "30".parse().unwrap(), TrendView::Daily, now());

        assert_eq!(data.summary.total_fuel_used, 12.0);
        assert_eq!(data.summary.total_cost, 18.0);
        assert_eq!(data.summary.total_trips, 0);
        assert_eq!(data.summary.average_efficiency, 12.0);
        assert_eq!(data.summary.anomalies_count, 0);
        assert_eq!(data.vehicle_performance[0].fuel_used, 12.0);
        assert_eq!(data.fuel_trend.len(), 1);
        assert_eq!(data.fuel_trend[0].period, "1/31/2025");

        let json = render_json(&data).unwrap();
        let parsed: AnalyticsData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.summary, data.summary);
    }

    #[test]
    fn test_summary_covers_window_only() {
        let data = calculate_analytics_data(&fleet(), month(), TrendView::Monthly, now());

        assert_eq!(data.summary.total_fuel_used, 50.0);
        assert_eq!(data.summary.total_cost, 75.0);
        assert_close(data.summary.average_efficiency, 50.0 / 3.0);
        // planned trips inside the window still count
        assert_eq!(data.summary.total_trips, 3);
        assert_eq!(data.summary.anomalies_count, 1);
    }

    #[test]
    fn test_wider_window_includes_older_records() {
        let range: TimeRange = "90".parse().unwrap();
        let data = calculate_analytics_data(&fleet(), range, TrendView::Monthly, now());

        assert_eq!(data.summary.total_fuel_used, 75.0);
        assert_eq!(data.summary.total_cost, 112.5);
        assert_eq!(data.summary.total_trips, 4);
        // months without logs produce no point
        assert_eq!(data.fuel_trend.len(), 2);
        assert_eq!(data.fuel_trend[0].period, "2024-11");
        assert_eq!(data.fuel_trend[0].value, 25.0);
        assert_eq!(data.fuel_trend[1].period, "2025-1");
    }

    #[test]
    fn test_window_start_is_inclusive() {
        let mut fleet = fleet();
        let start = month().window_start(now());
        fleet.fuel_logs[3].date = start;

        let data = calculate_analytics_data(&fleet, month(), TrendView::Monthly, now());
        assert_eq!(data.summary.total_fuel_used, 75.0);
    }

    #[test]
    fn test_range_beyond_calendar_covers_all_records() {
        let range: TimeRange = "4000000000".parse().unwrap();
        let data = calculate_analytics_data(&fleet(), range, TrendView::Monthly, now());
        assert_eq!(data.summary.total_fuel_used, 75.0);
        assert_eq!(data.summary.total_trips, fleet().trips.len());
    }

    #[test]
    fn test_vehicle_performance_sorted_by_fuel() {
        let data = calculate_analytics_data(&fleet(), month(), TrendView::Monthly, now());
        let ids: Vec<&str> = data.vehicle_performance.iter().map(|v| v.vehicle_id.as_str()).collect();
        assert_eq!(ids, vec!["v2", "v1", "v3"]);

        let truck = &data.vehicle_performance[0];
        assert_eq!(truck.name, "Truck \"Big\", Co");
        assert_eq!(truck.fuel_used, 30.0);
        assert_eq!(truck.cost, 45.0);
        assert_eq!(truck.efficiency, 30.0);
        assert_eq!(truck.trips, 1);
        assert_eq!(truck.avg_cost_per_trip, 45.0);

        let van = &data.vehicle_performance[1];
        assert_eq!(van.fuel_used, 20.0);
        assert_eq!(van.efficiency, 10.0);
        assert_eq!(van.trips, 2);
        assert_eq!(van.avg_cost_per_trip, 15.0);
    }

    #[test]
    fn test_idle_vehicle_falls_back_to_static_score() {
        let data = calculate_analytics_data(&fleet(), month(), TrendView::Monthly, now());
        let spare = data.vehicle_performance.iter().find(|v| v.vehicle_id == "v3").unwrap();

        assert_eq!(spare.fuel_used, 0.0);
        assert_eq!(spare.cost, 0.0);
        assert_eq!(spare.efficiency, 90.0);
        assert_eq!(spare.trips, 0);
        assert_eq!(spare.avg_cost_per_trip, 0.0);
    }

    #[test]
    fn test_driver_performance_sorted_by_efficiency() {
        let data = calculate_analytics_data(&fleet(), month(), TrendView::Monthly, now());
        let ids: Vec<&str> = data.driver_performance.iter().map(|d| d.driver_id.as_str()).collect();
        assert_eq!(ids, vec!["d2", "d1"]);

        let bob = &data.driver_performance[0];
        assert_eq!(bob.fuel_used, 30.0);
        assert_eq!(bob.efficiency, 30.0);
        assert_eq!(bob.trips, 2);
        assert_eq!(bob.avg_cost_per_trip, 22.5);

        let alice = &data.driver_performance[1];
        assert_eq!(alice.fuel_used, 20.0);
        assert_eq!(alice.efficiency, 10.0);
        assert_eq!(alice.trips, 1);
        assert_eq!(alice.avg_cost_per_trip, 30.0);
    }

    #[test]
    fn test_department_stats() {
        let data = calculate_analytics_data(&fleet(), month(), TrendView::Monthly, now());
        assert_eq!(data.department_stats.len(), 2);

        assert_eq!(data.department_stats[0].department, "Delivery");
        assert_eq!(data.department_stats[0].fuel_used, 20.0);
        assert_eq!(data.department_stats[0].vehicle_count, 2);

        assert_eq!(data.department_stats[1].department, "Logistics");
        assert_eq!(data.department_stats[1].fuel_used, 30.0);
        assert_eq!(data.department_stats[1].vehicle_count, 1);
    }

    #[test]
    fn test_budget_status() {
        let data = calculate_analytics_data(&fleet(), month(), TrendView::Monthly, now());
        assert_eq!(data.budget_status.len(), 2);

        let delivery = &data.budget_status[0];
        assert_eq!(delivery.budget_id, "b1");
        assert_eq!(delivery.current_spend, 30.0);
        assert_eq!(delivery.percentage, 75.0);
        assert_eq!(delivery.remaining, 10.0);
        // own threshold of 75 applies
        assert_eq!(delivery.status, BudgetLevel::Warning);

        let logistics = &data.budget_status[1];
        assert_eq!(logistics.budget_id, "b2");
        assert_eq!(logistics.limit, 40.0);
        assert_eq!(logistics.current_spend, 45.0);
        assert_eq!(logistics.percentage, 112.5);
        assert_eq!(logistics.remaining, -5.0);
        assert_eq!(logistics.status, BudgetLevel::Critical);
    }

    #[test]
    fn test_budget_threshold_falls_back_to_filled_value() {
        let mut fleet = fleet();
        fleet.budgets[1].monthly_limit = 100.0;

        let data = calculate_analytics_data(&fleet, month(), TrendView::Monthly, now());
        assert_eq!(data.budget_status[1].status, BudgetLevel::Good);

        fleet.fill_alert_thresholds(40.0);
        let data = calculate_analytics_data(&fleet, month(), TrendView::Monthly, now());
        assert_eq!(data.budget_status[1].status, BudgetLevel::Warning);
        // a budget's own threshold is never overwritten
        assert_eq!(fleet.budgets[0].alert_threshold, Some(75.0));
    }

    #[test]
    fn test_recent_anomalies_resolve_names() {
        let data = calculate_analytics_data(&fleet(), month(), TrendView::Monthly, now());
        assert_eq!(data.recent_anomalies.len(), 1);

        let anomaly = &data.recent_anomalies[0];
        assert_eq!(anomaly.log_id, "f3");
        assert_eq!(anomaly.vehicle_name, "Truck \"Big\", Co");
        assert_eq!(anomaly.driver_name, "Bob");
        assert_eq!(anomaly.reason.as_deref(), Some("Manual review"));
    }

    #[test]
    fn test_recent_anomalies_newest_first_and_capped() {
        let mut fleet = fleet();
        for day in 2..=8 {
            fleet.fuel_logs.push(anomalous_log(&format!("x{}", day), "v1", "d1", day));
        }

        let data = calculate_analytics_data(&fleet, month(), TrendView::Monthly, now());
        assert_eq!(data.summary.anomalies_count, 8);
        assert_eq!(data.recent_anomalies.len(), RECENT_ANOMALY_LIMIT);

        let ids: Vec<&str> = data.recent_anomalies.iter().map(|a| a.log_id.as_str()).collect();
        assert_eq!(ids, vec!["f3", "x8", "x7", "x6", "x5"]);
    }

    #[test]
    fn test_unknown_references_degrade_gracefully() {
        let mut fleet = fleet();
        fleet.fuel_logs.push(anomalous_log("orphan", "ghost", "nobody", 28));

        let data = calculate_analytics_data(&fleet, month(), TrendView::Monthly, now());

        let orphan = &data.recent_anomalies[0];
        assert_eq!(orphan.log_id, "orphan");
        assert_eq!(orphan.vehicle_name, UNKNOWN_VEHICLE);
        assert_eq!(orphan.driver_name, UNKNOWN_DRIVER);

        // totals still include the orphan log, rosters and departments ignore it
        assert_eq!(data.summary.total_fuel_used, 90.0);
        assert_eq!(data.vehicle_performance.len(), 3);
        let department_fuel: f64 = data.department_stats.iter().map(|d| d.fuel_used).sum();
        assert_eq!(department_fuel, 50.0);
    }

    #[test]
    fn test_tag_breakdown() {
        let data = calculate_analytics_data(&fleet(), month(), TrendView::Monthly, now());
        assert_eq!(data.tag_breakdown.len(), 2);

        assert_eq!(data.tag_breakdown[0].tag, UNTAGGED);
        assert_eq!(data.tag_breakdown[0].fuel_used, 30.0);
        assert_eq!(data.tag_breakdown[0].cost, 45.0);
        assert_eq!(data.tag_breakdown[0].logs, 1);

        assert_eq!(data.tag_breakdown[1].tag, "delivery");
        assert_eq!(data.tag_breakdown[1].fuel_used, 20.0);
        assert_eq!(data.tag_breakdown[1].logs, 2);
    }

    #[test]
    fn test_trends_follow_view() {
        let fleet = fleet();

        let daily = calculate_analytics_data(&fleet, month(), TrendView::Daily, now());
        let periods: Vec<&str> = daily.fuel_trend.iter().map(|p| p.period.as_str()).collect();
        assert_eq!(periods, vec!["1/15/2025", "1/20/2025", "1/22/2025"]);
        assert_eq!(daily.cost_trend[2].value, 45.0);

        let weekly = calculate_analytics_data(&fleet, month(), TrendView::Weekly, now());
        assert_eq!(weekly.fuel_trend.len(), 2);
        assert_eq!(weekly.fuel_trend[0].period, "Week 1/12/2025");
        assert_eq!(weekly.fuel_trend[0].value, 12.0);
        assert_eq!(weekly.fuel_trend[1].period, "Week 1/19/2025");
        assert_eq!(weekly.fuel_trend[1].value, 38.0);

        let monthly = calculate_analytics_data(&fleet, month(), TrendView::Monthly, now());
        assert_eq!(monthly.fuel_trend.len(), 1);
        assert_eq!(monthly.fuel_trend[0].period, "2025-1");
        assert_eq!(monthly.fuel_trend[0].value, 50.0);
        assert_eq!(monthly.cost_trend[0].value, 75.0);
    }

    #[test]
    fn test_empty_collections_yield_empty_result() {
        let mut no_logs = fleet();
        no_logs.fuel_logs.clear();
        assert_eq!(
            calculate_analytics_data(&no_logs, month(), TrendView::Monthly, now()),
            AnalyticsData::default()
        );

        let mut no_vehicles = fleet();
        no_vehicles.vehicles.clear();
        assert_eq!(
            calculate_analytics_data(&no_vehicles, month(), TrendView::Monthly, now()),
            AnalyticsData::default()
        );

        let mut no_drivers = fleet();
        no_drivers.drivers.clear();
        assert_eq!(
            calculate_analytics_data(&no_drivers, month(), TrendView::Monthly, now()),
            AnalyticsData::default()
        );
    }

    #[test]
    fn test_window_without_logs_keeps_rosters() {
        let later = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let data = calculate_analytics_data(&fleet(), month(), TrendView::Monthly, later);

        assert_eq!(data.summary.total_fuel_used, 0.0);
        assert_eq!(data.summary.average_efficiency, 0.0);
        assert!(data.fuel_trend.is_empty());
        assert!(data.recent_anomalies.is_empty());
        assert_eq!(data.vehicle_performance.len(), 3);
        assert_eq!(data.driver_performance.len(), 2);
        assert!(data.budget_status.iter().all(|b| b.current_spend == 0.0));
    }

    #[test]
    fn test_analytics_is_idempotent() {
        let fleet = fleet();
        let first = calculate_analytics_data(&fleet, month(), TrendView::Weekly, now());
        let second = calculate_analytics_data(&fleet, month(), TrendView::Weekly, now());
        assert_eq!(first, second);
    }

    #[test]
    fn test_efficiency_metrics() {
        let fleet = fleet();
        let metrics = calculate_efficiency_metrics(&fleet.vehicles, &fleet.fuel_logs);

        assert_eq!(metrics.total_vehicles, 3);
        assert_eq!(metrics.active_vehicles, 1);
        assert_close(metrics.utilization_rate, 100.0 / 3.0);
        assert_eq!(metrics.total_fuel_used, 75.0);
        assert_eq!(metrics.total_cost, 112.5);
        assert_close(metrics.average_efficiency, 245.0 / 3.0);
    }

    #[test]
    fn test_efficiency_metrics_empty_fleet() {
        let metrics = calculate_efficiency_metrics(&[], &[]);
        assert_eq!(metrics.total_vehicles, 0);
        assert_eq!(metrics.utilization_rate, 0.0);
        assert_eq!(metrics.average_efficiency, 0.0);
    }

    #[test]
    fn test_savings_metrics_count_underuse_only() {
        let fleet = fleet();
        let savings = calculate_savings_metrics(&fleet.fuel_logs, &fleet.vehicles, 1.5);

        assert_eq!(savings.total_liters_saved, 2.0);
        assert_eq!(savings.total_savings, 3.0);
        assert_eq!(savings.average_savings_per_trip, 0.75);

        let none = calculate_savings_metrics(&[], &fleet.vehicles, 1.5);
        assert_eq!(none.average_savings_per_trip, 0.0);
    }

    #[test]
    fn test_trip_savings_over_completed_trips() {
        let fleet = fleet();
        let savings = calculate_trip_savings(&fleet.trips, 1.5);

        assert_eq!(savings.trips_counted, 3);
        assert_eq!(savings.total_predicted_fuel, 46.0);
        assert_eq!(savings.total_actual_fuel, 51.0);
        assert_eq!(savings.total_savings, -7.5);
    }
}
