#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use fuelwise::libs::fleet::{FuelLog, Vehicle, VehicleStatus};
    use fuelwise::libs::metrics::{
        calculate_efficiency_score, calculate_fuel_savings, describe_fuel_anomaly, detect_fuel_anomalies, expected_fuel,
        get_budget_status, predict_fuel_consumption, BudgetLevel, DEFAULT_ALERT_THRESHOLD,
    };

    fn vehicle(average_consumption: f64) -> Vehicle {
        Vehicle {
            id: "v1".to_string(),
            name: "Van".to_string(),
            license_plate: None,
            average_consumption,
            efficiency_score: 80.0,
            monthly_budget: 0.0,
            current_spend: 0.0,
            department: "Delivery".to_string(),
            status: VehicleStatus::Active,
        }
    }

    fn log(liters: f64, trip_distance: f64) -> FuelLog {
        FuelLog {
            id: "f1".to_string(),
            vehicle_id: "v1".to_string(),
            driver_id: "d1".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap().and_hms_opt(8, 0, 0).unwrap(),
            liters,
            cost: liters * 1.5,
            trip_distance,
            efficiency: 0.0,
            is_anomalous: false,
            anomaly_reason: None,
            tag: String::new(),
        }
    }

    #[test]
    fn test_efficiency_score() {
        assert_eq!(calculate_efficiency_score(10.0, 10.0), 100.0);
        assert_eq!(calculate_efficiency_score(20.0, 10.0), 50.0);
        assert_eq!(calculate_efficiency_score(5.0, 10.0), 100.0);
    }

    #[test]
    fn test_efficiency_score_degenerate_inputs() {
        assert_eq!(calculate_efficiency_score(0.0, 10.0), 100.0);
        assert_eq!(calculate_efficiency_score(-3.0, 10.0), 100.0);
        assert_eq!(calculate_efficiency_score(f64::NAN, 10.0), 0.0);
        assert_eq!(calculate_efficiency_score(10.0, f64::NAN), 0.0);
        assert_eq!(calculate_efficiency_score(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_anomaly_thresholds() {
        // 1000 km at 10 L/100km: 100 L expected
        let van = vehicle(10.0);
        assert_eq!(expected_fuel(1000.0, 10.0), 100.0);

        assert!(detect_fuel_anomalies(&log(135.0, 1000.0), &van));
        assert!(!detect_fuel_anomalies(&log(125.0, 1000.0), &van));
        assert!(!detect_fuel_anomalies(&log(85.0, 1000.0), &van));
        assert!(detect_fuel_anomalies(&log(75.0, 1000.0), &van));
        assert!(!detect_fuel_anomalies(&log(100.0, 1000.0), &van));
    }

    #[test]
    fn test_anomaly_zero_distance_is_never_anomalous() {
        let van = vehicle(10.0);
        assert!(!detect_fuel_anomalies(&log(500.0, 0.0), &van));
        assert!(!detect_fuel_anomalies(&log(0.0, 0.0), &van));
    }

    #[test]
    fn test_anomaly_zero_baseline_is_never_anomalous() {
        let broken = vehicle(0.0);
        assert!(!detect_fuel_anomalies(&log(50.0, 100.0), &broken));
        assert_eq!(describe_fuel_anomaly(&log(50.0, 100.0), &broken), None);
    }

    #[test]
    fn test_anomaly_description() {
        let van = vehicle(10.0);

        assert_eq!(
            describe_fuel_anomaly(&log(150.0, 1000.0), &van).as_deref(),
            Some("Used 50% more fuel than expected (150.0 L vs 100.0 L)")
        );
        assert_eq!(
            describe_fuel_anomaly(&log(75.0, 1000.0), &van).as_deref(),
            Some("Used 25% less fuel than expected (75.0 L vs 100.0 L)")
        );
        assert_eq!(describe_fuel_anomaly(&log(105.0, 1000.0), &van), None);
    }

    #[test]
    fn test_fuel_savings() {
        assert_eq!(calculate_fuel_savings(20.0, 15.0, 1.5), 7.5);
        assert_eq!(calculate_fuel_savings(15.0, 20.0, 1.5), -7.5);
        assert_eq!(calculate_fuel_savings(15.0, 15.0, 2.0), 0.0);
    }

    #[test]
    fn test_budget_status_non_positive_budget() {
        for budget in [0.0, -100.0] {
            let status = get_budget_status(250.0, budget, DEFAULT_ALERT_THRESHOLD);
            assert_eq!(status.status, BudgetLevel::Good);
            assert_eq!(status.percentage, 0.0);
            assert_eq!(status.remaining, 0.0);
        }
    }

    #[test]
    fn test_budget_status_levels() {
        let exhausted = get_budget_status(500.0, 500.0, DEFAULT_ALERT_THRESHOLD);
        assert_eq!(exhausted.status, BudgetLevel::Critical);
        assert_eq!(exhausted.percentage, 100.0);
        assert_eq!(exhausted.remaining, 0.0);

        let at_threshold = get_budget_status(400.0, 500.0, DEFAULT_ALERT_THRESHOLD);
        assert_eq!(at_threshold.status, BudgetLevel::Warning);
        assert_eq!(at_threshold.percentage, 80.0);

        let nearly = get_budget_status(495.0, 500.0, DEFAULT_ALERT_THRESHOLD);
        assert_eq!(nearly.status, BudgetLevel::Warning);

        let fine = get_budget_status(100.0, 500.0, DEFAULT_ALERT_THRESHOLD);
        assert_eq!(fine.status, BudgetLevel::Good);
        assert_eq!(fine.percentage, 20.0);
        assert_eq!(fine.remaining, 400.0);
    }

    #[test]
    fn test_budget_status_overspend_has_negative_remaining() {
        let status = get_budget_status(600.0, 500.0, DEFAULT_ALERT_THRESHOLD);
        assert_eq!(status.status, BudgetLevel::Critical);
        assert_eq!(status.percentage, 120.0);
        assert_eq!(status.remaining, -100.0);
    }

    #[test]
    fn test_budget_status_custom_threshold() {
        assert_eq!(get_budget_status(60.0, 100.0, 50.0).status, BudgetLevel::Warning);
        assert_eq!(get_budget_status(60.0, 100.0, 90.0).status, BudgetLevel::Good);
    }

    #[test]
    fn test_predict_fuel_consumption() {
        assert_eq!(predict_fuel_consumption(100.0, 10.0, 100.0), 10.0);
        assert_eq!(predict_fuel_consumption(100.0, 10.0, 50.0), 15.0);
        assert_eq!(predict_fuel_consumption(0.0, 10.0, 80.0), 0.0);
    }
}
