use super::load_fleet;
use crate::{
    libs::{config::Config, error::FleetError, messages::Message, metrics::predict_fuel_consumption, view::View},
    msg_print,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct PredictArgs {
    /// Vehicle id
    #[arg(long)]
    vehicle: String,

    /// Driver id
    #[arg(long)]
    driver: String,

    /// Planned distance in kilometers
    #[arg(long)]
    distance: f64,

    /// Fuel price per liter; overrides the configured price
    #[arg(short = 'p', long)]
    fuel_price: Option<f64>,

    /// Read fleet data from a JSON snapshot instead of the store
    #[arg(short, long)]
    file: Option<PathBuf>,
}

pub fn cmd(args: PredictArgs) -> Result<()> {
    if !args.distance.is_finite() || args.distance <= 0.0 {
        return Err(FleetError::InvalidValue {
            field: "distance".to_string(),
            value: args.distance.to_string(),
        }
        .into());
    }

    let config = Config::read()?.analytics_or_default();
    let fuel_price = args.fuel_price.unwrap_or(config.fuel_price);
    let fleet = load_fleet(args.file.as_deref(), &config)?;

    let vehicle = fleet
        .vehicle(&args.vehicle)
        .ok_or_else(|| FleetError::VehicleNotFound(args.vehicle.clone()))?;
    let driver = fleet
        .driver(&args.driver)
        .ok_or_else(|| FleetError::DriverNotFound(args.driver.clone()))?;

    let liters = predict_fuel_consumption(args.distance, vehicle.average_consumption, driver.efficiency_score);

    msg_print!(Message::PredictionHeader(vehicle.name.clone(), driver.name.clone()), true);
    View::prediction(vehicle, driver, args.distance, liters, liters * fuel_price)?;

    Ok(())
}
