use crate::db::db::Db;
use crate::libs::fleet::{Vehicle, VehicleStatus};
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

const UPSERT_VEHICLE: &str = "INSERT OR REPLACE INTO vehicles
    (id, name, license_plate, average_consumption, efficiency_score, monthly_budget, current_spend, department, status)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const SELECT_ALL_VEHICLES: &str = "SELECT id, name, license_plate, average_consumption, efficiency_score,
    monthly_budget, current_spend, department, status FROM vehicles ORDER BY id";
const SELECT_VEHICLE_BY_ID: &str = "SELECT id, name, license_plate, average_consumption, efficiency_score,
    monthly_budget, current_spend, department, status FROM vehicles WHERE id = ?1";
const DELETE_VEHICLE: &str = "DELETE FROM vehicles WHERE id = ?1";

pub struct Vehicles {
    conn: Connection,
}

impl Vehicles {
    pub fn new() -> Result<Self> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_db(Db::open(path)?))
    }

    pub fn from_db(db: Db) -> Self {
        Self { conn: db.conn }
    }

    pub fn upsert(&mut self, vehicle: &Vehicle) -> Result<()> {
        upsert(&self.conn, vehicle)
    }

    pub fn fetch_all(&mut self) -> Result<Vec<Vehicle>> {
        select_all(&self.conn)
    }

    pub fn fetch_by_id(&mut self, id: &str) -> Result<Option<Vehicle>> {
        self.conn
            .query_row(SELECT_VEHICLE_BY_ID, params![id], from_row)
            .optional()
            .map_err(Into::into)
    }

    pub fn delete(&mut self, id: &str) -> Result<()> {
        let affected = self.conn.execute(DELETE_VEHICLE, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::VehicleNotFound(id.to_string())));
        }
        Ok(())
    }
}

pub(crate) fn upsert(conn: &Connection, vehicle: &Vehicle) -> Result<()> {
    conn.execute(
        UPSERT_VEHICLE,
        params![
            vehicle.id,
            vehicle.name,
            vehicle.license_plate,
            vehicle.average_consumption,
            vehicle.efficiency_score,
            vehicle.monthly_budget,
            vehicle.current_spend,
            vehicle.department,
            vehicle.status.as_str(),
        ],
    )?;
    Ok(())
}

pub(crate) fn select_all(conn: &Connection) -> Result<Vec<Vehicle>> {
    let mut stmt = conn.prepare(SELECT_ALL_VEHICLES)?;
    let vehicle_iter = stmt.query_map([], from_row)?;

    let mut vehicles = Vec::new();
    for vehicle in vehicle_iter {
        vehicles.push(vehicle?);
    }
    Ok(vehicles)
}

fn from_row(row: &Row) -> rusqlite::Result<Vehicle> {
    Ok(Vehicle {
        id: row.get(0)?,
        name: row.get(1)?,
        license_plate: row.get(2)?,
        average_consumption: row.get(3)?,
        efficiency_score: row.get(4)?,
        monthly_budget: row.get(5)?,
        current_spend: row.get(6)?,
        department: row.get(7)?,
        status: VehicleStatus::parse(&row.get::<_, String>(8)?).unwrap_or_default(),
    })
}
