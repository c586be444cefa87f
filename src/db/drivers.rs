use crate::db::db::Db;
use crate::libs::fleet::Driver;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

const UPSERT_DRIVER: &str = "INSERT OR REPLACE INTO drivers
    (id, name, efficiency_score, total_trips, total_distance, total_fuel_used, department)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_ALL_DRIVERS: &str = "SELECT id, name, efficiency_score, total_trips, total_distance,
    total_fuel_used, department FROM drivers ORDER BY id";
const SELECT_DRIVER_BY_ID: &str = "SELECT id, name, efficiency_score, total_trips, total_distance,
    total_fuel_used, department FROM drivers WHERE id = ?1";
const DELETE_DRIVER: &str = "DELETE FROM drivers WHERE id = ?1";

pub struct Drivers {
    conn: Connection,
}

impl Drivers {
    pub fn new() -> Result<Self> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_db(Db::open(path)?))
    }

    pub fn from_db(db: Db) -> Self {
        Self { conn: db.conn }
    }

    pub fn upsert(&mut self, driver: &Driver) -> Result<()> {
        upsert(&self.conn, driver)
    }

    pub fn fetch_all(&mut self) -> Result<Vec<Driver>> {
        select_all(&self.conn)
    }

    pub fn fetch_by_id(&mut self, id: &str) -> Result<Option<Driver>> {
        self.conn
            .query_row(SELECT_DRIVER_BY_ID, params![id], from_row)
            .optional()
            .map_err(Into::into)
    }

    pub fn delete(&mut self, id: &str) -> Result<()> {
        let affected = self.conn.execute(DELETE_DRIVER, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::DriverNotFound(id.to_string())));
        }
        Ok(())
    }
}

pub(crate) fn upsert(conn: &Connection, driver: &Driver) -> Result<()> {
    conn.execute(
        UPSERT_DRIVER,
        params![
            driver.id,
            driver.name,
            driver.efficiency_score,
            driver.total_trips,
            driver.total_distance,
            driver.total_fuel_used,
            driver.department,
        ],
    )?;
    Ok(())
}

pub(crate) fn select_all(conn: &Connection) -> Result<Vec<Driver>> {
    let mut stmt = conn.prepare(SELECT_ALL_DRIVERS)?;
    let driver_iter = stmt.query_map([], from_row)?;

    let mut drivers = Vec::new();
    for driver in driver_iter {
        drivers.push(driver?);
    }
    Ok(drivers)
}

fn from_row(row: &Row) -> rusqlite::Result<Driver> {
    Ok(Driver {
        id: row.get(0)?,
        name: row.get(1)?,
        efficiency_score: row.get(2)?,
        total_trips: row.get(3)?,
        total_distance: row.get(4)?,
        total_fuel_used: row.get(5)?,
        department: row.get(6)?,
    })
}
