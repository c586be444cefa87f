use crate::db::db::Db;
use crate::libs::fleet::{Trip, TripStatus};
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

const UPSERT_TRIP: &str = "INSERT OR REPLACE INTO trips
    (id, vehicle_id, driver_id, start_time, end_time, distance, fuel_used, cost, status,
     predicted_fuel, actual_fuel, route, tag)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)";
const SELECT_COLUMNS: &str = "SELECT id, vehicle_id, driver_id, start_time, end_time, distance, fuel_used, cost,
    status, predicted_fuel, actual_fuel, route, tag FROM trips";
const DELETE_TRIP: &str = "DELETE FROM trips WHERE id = ?1";

pub struct Trips {
    conn: Connection,
}

impl Trips {
    pub fn new() -> Result<Self> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_db(Db::open(path)?))
    }

    pub fn from_db(db: Db) -> Self {
        Self { conn: db.conn }
    }

    pub fn upsert(&mut self, trip: &Trip) -> Result<()> {
        upsert(&self.conn, trip)
    }

    pub fn fetch_all(&mut self) -> Result<Vec<Trip>> {
        select_all(&self.conn)
    }

    /// Trips that started at or after `start`, oldest first.
    pub fn fetch_since(&mut self, start: NaiveDateTime) -> Result<Vec<Trip>> {
        select_since(&self.conn, start)
    }

    pub fn fetch_by_id(&mut self, id: &str) -> Result<Option<Trip>> {
        self.conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_COLUMNS), params![id], from_row)
            .optional()
            .map_err(Into::into)
    }

    pub fn delete(&mut self, id: &str) -> Result<()> {
        let affected = self.conn.execute(DELETE_TRIP, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TripNotFound(id.to_string())));
        }
        Ok(())
    }
}

pub(crate) fn upsert(conn: &Connection, trip: &Trip) -> Result<()> {
    conn.execute(
        UPSERT_TRIP,
        params![
            trip.id,
            trip.vehicle_id,
            trip.driver_id,
            trip.start_time,
            trip.end_time,
            trip.distance,
            trip.fuel_used,
            trip.cost,
            trip.status.as_str(),
            trip.predicted_fuel,
            trip.actual_fuel,
            trip.route,
            trip.tag,
        ],
    )?;
    Ok(())
}

pub(crate) fn select_all(conn: &Connection) -> Result<Vec<Trip>> {
    let mut stmt = conn.prepare(&format!("{} ORDER BY start_time, id", SELECT_COLUMNS))?;
    let trip_iter = stmt.query_map([], from_row)?;

    let mut trips = Vec::new();
    for trip in trip_iter {
        trips.push(trip?);
    }
    Ok(trips)
}

pub(crate) fn select_since(conn: &Connection, start: NaiveDateTime) -> Result<Vec<Trip>> {
    let mut stmt = conn.prepare(&format!("{} WHERE start_time >= ?1 ORDER BY start_time, id", SELECT_COLUMNS))?;
    let trip_iter = stmt.query_map(params![start], from_row)?;

    let mut trips = Vec::new();
    for trip in trip_iter {
        trips.push(trip?);
    }
    Ok(trips)
}

fn from_row(row: &Row) -> rusqlite::Result<Trip> {
    Ok(Trip {
        id: row.get(0)?,
        vehicle_id: row.get(1)?,
        driver_id: row.get(2)?,
        start_time: row.get(3)?,
        end_time: row.get(4)?,
        distance: row.get(5)?,
        fuel_used: row.get(6)?,
        cost: row.get(7)?,
        status: TripStatus::parse(&row.get::<_, String>(8)?).unwrap_or_default(),
        predicted_fuel: row.get(9)?,
        actual_fuel: row.get(10)?,
        route: row.get(11)?,
        tag: row.get(12)?,
    })
}
