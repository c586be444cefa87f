use crate::db::db::Db;
use crate::libs::fleet::FuelLog;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

const UPSERT_FUEL_LOG: &str = "INSERT OR REPLACE INTO fuel_logs
    (id, vehicle_id, driver_id, date, liters, cost, trip_distance, efficiency, is_anomalous, anomaly_reason, tag)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)";
const SELECT_COLUMNS: &str = "SELECT id, vehicle_id, driver_id, date, liters, cost, trip_distance, efficiency,
    is_anomalous, anomaly_reason, tag FROM fuel_logs";
const DELETE_FUEL_LOG: &str = "DELETE FROM fuel_logs WHERE id = ?1";

pub struct FuelLogs {
    conn: Connection,
}

impl FuelLogs {
    pub fn new() -> Result<Self> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_db(Db::open(path)?))
    }

    pub fn from_db(db: Db) -> Self {
        Self { conn: db.conn }
    }

    pub fn upsert(&mut self, log: &FuelLog) -> Result<()> {
        upsert(&self.conn, log)
    }

    /// All fuel logs, oldest first.
    pub fn fetch_all(&mut self) -> Result<Vec<FuelLog>> {
        select_all(&self.conn)
    }

    /// Fuel logs dated at or after `start`, oldest first.
    pub fn fetch_since(&mut self, start: NaiveDateTime) -> Result<Vec<FuelLog>> {
        select_since(&self.conn, start)
    }

    pub fn fetch_by_id(&mut self, id: &str) -> Result<Option<FuelLog>> {
        self.conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_COLUMNS), params![id], from_row)
            .optional()
            .map_err(Into::into)
    }

    pub fn delete(&mut self, id: &str) -> Result<()> {
        let affected = self.conn.execute(DELETE_FUEL_LOG, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::FuelLogNotFound(id.to_string())));
        }
        Ok(())
    }
}

pub(crate) fn upsert(conn: &Connection, log: &FuelLog) -> Result<()> {
    conn.execute(
        UPSERT_FUEL_LOG,
        params![
            log.id,
            log.vehicle_id,
            log.driver_id,
            log.date,
            log.liters,
            log.cost,
            log.trip_distance,
            log.efficiency,
            log.is_anomalous,
            log.anomaly_reason,
            log.tag,
        ],
    )?;
    Ok(())
}

pub(crate) fn select_all(conn: &Connection) -> Result<Vec<FuelLog>> {
    let mut stmt = conn.prepare(&format!("{} ORDER BY date, id", SELECT_COLUMNS))?;
    let log_iter = stmt.query_map([], from_row)?;

    let mut logs = Vec::new();
    for log in log_iter {
        logs.push(log?);
    }
    Ok(logs)
}

pub(crate) fn select_since(conn: &Connection, start: NaiveDateTime) -> Result<Vec<FuelLog>> {
    let mut stmt = conn.prepare(&format!("{} WHERE date >= ?1 ORDER BY date, id", SELECT_COLUMNS))?;
    let log_iter = stmt.query_map(params![start], from_row)?;

    let mut logs = Vec::new();
    for log in log_iter {
        logs.push(log?);
    }
    Ok(logs)
}

fn from_row(row: &Row) -> rusqlite::Result<FuelLog> {
    Ok(FuelLog {
        id: row.get(0)?,
        vehicle_id: row.get(1)?,
        driver_id: row.get(2)?,
        date: row.get(3)?,
        liters: row.get(4)?,
        cost: row.get(5)?,
        trip_distance: row.get(6)?,
        efficiency: row.get(7)?,
        is_anomalous: row.get(8)?,
        anomaly_reason: row.get(9)?,
        tag: row.get(10)?,
    })
}
