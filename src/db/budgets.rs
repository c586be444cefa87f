use crate::db::db::Db;
use crate::libs::fleet::{Budget, BudgetPeriod};
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

const UPSERT_BUDGET: &str = "INSERT INTO budgets
    (id, department, period, monthly_limit, weekly_limit, current_spend, alert_threshold)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
    ON CONFLICT(id) DO UPDATE SET
        department = excluded.department,
        period = excluded.period,
        monthly_limit = excluded.monthly_limit,
        weekly_limit = excluded.weekly_limit,
        current_spend = excluded.current_spend,
        alert_threshold = excluded.alert_threshold";
const SELECT_ALL_BUDGETS: &str = "SELECT id, department, period, monthly_limit, weekly_limit, current_spend,
    alert_threshold FROM budgets ORDER BY id";
const SELECT_BUDGET_BY_ID: &str = "SELECT id, department, period, monthly_limit, weekly_limit, current_spend,
    alert_threshold FROM budgets WHERE id = ?1";
const DELETE_BUDGET: &str = "DELETE FROM budgets WHERE id = ?1";
const SELECT_BUDGET_VEHICLES: &str = "SELECT vehicle_id FROM budget_vehicles WHERE budget_id = ?1 ORDER BY vehicle_id";
const INSERT_BUDGET_VEHICLE: &str = "INSERT OR IGNORE INTO budget_vehicles (budget_id, vehicle_id) VALUES (?1, ?2)";
const DELETE_BUDGET_VEHICLES: &str = "DELETE FROM budget_vehicles WHERE budget_id = ?1";

pub struct Budgets {
    conn: Connection,
}

impl Budgets {
    pub fn new() -> Result<Self> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_db(Db::open(path)?))
    }

    pub fn from_db(db: Db) -> Self {
        Self { conn: db.conn }
    }

    /// Inserts or replaces a budget together with its covered vehicle ids.
    pub fn upsert(&mut self, budget: &Budget) -> Result<()> {
        let tx = self.conn.transaction()?;
        upsert(&tx, budget)?;
        tx.commit()?;
        Ok(())
    }

    pub fn fetch_all(&mut self) -> Result<Vec<Budget>> {
        select_all(&self.conn)
    }

    pub fn fetch_by_id(&mut self, id: &str) -> Result<Option<Budget>> {
        let budget = self
            .conn
            .query_row(SELECT_BUDGET_BY_ID, params![id], from_row)
            .optional()?;

        match budget {
            Some(mut budget) => {
                budget.vehicle_ids = select_vehicle_ids(&self.conn, &budget.id)?;
                Ok(Some(budget))
            }
            None => Ok(None),
        }
    }

    pub fn delete(&mut self, id: &str) -> Result<()> {
        let affected = self.conn.execute(DELETE_BUDGET, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::BudgetNotFound(id.to_string())));
        }
        // The cascade only fires with foreign keys enabled
        self.conn.execute(DELETE_BUDGET_VEHICLES, params![id])?;
        Ok(())
    }
}

/// Writes the budget row and replaces its vehicle list.
///
/// Callers wrap this in a transaction so the two tables never disagree.
pub(crate) fn upsert(conn: &Connection, budget: &Budget) -> Result<()> {
    conn.execute(
        UPSERT_BUDGET,
        params![
            budget.id,
            budget.department,
            budget.period.as_str(),
            budget.monthly_limit,
            budget.weekly_limit,
            budget.current_spend,
            budget.alert_threshold,
        ],
    )?;

    conn.execute(DELETE_BUDGET_VEHICLES, params![budget.id])?;
    for vehicle_id in &budget.vehicle_ids {
        conn.execute(INSERT_BUDGET_VEHICLE, params![budget.id, vehicle_id])?;
    }
    Ok(())
}

pub(crate) fn select_all(conn: &Connection) -> Result<Vec<Budget>> {
    let mut stmt = conn.prepare(SELECT_ALL_BUDGETS)?;
    let budget_iter = stmt.query_map([], from_row)?;

    let mut budgets = Vec::new();
    for budget in budget_iter {
        let mut budget = budget?;
        budget.vehicle_ids = select_vehicle_ids(conn, &budget.id)?;
        budgets.push(budget);
    }
    Ok(budgets)
}

fn select_vehicle_ids(conn: &Connection, budget_id: &str) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(SELECT_BUDGET_VEHICLES)?;
    let ids = stmt
        .query_map(params![budget_id], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ids)
}

fn from_row(row: &Row) -> rusqlite::Result<Budget> {
    Ok(Budget {
        id: row.get(0)?,
        department: row.get(1)?,
        period: BudgetPeriod::parse(&row.get::<_, String>(2)?).unwrap_or_default(),
        monthly_limit: row.get(3)?,
        weekly_limit: row.get(4)?,
        current_spend: row.get(5)?,
        vehicle_ids: Vec::new(),
        alert_threshold: row.get(6)?,
    })
}
