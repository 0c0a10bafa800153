use crate::errors::{AppError, AppResult};
use crate::models::{Employee, TimeRecord, WorkSchedule};
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, TransactionBehavior, params};

/// Whether an upsert created a new day or overwrote an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_db_date(idx: usize, s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| conversion_error(idx, AppError::InvalidDate(s.to_string())))
}

/// NULL and "" both mean "not recorded".
fn parse_db_time(idx: usize, s: Option<String>) -> Result<Option<NaiveTime>> {
    match s {
        None => Ok(None),
        Some(v) if v.trim().is_empty() => Ok(None),
        Some(v) => NaiveTime::parse_from_str(v.trim(), "%H:%M")
            .map(Some)
            .map_err(|_| conversion_error(idx, AppError::InvalidTime(v.clone()))),
    }
}

fn fmt_time(t: Option<NaiveTime>) -> Option<String> {
    t.map(|t| t.format("%H:%M").to_string())
}

// ---------------------------------------------------------------------------
// Employees
// ---------------------------------------------------------------------------

pub fn map_employee(row: &Row) -> Result<Employee> {
    let hire_str: String = row.get("hire_date")?;

    Ok(Employee {
        id: row.get("id")?,
        name: row.get("name")?,
        position: row.get("position")?,
        hire_date: parse_db_date(3, &hire_str)?,
    })
}

pub fn insert_employee(
    conn: &Connection,
    name: &str,
    position: &str,
    hire_date: &NaiveDate,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO employees (name, position, hire_date) VALUES (?1, ?2, ?3)",
        params![name, position, hire_date.format("%Y-%m-%d").to_string()],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Delete an employee and all of its time records.
///
/// Missing ids are not an error; the return value tells whether a row was removed.
pub fn delete_employee(conn: &mut Connection, id: i64) -> AppResult<bool> {
    let tx = conn.transaction()?;

    // Cascade explicitly as well: legacy files may have been written with
    // foreign keys disabled.
    tx.execute("DELETE FROM time_records WHERE employee_id = ?1", [id])?;
    let removed = tx.execute("DELETE FROM employees WHERE id = ?1", [id])?;

    tx.commit()?;
    Ok(removed > 0)
}

pub fn load_employees(conn: &Connection) -> AppResult<Vec<Employee>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, position, hire_date FROM employees
         ORDER BY name ASC, id ASC",
    )?;

    let rows = stmt.query_map([], map_employee)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_employee(conn: &Connection, id: i64) -> AppResult<Option<Employee>> {
    let emp = conn
        .query_row(
            "SELECT id, name, position, hire_date FROM employees WHERE id = ?1",
            [id],
            map_employee,
        )
        .optional()?;
    Ok(emp)
}

pub fn employee_exists(conn: &Connection, id: i64) -> AppResult<bool> {
    let mut stmt = conn.prepare_cached("SELECT 1 FROM employees WHERE id = ?1")?;
    Ok(stmt.exists([id])?)
}

// ---------------------------------------------------------------------------
// Time records
// ---------------------------------------------------------------------------

pub fn map_time_record(row: &Row) -> Result<TimeRecord> {
    let date_str: String = row.get("date")?;

    Ok(TimeRecord {
        employee_id: row.get("employee_id")?,
        date: parse_db_date(1, &date_str)?,
        arrival: parse_db_time(2, row.get("arrival_time")?)?,
        departure: parse_db_time(3, row.get("departure_time")?)?,
    })
}

/// Insert the day, or overwrite arrival/departure of the existing
/// (employee, date) row. Select and write share one immediate transaction.
pub fn upsert_time_record(conn: &mut Connection, rec: &TimeRecord) -> AppResult<UpsertOutcome> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let date_str = rec.date_str();

    let existing: Option<i64> = tx
        .query_row(
            "SELECT id FROM time_records WHERE employee_id = ?1 AND date = ?2",
            params![rec.employee_id, date_str],
            |row| row.get(0),
        )
        .optional()?;

    let outcome = match existing {
        Some(id) => {
            tx.execute(
                "UPDATE time_records SET arrival_time = ?1, departure_time = ?2 WHERE id = ?3",
                params![fmt_time(rec.arrival), fmt_time(rec.departure), id],
            )?;
            UpsertOutcome::Updated
        }
        None => {
            tx.execute(
                "INSERT INTO time_records (employee_id, date, arrival_time, departure_time)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    rec.employee_id,
                    date_str,
                    fmt_time(rec.arrival),
                    fmt_time(rec.departure)
                ],
            )?;
            UpsertOutcome::Inserted
        }
    };

    tx.commit()?;
    Ok(outcome)
}

/// All records of one employee, most recent day first.
pub fn load_time_records(conn: &Connection, employee_id: i64) -> AppResult<Vec<TimeRecord>> {
    let mut stmt = conn.prepare(
        "SELECT employee_id, date, arrival_time, departure_time FROM time_records
         WHERE employee_id = ?1
         ORDER BY date DESC",
    )?;

    let rows = stmt.query_map([employee_id], map_time_record)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Every record joined with its employee's name, for export.
pub fn load_all_time_records(conn: &Connection) -> AppResult<Vec<(String, TimeRecord)>> {
    let mut stmt = conn.prepare(
        "SELECT e.name AS name, t.employee_id AS employee_id, t.date AS date,
                t.arrival_time AS arrival_time, t.departure_time AS departure_time
         FROM time_records t
         JOIN employees e ON e.id = t.employee_id
         ORDER BY e.name ASC, t.employee_id ASC, t.date DESC",
    )?;

    let rows = stmt.query_map([], |row| {
        let name: String = row.get("name")?;
        Ok((name, map_time_record(row)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Work schedule (singleton row id = 1)
// ---------------------------------------------------------------------------

pub fn load_schedule(conn: &Connection) -> AppResult<WorkSchedule> {
    let row: Option<(Option<String>, Option<String>)> = conn
        .query_row(
            "SELECT start_time, end_time FROM work_settings WHERE id = 1",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    let (start, end) = match row {
        Some((Some(s), Some(e))) => (s, e),
        _ => {
            return Err(AppError::Other(
                "work schedule row is missing; run `stafftime db --migrate`".into(),
            ));
        }
    };

    let start = NaiveTime::parse_from_str(start.trim(), "%H:%M")
        .map_err(|_| AppError::InvalidTime(start.clone()))?;
    let end = NaiveTime::parse_from_str(end.trim(), "%H:%M")
        .map_err(|_| AppError::InvalidTime(end.clone()))?;

    Ok(WorkSchedule::new(start, end))
}

/// Overwrite the schedule unconditionally.
pub fn save_schedule(conn: &Connection, schedule: &WorkSchedule) -> AppResult<()> {
    conn.execute(
        "INSERT INTO work_settings (id, start_time, end_time) VALUES (1, ?1, ?2)
         ON CONFLICT(id) DO UPDATE SET start_time = excluded.start_time,
                                       end_time   = excluded.end_time",
        params![schedule.start_str(), schedule.end_str()],
    )?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Internal log
// ---------------------------------------------------------------------------

pub struct LogRow {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub fn load_log(conn: &Connection) -> AppResult<Vec<LogRow>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, IFNULL(target, ''), message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(LogRow {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get(3)?,
            message: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
