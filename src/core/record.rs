use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{UpsertOutcome, employee_exists, load_time_records, upsert_time_record};
use crate::errors::{AppError, AppResult};
use crate::models::TimeRecord;
use chrono::{NaiveDate, NaiveTime};

/// High-level business logic for daily time records.
pub struct RecordLogic;

impl RecordLogic {
    /// Save arrival/departure for one employee and day, overwriting any
    /// values already stored for that day.
    ///
    /// No ordering check between arrival and departure is made here.
    pub fn record(
        pool: &mut DbPool,
        employee_id: i64,
        date: NaiveDate,
        arrival: Option<NaiveTime>,
        departure: Option<NaiveTime>,
    ) -> AppResult<UpsertOutcome> {
        if !employee_exists(&pool.conn, employee_id)? {
            return Err(AppError::EmployeeNotFound(employee_id));
        }

        let rec = TimeRecord {
            employee_id,
            date,
            arrival,
            departure,
        };

        let outcome = pool.with_conn(|conn| upsert_time_record(conn, &rec))?;

        let op = match outcome {
            UpsertOutcome::Inserted => "add",
            UpsertOutcome::Updated => "edit",
        };
        ttlog_quiet(
            &pool.conn,
            op,
            &format!("employee #{} {}", employee_id, rec.date_str()),
            &format!("in={} out={}", rec.arrival_str(), rec.departure_str()),
        );

        Ok(outcome)
    }

    /// Records of one employee, most recent day first.
    pub fn list(pool: &DbPool, employee_id: i64) -> AppResult<Vec<TimeRecord>> {
        if !employee_exists(&pool.conn, employee_id)? {
            return Err(AppError::EmployeeNotFound(employee_id));
        }
        load_time_records(&pool.conn, employee_id)
    }
}
