use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{load_schedule, save_schedule};
use crate::errors::AppResult;
use crate::models::WorkSchedule;

pub struct ScheduleLogic;

impl ScheduleLogic {
    pub fn get(pool: &DbPool) -> AppResult<WorkSchedule> {
        load_schedule(&pool.conn)
    }

    /// Replace the schedule. Fields left as `None` keep their current value.
    pub fn update(
        pool: &mut DbPool,
        start: Option<chrono::NaiveTime>,
        end: Option<chrono::NaiveTime>,
    ) -> AppResult<WorkSchedule> {
        let current = load_schedule(&pool.conn)?;
        let next = WorkSchedule::new(start.unwrap_or(current.start), end.unwrap_or(current.end));

        save_schedule(&pool.conn, &next)?;

        ttlog_quiet(
            &pool.conn,
            "schedule",
            "work_settings",
            &format!(
                "{} - {} (was {} - {})",
                next.start_str(),
                next.end_str(),
                current.start_str(),
                current.end_str()
            ),
        );

        Ok(next)
    }
}
