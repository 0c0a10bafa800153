use crate::models::WorkSchedule;
use crate::utils::time::{minutes_between, minutes_of_day};
use chrono::NaiveTime;

/// Minutes contributed by a single complete day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayMinutes {
    pub delay: i64,
    pub overtime: i64,
    pub workday: i64,
}

/// Delay and overtime count only when strictly past the schedule boundary.
/// Workday length is not clamped: departure before arrival gives a negative value.
pub fn day_minutes(schedule: &WorkSchedule, arrival: NaiveTime, departure: NaiveTime) -> DayMinutes {
    let delay = (minutes_of_day(arrival) - minutes_of_day(schedule.start)).max(0);
    let overtime = (minutes_of_day(departure) - minutes_of_day(schedule.end)).max(0);

    DayMinutes {
        delay,
        overtime,
        workday: minutes_between(arrival, departure),
    }
}
