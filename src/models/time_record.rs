use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One day of attendance for one employee.
///
/// Arrival and departure are optional: a record missing either side is a
/// *partial* record, kept in the store but ignored by statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeRecord {
    pub employee_id: i64,
    pub date: NaiveDate,
    pub arrival: Option<NaiveTime>,
    pub departure: Option<NaiveTime>,
}

impl TimeRecord {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn arrival_str(&self) -> String {
        fmt_opt_time(self.arrival)
    }

    pub fn departure_str(&self) -> String {
        fmt_opt_time(self.departure)
    }

    /// Both ends present → (arrival, departure).
    pub fn complete(&self) -> Option<(NaiveTime, NaiveTime)> {
        match (self.arrival, self.departure) {
            (Some(a), Some(d)) => Some((a, d)),
            _ => None,
        }
    }
}

fn fmt_opt_time(t: Option<NaiveTime>) -> String {
    t.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}
