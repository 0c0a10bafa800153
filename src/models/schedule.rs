use chrono::NaiveTime;
use serde::Serialize;

/// Company-wide workday window used as baseline for delay and overtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkSchedule {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl WorkSchedule {
    pub const DEFAULT_START: &'static str = "09:00";
    pub const DEFAULT_END: &'static str = "18:00";

    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    pub fn start_str(&self) -> String {
        self.start.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%H:%M").to_string()
    }
}

impl Default for WorkSchedule {
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            end: NaiveTime::from_hms_opt(18, 0, 0).unwrap_or_default(),
        }
    }
}
