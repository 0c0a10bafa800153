use crate::core::calculator::daily::{DayMinutes, day_minutes};
use crate::models::{StatsSummary, TimeRecord, WorkSchedule};
use crate::utils::time::format_avg_minutes;

/// Untruncated per-employee averages, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Averages {
    pub delay: f64,
    pub overtime: f64,
    pub workday: f64,
    /// Number of complete records the averages were taken over.
    pub days: usize,
}

impl Averages {
    pub fn to_summary(&self) -> StatsSummary {
        StatsSummary {
            avg_delay: format_avg_minutes(self.delay),
            avg_overtime: format_avg_minutes(self.overtime),
            avg_workday: format_avg_minutes(self.workday),
        }
    }
}

/// Average over the complete records; partial records are skipped.
/// `None` when nothing is left to average.
pub fn averages(schedule: &WorkSchedule, records: &[TimeRecord]) -> Option<Averages> {
    let mut total = DayMinutes::default();
    let mut days = 0usize;

    for (arrival, departure) in records.iter().filter_map(TimeRecord::complete) {
        let day = day_minutes(schedule, arrival, departure);
        total.delay += day.delay;
        total.overtime += day.overtime;
        total.workday += day.workday;
        days += 1;
    }

    if days == 0 {
        return None;
    }

    let n = days as f64;
    Some(Averages {
        delay: total.delay as f64 / n,
        overtime: total.overtime as f64 / n,
        workday: total.workday as f64 / n,
        days,
    })
}

/// Formatted averages for one employee; all `0:00` without complete records.
pub fn employee_stats(schedule: &WorkSchedule, records: &[TimeRecord]) -> StatsSummary {
    averages(schedule, records)
        .map(|a| a.to_summary())
        .unwrap_or_else(StatsSummary::zero)
}
