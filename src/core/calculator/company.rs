use crate::core::calculator::employee::Averages;
use crate::errors::AppResult;
use crate::models::StatsSummary;
use crate::utils::time::{format_avg_minutes, parse_hmm};

/// Company averages from the employees' *formatted* stats.
///
/// Each `H:MM` value is parsed back to whole minutes, summed over employees
/// and divided by the employee count, so per-employee truncation carries
/// into the result. Employees without records count as `0:00`.
pub fn company_stats(per_employee: &[StatsSummary]) -> AppResult<StatsSummary> {
    if per_employee.is_empty() {
        return Ok(StatsSummary::zero());
    }

    let mut delay = 0i64;
    let mut overtime = 0i64;
    let mut workday = 0i64;

    for s in per_employee {
        delay += parse_hmm(&s.avg_delay)?;
        overtime += parse_hmm(&s.avg_overtime)?;
        workday += parse_hmm(&s.avg_workday)?;
    }

    let n = per_employee.len() as f64;
    Ok(StatsSummary {
        avg_delay: format_avg_minutes(delay as f64 / n),
        avg_overtime: format_avg_minutes(overtime as f64 / n),
        avg_workday: format_avg_minutes(workday as f64 / n),
    })
}

/// Company averages from the untruncated per-employee averages.
/// `None` entries (no complete records) count as zero.
pub fn company_stats_raw(per_employee: &[Option<Averages>]) -> StatsSummary {
    if per_employee.is_empty() {
        return StatsSummary::zero();
    }

    let mut sum = Averages::default();
    for a in per_employee.iter().flatten() {
        sum.delay += a.delay;
        sum.overtime += a.overtime;
        sum.workday += a.workday;
    }

    let n = per_employee.len() as f64;
    Averages {
        delay: sum.delay / n,
        overtime: sum.overtime / n,
        workday: sum.workday / n,
        days: 0,
    }
    .to_summary()
}
