use crate::core::stats::StatsReport;
use crate::models::TimeRecord;
use serde::Serialize;

/// Flat row for time record export.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub employee_id: i64,
    pub employee: String,
    pub date: String,
    pub arrival_time: Option<String>,
    pub departure_time: Option<String>,
}

impl RecordExport {
    pub fn from_record(name: &str, rec: &TimeRecord) -> Self {
        Self {
            employee_id: rec.employee_id,
            employee: name.to_string(),
            date: rec.date_str(),
            arrival_time: rec.arrival.map(|t| t.format("%H:%M").to_string()),
            departure_time: rec.departure.map(|t| t.format("%H:%M").to_string()),
        }
    }
}

/// Flat row for statistics export; the company line has `scope = "company"`
/// and no employee fields.
#[derive(Serialize, Clone, Debug)]
pub struct StatsExport {
    pub scope: String,
    pub employee_id: Option<i64>,
    pub name: Option<String>,
    pub position: Option<String>,
    pub days: Option<usize>,
    pub avg_delay: String,
    pub avg_overtime: String,
    pub avg_workday: String,
}

pub(crate) fn stats_rows(report: &StatsReport) -> Vec<StatsExport> {
    let mut out: Vec<StatsExport> = report
        .employees
        .iter()
        .map(|r| StatsExport {
            scope: "employee".into(),
            employee_id: Some(r.id),
            name: Some(r.name.clone()),
            position: Some(r.position.clone()),
            days: Some(r.days),
            avg_delay: r.stats.avg_delay.clone(),
            avg_overtime: r.stats.avg_overtime.clone(),
            avg_workday: r.stats.avg_workday.clone(),
        })
        .collect();

    out.push(StatsExport {
        scope: "company".into(),
        employee_id: None,
        name: None,
        position: None,
        days: None,
        avg_delay: report.company.avg_delay.clone(),
        avg_overtime: report.company.avg_overtime.clone(),
        avg_workday: report.company.avg_workday.clone(),
    });

    out
}
