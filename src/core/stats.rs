use crate::config::CompanyAverage;
use crate::core::calculator::{averages, company_stats, company_stats_raw, employee_stats};
use crate::core::employee::EmployeeLogic;
use crate::db::pool::DbPool;
use crate::db::queries::{load_employees, load_schedule, load_time_records};
use crate::errors::AppResult;
use crate::models::StatsSummary;
use serde::Serialize;

/// Per-employee rows plus the company line, as shown by `stats`.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    pub schedule_start: String,
    pub schedule_end: String,
    pub employees: Vec<EmployeeStatsRow>,
    pub company: StatsSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmployeeStatsRow {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub days: usize,
    pub stats: StatsSummary,
}

/// Statistics read straight from the store; nothing is cached.
pub struct StatsLogic;

impl StatsLogic {
    pub fn employee(pool: &DbPool, employee_id: i64) -> AppResult<StatsSummary> {
        EmployeeLogic::get(pool, employee_id)?;
        let schedule = load_schedule(&pool.conn)?;
        let records = load_time_records(&pool.conn, employee_id)?;
        Ok(employee_stats(&schedule, &records))
    }

    pub fn company(pool: &DbPool, mode: CompanyAverage) -> AppResult<StatsSummary> {
        Ok(Self::report(pool, mode)?.company)
    }

    pub fn report(pool: &DbPool, mode: CompanyAverage) -> AppResult<StatsReport> {
        let schedule = load_schedule(&pool.conn)?;
        let employees = load_employees(&pool.conn)?;

        let mut rows = Vec::with_capacity(employees.len());
        let mut raw = Vec::with_capacity(employees.len());

        for emp in employees {
            let records = load_time_records(&pool.conn, emp.id)?;
            let avg = averages(&schedule, &records);
            rows.push(EmployeeStatsRow {
                id: emp.id,
                name: emp.name,
                position: emp.position,
                days: avg.map(|a| a.days).unwrap_or(0),
                stats: avg.map(|a| a.to_summary()).unwrap_or_else(StatsSummary::zero),
            });
            raw.push(avg);
        }

        let company = match mode {
            CompanyAverage::Truncated => {
                let summaries: Vec<StatsSummary> = rows.iter().map(|r| r.stats.clone()).collect();
                company_stats(&summaries)?
            }
            CompanyAverage::Raw => company_stats_raw(&raw),
        };

        Ok(StatsReport {
            schedule_start: schedule.start_str(),
            schedule_end: schedule.end_str(),
            employees: rows,
            company,
        })
    }
}
