use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::employee::EmployeeLogic;
use crate::core::stats::{StatsLogic, StatsReport};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{colorize_delay, colorize_overtime};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats {
        employee,
        company_average,
    } = cmd
    {
        let pool = DbPool::open(cfg)?;

        if let Some(id) = employee {
            let emp = EmployeeLogic::get(&pool, *id)?;
            let s = StatsLogic::employee(&pool, *id)?;

            header(format!("#{} {}", emp.id, emp.name));
            println!("Average delay    : {}", colorize_delay(&s.avg_delay));
            println!("Average overtime : {}", colorize_overtime(&s.avg_overtime));
            println!("Average workday  : {}", s.avg_workday);
            return Ok(());
        }

        let mode = company_average.unwrap_or(cfg.company_average);
        let report = StatsLogic::report(&pool, mode)?;
        print_report(&report, cfg);
    }

    Ok(())
}

fn print_report(report: &StatsReport, cfg: &Config) {
    info(format!(
        "Work schedule: {} - {}",
        report.schedule_start, report.schedule_end
    ));

    if report.employees.is_empty() {
        info("No employees yet.");
    } else {
        let mut table = Table::new(vec![
            Column::right("ID"),
            Column::left("NAME"),
            Column::right("DAYS"),
            Column::right("AVG DELAY"),
            Column::right("AVG OVERTIME"),
            Column::right("AVG WORKDAY"),
        ])
        .with_separator(cfg.separator());

        for r in &report.employees {
            table.add_row(vec![
                r.id.to_string(),
                r.name.clone(),
                r.days.to_string(),
                r.stats.avg_delay.clone(),
                r.stats.avg_overtime.clone(),
                r.stats.avg_workday.clone(),
            ]);
        }

        println!();
        print!("{}", table.render());
    }

    println!();
    header("Company");
    println!("Average delay    : {}", colorize_delay(&report.company.avg_delay));
    println!("Average overtime : {}", colorize_overtime(&report.company.avg_overtime));
    println!("Average workday  : {}", report.company.avg_workday);
}
