use crate::cli::commands::{del, record};
use crate::cli::parser::{Commands, EmployeeAction};
use crate::config::Config;
use crate::core::employee::EmployeeLogic;
use crate::core::record::RecordLogic;
use crate::core::stats::StatsLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::Employee;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{colorize_delay, colorize_overtime};
use crate::utils::date::parse_date_or_today;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Employee { action } = cmd {
        match action {
            EmployeeAction::Add {
                name,
                position,
                hired,
            } => {
                let hire_date = parse_date_or_today(hired.as_ref())?;
                let mut pool = DbPool::open(cfg)?;
                let id = EmployeeLogic::add(&mut pool, name, position, hire_date)?;
                success(format!(
                    "Employee #{} added: {} ({}), hired {}",
                    id,
                    name.trim(),
                    position.trim(),
                    hire_date
                ));
            }
            EmployeeAction::Del { id, yes } => del::handle(*id, *yes, cfg)?,
            EmployeeAction::List => {
                let pool = DbPool::open(cfg)?;
                print_employees(&EmployeeLogic::list(&pool)?, cfg);
            }
            EmployeeAction::Show { id } => {
                let pool = DbPool::open(cfg)?;
                let emp = EmployeeLogic::get(&pool, *id)?;
                let records = RecordLogic::list(&pool, *id)?;
                let stats = StatsLogic::employee(&pool, *id)?;

                header(format!("#{} {}", emp.id, emp.name));
                println!("Position : {}", emp.position);
                println!("Hired    : {}", emp.hire_date_str());
                println!(
                    "Averages : delay {} | overtime {} | workday {}\n",
                    colorize_delay(&stats.avg_delay),
                    colorize_overtime(&stats.avg_overtime),
                    stats.avg_workday
                );
                record::print_records(&records, cfg);
            }
        }
    }

    Ok(())
}

fn print_employees(employees: &[Employee], cfg: &Config) {
    if employees.is_empty() {
        info("No employees yet. Add one with `stafftime employee add <NAME> <POSITION>`.");
        return;
    }

    let mut table = Table::new(vec![
        Column::right("ID"),
        Column::left("NAME"),
        Column::left("POSITION"),
        Column::left("HIRED"),
    ])
    .with_separator(cfg.separator());

    for e in employees {
        table.add_row(vec![
            e.id.to_string(),
            e.name.clone(),
            e.position.clone(),
            e.hire_date_str(),
        ]);
    }

    print!("{}", table.render());
}
