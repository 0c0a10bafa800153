use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::record::RecordLogic;
use crate::db::pool::DbPool;
use crate::db::queries::UpsertOutcome;
use crate::errors::AppResult;
use crate::models::TimeRecord;
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{GREY, RESET};
use crate::utils::date::parse_date_strict;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_avg_minutes, minutes_between, parse_optional_time};

/// Handles both `record` (upsert one day) and `records` (list).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Record {
            employee_id,
            date,
            arrival,
            departure,
        } => {
            let d = parse_date_strict(date)?;
            let arrival = parse_optional_time(arrival.as_ref())?;
            let departure = parse_optional_time(departure.as_ref())?;

            if let (Some(a), Some(dep)) = (arrival, departure)
                && dep < a
            {
                warning(format!(
                    "Departure {} is earlier than arrival {}: the workday length will be negative.",
                    dep.format("%H:%M"),
                    a.format("%H:%M")
                ));
            }
            if arrival.is_none() || departure.is_none() {
                warning("Partial record: it will be skipped by statistics until both times are set.");
            }

            let mut pool = DbPool::open(cfg)?;
            let rec = TimeRecord {
                employee_id: *employee_id,
                date: d,
                arrival,
                departure,
            };

            match RecordLogic::record(&mut pool, *employee_id, d, arrival, departure)? {
                UpsertOutcome::Inserted => success(format!(
                    "Recorded {} for employee #{}: in {} out {}",
                    d,
                    employee_id,
                    rec.arrival_str(),
                    rec.departure_str()
                )),
                UpsertOutcome::Updated => success(format!(
                    "Updated {} for employee #{}: in {} out {}",
                    d,
                    employee_id,
                    rec.arrival_str(),
                    rec.departure_str()
                )),
            }
        }
        Commands::Records { employee_id } => {
            let pool = DbPool::open(cfg)?;
            let records = RecordLogic::list(&pool, *employee_id)?;
            print_records(&records, cfg);
        }
        _ => {}
    }

    Ok(())
}

pub fn print_records(records: &[TimeRecord], cfg: &Config) {
    if records.is_empty() {
        info("No time records.");
        return;
    }

    let mut table = Table::new(vec![
        Column::left("DATE"),
        Column::left("IN"),
        Column::left("OUT"),
        Column::right("WORKDAY"),
    ])
    .with_separator(cfg.separator());

    for r in records {
        let workday = r
            .complete()
            .map(|(a, d)| format_avg_minutes(minutes_between(a, d) as f64))
            .unwrap_or_else(|| "--:--".to_string());

        table.add_row(vec![r.date_str(), r.arrival_str(), r.departure_str(), workday]);
    }

    // partial days are greyed after layout so widths stay correct
    for line in table.render().lines() {
        if line.contains("--:--") {
            println!("{GREY}{line}{RESET}");
        } else {
            println!("{}", line);
        }
    }
}
