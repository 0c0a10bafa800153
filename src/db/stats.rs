use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

/// Print file size, row counts and the recorded date range.
pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) ROW COUNTS
    //
    let employees: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))?;
    let records: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM time_records", [], |row| row.get(0))?;

    println!("{}• Employees:{} {}{}{}", CYAN, RESET, GREEN, employees, RESET);
    println!("{}• Time records:{} {}{}{}", CYAN, RESET, GREEN, records, RESET);

    //
    // 3) DATE RANGE
    //
    let range: Option<(Option<String>, Option<String>)> = pool
        .conn
        .query_row(
            "SELECT MIN(date), MAX(date) FROM time_records",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    let (first, last) = range.unwrap_or((None, None));
    let placeholder = format!("{GREY}--{RESET}");

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", first.unwrap_or_else(|| placeholder.clone()));
    println!("    to:   {}", last.unwrap_or(placeholder));

    //
    // 4) AVERAGE RECORDS PER EMPLOYEE
    //
    if employees > 0 {
        let avg = records as f64 / employees as f64;
        println!("{}• Records/employee:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
