use chrono::{NaiveDate, NaiveTime};
use stafftime::config::CompanyAverage;
use stafftime::core::employee::EmployeeLogic;
use stafftime::core::record::RecordLogic;
use stafftime::core::schedule::ScheduleLogic;
use stafftime::core::stats::StatsLogic;
use stafftime::db::pool::DbPool;
use stafftime::db::queries::UpsertOutcome;
use stafftime::errors::AppError;

fn t(s: &str) -> Option<NaiveTime> {
    Some(NaiveTime::parse_from_str(s, "%H:%M").expect("valid time"))
}

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

fn pool() -> DbPool {
    DbPool::in_memory().expect("in-memory db")
}

#[test]
fn test_fresh_db_has_default_schedule() {
    let pool = pool();
    let s = ScheduleLogic::get(&pool).unwrap();
    assert_eq!(s.start_str(), "09:00");
    assert_eq!(s.end_str(), "18:00");

    let rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM work_settings", [], |r| r.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn test_add_employee_rejects_empty_fields() {
    let mut pool = pool();

    let err = EmployeeLogic::add(&mut pool, "   ", "Developer", d("2024-01-01")).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = EmployeeLogic::add(&mut pool, "Anna", "", d("2024-01-01")).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    assert!(EmployeeLogic::list(&pool).unwrap().is_empty());
}

#[test]
fn test_add_employee_trims_and_assigns_ids() {
    let mut pool = pool();
    let a = EmployeeLogic::add(&mut pool, "  Anna ", " Accountant ", d("2024-01-01")).unwrap();
    let b = EmployeeLogic::add(&mut pool, "Boris", "Developer", d("2024-02-01")).unwrap();
    assert_ne!(a, b);

    let emp = EmployeeLogic::get(&pool, a).unwrap();
    assert_eq!(emp.name, "Anna");
    assert_eq!(emp.position, "Accountant");
    assert_eq!(emp.hire_date_str(), "2024-01-01");
}

#[test]
fn test_get_missing_employee_is_not_found() {
    let pool = pool();
    let err = EmployeeLogic::get(&pool, 42).unwrap_err();
    assert!(matches!(err, AppError::EmployeeNotFound(42)));
}

#[test]
fn test_employees_listed_by_name() {
    let mut pool = pool();
    for name in ["Zoe", "Anna", "Marco"] {
        EmployeeLogic::add(&mut pool, name, "Staff", d("2024-01-01")).unwrap();
    }

    let names: Vec<String> = EmployeeLogic::list(&pool)
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, vec!["Anna", "Marco", "Zoe"]);
}

#[test]
fn test_upsert_overwrites_same_day() {
    let mut pool = pool();
    let id = EmployeeLogic::add(&mut pool, "Anna", "Staff", d("2024-01-01")).unwrap();

    let first = RecordLogic::record(&mut pool, id, d("2025-03-10"), t("09:10"), t("18:00")).unwrap();
    let second = RecordLogic::record(&mut pool, id, d("2025-03-10"), t("08:55"), t("18:20")).unwrap();
    assert_eq!(first, UpsertOutcome::Inserted);
    assert_eq!(second, UpsertOutcome::Updated);

    let records = RecordLogic::list(&pool, id).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].arrival_str(), "08:55");
    assert_eq!(records[0].departure_str(), "18:20");
}

#[test]
fn test_upsert_unknown_employee_fails() {
    let mut pool = pool();
    let err = RecordLogic::record(&mut pool, 7, d("2025-03-10"), t("09:00"), t("18:00")).unwrap_err();
    assert!(matches!(err, AppError::EmployeeNotFound(7)));
}

#[test]
fn test_records_listed_by_date_descending() {
    let mut pool = pool();
    let id = EmployeeLogic::add(&mut pool, "Anna", "Staff", d("2024-01-01")).unwrap();

    for day in ["2025-03-05", "2025-03-20", "2025-02-28", "2025-03-10"] {
        RecordLogic::record(&mut pool, id, d(day), t("09:00"), t("18:00")).unwrap();
    }

    let dates: Vec<String> = RecordLogic::list(&pool, id)
        .unwrap()
        .iter()
        .map(|r| r.date_str())
        .collect();
    assert_eq!(dates, vec!["2025-03-20", "2025-03-10", "2025-03-05", "2025-02-28"]);
}

#[test]
fn test_remove_employee_cascades_records() {
    let mut pool = pool();
    let anna = EmployeeLogic::add(&mut pool, "Anna", "Staff", d("2024-01-01")).unwrap();
    let boris = EmployeeLogic::add(&mut pool, "Boris", "Staff", d("2024-01-01")).unwrap();

    RecordLogic::record(&mut pool, anna, d("2025-03-01"), t("09:00"), t("18:00")).unwrap();
    RecordLogic::record(&mut pool, anna, d("2025-03-02"), t("09:00"), t("18:00")).unwrap();
    RecordLogic::record(&mut pool, boris, d("2025-03-01"), t("09:00"), t("18:00")).unwrap();

    assert!(EmployeeLogic::remove(&mut pool, anna).unwrap());

    let orphans: i64 = pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM time_records WHERE employee_id = ?1",
            [anna],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(orphans, 0);
    assert_eq!(RecordLogic::list(&pool, boris).unwrap().len(), 1);
}

#[test]
fn test_remove_missing_employee_is_noop() {
    let mut pool = pool();
    assert!(!EmployeeLogic::remove(&mut pool, 99).unwrap());
    assert!(!EmployeeLogic::remove(&mut pool, 99).unwrap());
}

#[test]
fn test_partial_record_is_stored_as_null() {
    let mut pool = pool();
    let id = EmployeeLogic::add(&mut pool, "Anna", "Staff", d("2024-01-01")).unwrap();
    RecordLogic::record(&mut pool, id, d("2025-03-01"), t("09:00"), None).unwrap();

    let departure: Option<String> = pool
        .conn
        .query_row(
            "SELECT departure_time FROM time_records WHERE employee_id = ?1",
            [id],
            |r| r.get(0),
        )
        .unwrap();
    assert!(departure.is_none());

    let s = StatsLogic::employee(&pool, id).unwrap();
    assert_eq!(s.avg_workday, "0:00");
}

#[test]
fn test_empty_string_times_are_read_as_missing() {
    let mut pool = pool();
    let id = EmployeeLogic::add(&mut pool, "Anna", "Staff", d("2024-01-01")).unwrap();
    pool.conn
        .execute(
            "INSERT INTO time_records (employee_id, date, arrival_time, departure_time)
             VALUES (?1, '2025-03-01', '09:30', '')",
            [id],
        )
        .unwrap();

    let records = RecordLogic::list(&pool, id).unwrap();
    assert_eq!(records[0].departure, None);
    assert_eq!(StatsLogic::employee(&pool, id).unwrap().avg_delay, "0:00");
}

#[test]
fn test_schedule_update_changes_stats() {
    let mut pool = pool();
    let id = EmployeeLogic::add(&mut pool, "Anna", "Staff", d("2024-01-01")).unwrap();
    RecordLogic::record(&mut pool, id, d("2025-03-01"), t("09:30"), t("18:15")).unwrap();

    let s = StatsLogic::employee(&pool, id).unwrap();
    assert_eq!((s.avg_delay.as_str(), s.avg_overtime.as_str()), ("0:30", "0:15"));

    ScheduleLogic::update(&mut pool, t("10:00"), None).unwrap();
    let schedule = ScheduleLogic::get(&pool).unwrap();
    assert_eq!(schedule.start_str(), "10:00");
    assert_eq!(schedule.end_str(), "18:00");

    let s = StatsLogic::employee(&pool, id).unwrap();
    assert_eq!(s.avg_delay, "0:00");
    assert_eq!(s.avg_workday, "8:45");
}

#[test]
fn test_company_report_uses_reparse_average() {
    let mut pool = pool();
    let a = EmployeeLogic::add(&mut pool, "Anna", "Staff", d("2024-01-01")).unwrap();
    let b = EmployeeLogic::add(&mut pool, "Boris", "Staff", d("2024-01-01")).unwrap();
    RecordLogic::record(&mut pool, a, d("2025-03-01"), t("09:00"), t("17:30")).unwrap();
    RecordLogic::record(&mut pool, b, d("2025-03-01"), t("09:00"), t("16:45")).unwrap();

    let report = StatsLogic::report(&pool, CompanyAverage::Truncated).unwrap();
    assert_eq!(report.employees.len(), 2);
    assert_eq!(report.employees[0].stats.avg_workday, "8:30");
    assert_eq!(report.employees[1].stats.avg_workday, "7:45");
    assert_eq!(report.company.avg_workday, "8:07");
}

#[test]
fn test_company_stats_without_employees() {
    let pool = pool();
    let s = StatsLogic::company(&pool, CompanyAverage::Truncated).unwrap();
    assert_eq!(s.avg_delay, "0:00");
    assert_eq!(s.avg_overtime, "0:00");
    assert_eq!(s.avg_workday, "0:00");
}

#[test]
fn test_mutations_are_audited() {
    let mut pool = pool();
    let id = EmployeeLogic::add(&mut pool, "Anna", "Staff", d("2024-01-01")).unwrap();
    RecordLogic::record(&mut pool, id, d("2025-03-01"), t("09:00"), t("18:00")).unwrap();
    RecordLogic::record(&mut pool, id, d("2025-03-01"), t("09:05"), t("18:00")).unwrap();
    EmployeeLogic::remove(&mut pool, id).unwrap();

    let ops: Vec<String> = stafftime::db::queries::load_log(&pool.conn)
        .unwrap()
        .into_iter()
        .filter(|e| e.operation != "migration_applied")
        .map(|e| e.operation)
        .collect();
    assert_eq!(ops, vec!["add", "add", "edit", "del"]);
}
