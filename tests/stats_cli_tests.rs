use predicates::str::contains;

mod common;
use common::{add_employee, init_db, init_db_with_data, record, setup_test_db, st};

#[test]
fn test_employee_stats_delay_overtime_workday() {
    let db_path = setup_test_db("stats_single");
    init_db(&db_path);
    add_employee(&db_path, "Bianchi Anna", "Accountant");
    record(&db_path, "1", "2025-09-01", "09:30", "18:15");

    st().args(["--db", &db_path, "stats", "--employee", "1"])
        .assert()
        .success()
        .stdout(contains("Average delay    : "))
        .stdout(contains("0:30"))
        .stdout(contains("0:15"))
        .stdout(contains("Average workday  : 8:45"));
}

#[test]
fn test_stats_skip_partial_records() {
    let db_path = setup_test_db("stats_partial");
    init_db(&db_path);
    add_employee(&db_path, "Bianchi Anna", "Accountant");
    record(&db_path, "1", "2025-09-01", "09:00", "17:00");

    st().args(["--db", &db_path, "record", "1", "2025-09-02", "--in", "11:00"])
        .assert()
        .success();

    st().args(["--db", &db_path, "stats", "--employee", "1"])
        .assert()
        .success()
        .stdout(contains("Average workday  : 8:00"));
}

#[test]
fn test_stats_for_employee_without_records_is_zero() {
    let db_path = setup_test_db("stats_no_records");
    init_db(&db_path);
    add_employee(&db_path, "Bianchi Anna", "Accountant");

    st().args(["--db", &db_path, "stats", "--employee", "1"])
        .assert()
        .success()
        .stdout(contains("Average workday  : 0:00"));
}

#[test]
fn test_stats_unknown_employee_fails() {
    let db_path = setup_test_db("stats_unknown");
    init_db(&db_path);

    st().args(["--db", &db_path, "stats", "--employee", "3"])
        .assert()
        .failure()
        .stderr(contains("Employee not found: 3"));
}

#[test]
fn test_company_average_truncates_fraction() {
    let db_path = setup_test_db("stats_company");
    init_db_with_data(&db_path);

    st().args(["--db", &db_path, "stats"])
        .assert()
        .success()
        .stdout(contains("Bianchi Anna"))
        .stdout(contains("8:30"))
        .stdout(contains("Rossi Marco"))
        .stdout(contains("7:45"))
        .stdout(contains("Average workday  : 8:07"));
}

#[test]
fn test_company_average_on_empty_store() {
    let db_path = setup_test_db("stats_empty");
    init_db(&db_path);

    st().args(["--db", &db_path, "stats"])
        .assert()
        .success()
        .stdout(contains("No employees yet"))
        .stdout(contains("Average delay    : "))
        .stdout(contains("Average workday  : 0:00"));
}

/// Two employees whose averages carry half minutes:
/// #1 → 480.5 (shown 8:00), #2 → 481.5 (shown 8:01).
fn init_half_minute_data(db_path: &str) {
    init_db(db_path);
    add_employee(db_path, "Alberti Sara", "Manager");
    add_employee(db_path, "Conti Paolo", "Clerk");

    record(db_path, "1", "2025-09-01", "09:00", "17:00");
    record(db_path, "1", "2025-09-02", "09:00", "17:01");
    record(db_path, "2", "2025-09-01", "09:00", "17:01");
    record(db_path, "2", "2025-09-02", "09:00", "17:02");
}

#[test]
fn test_company_average_uses_displayed_employee_values() {
    let db_path = setup_test_db("stats_truncated_mode");
    init_half_minute_data(&db_path);

    st().args(["--db", &db_path, "stats"])
        .assert()
        .success()
        .stdout(contains("Average workday  : 8:00"));
}

#[test]
fn test_company_average_raw_mode() {
    let db_path = setup_test_db("stats_raw_mode");
    init_half_minute_data(&db_path);

    st().args(["--db", &db_path, "stats", "--company-average", "raw"])
        .assert()
        .success()
        .stdout(contains("Average workday  : 8:01"));
}

#[test]
fn test_schedule_show_and_update() {
    let db_path = setup_test_db("schedule_update");
    init_db(&db_path);

    st().args(["--db", &db_path, "schedule"])
        .assert()
        .success()
        .stdout(contains("Work schedule: 09:00 - 18:00"));

    st().args(["--db", &db_path, "schedule", "--start", "08:30"])
        .assert()
        .success()
        .stdout(contains("Work schedule updated: 08:30 - 18:00"));

    st().args(["--db", &db_path, "schedule"])
        .assert()
        .success()
        .stdout(contains("Work schedule: 08:30 - 18:00"));
}

#[test]
fn test_schedule_change_applies_to_existing_records() {
    let db_path = setup_test_db("schedule_recompute");
    init_db(&db_path);
    add_employee(&db_path, "Bianchi Anna", "Accountant");
    record(&db_path, "1", "2025-09-01", "09:00", "18:00");

    st().args(["--db", &db_path, "schedule", "--start", "08:30", "--end", "17:30"])
        .assert()
        .success();

    st().args(["--db", &db_path, "stats", "--employee", "1"])
        .assert()
        .success()
        .stdout(contains("0:30"))
        .stdout(contains("Average workday  : 9:00"));
}

#[test]
fn test_schedule_invalid_time_fails() {
    let db_path = setup_test_db("schedule_invalid");
    init_db(&db_path);

    st().args(["--db", &db_path, "schedule", "--end", "25:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format: 25:00"));
}
