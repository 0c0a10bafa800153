use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{init_db, init_db_with_data, setup_test_db, st, temp_out};

#[test]
fn test_export_records_csv() {
    let db_path = setup_test_db("export_records_csv");
    init_db_with_data(&db_path);
    let out = temp_out("export_records", "csv");

    st().args(["--db", &db_path, "export", "--what", "records", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines[0], "employee_id,employee,date,arrival_time,departure_time");
    assert_eq!(lines.len(), 4);
    assert!(content.contains("1,Bianchi Anna,2025-09-02,09:00,17:30"));
    assert!(content.contains("2,Rossi Marco,2025-09-01,09:00,16:45"));
}

#[test]
fn test_export_stats_json_has_company_row() {
    let db_path = setup_test_db("export_stats_json");
    init_db_with_data(&db_path);
    let out = temp_out("export_stats", "json");

    st().args(["--db", &db_path, "export", "--what", "stats", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array");

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["name"], "Bianchi Anna");
    assert_eq!(rows[0]["avg_workday"], "8:30");
    assert_eq!(rows[2]["scope"], "company");
    assert_eq!(rows[2]["avg_workday"], "8:07");
    assert!(rows[2]["employee_id"].is_null());
}

#[test]
fn test_export_existing_file_declined_fails() {
    let db_path = setup_test_db("export_declined");
    init_db_with_data(&db_path);
    let out = temp_out("export_declined", "csv");
    fs::write(&out, "keep me").expect("write placeholder");

    st().args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));

    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");
}

#[test]
fn test_export_existing_file_with_force() {
    let db_path = setup_test_db("export_force");
    init_db_with_data(&db_path);
    let out = temp_out("export_force", "csv");
    fs::write(&out, "old").expect("write placeholder");

    st().args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read");
    assert!(content.starts_with("employee_id,"));
}

#[test]
fn test_export_records_empty_store_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    init_db(&db_path);
    let out = temp_out("export_empty", "csv");

    st().args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("No time records to export"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_backup_copies_database() {
    let db_path = setup_test_db("backup_plain");
    init_db_with_data(&db_path);
    let out = temp_out("backup_plain", "sqlite");

    st().args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    let conn = rusqlite::Connection::open(&out).expect("open backup");
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM time_records", [], |r| r.get(0))
        .expect("count");
    assert_eq!(n, 3);
}

#[test]
fn test_backup_compressed_replaces_plain_copy() {
    let db_path = setup_test_db("backup_zip");
    init_db(&db_path);
    let out = temp_out("backup_zip", "sqlite");
    let zip = temp_out("backup_zip", "zip");

    st().args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    assert!(Path::new(&zip).exists());
    assert!(!Path::new(&out).exists());
}

#[test]
fn test_backup_compress_rejects_zip_destination() {
    let db_path = setup_test_db("backup_zip_dest");
    init_db(&db_path);
    let out = temp_out("backup_zip_dest", "zip");

    st().args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .failure()
        .stderr(contains("--compress"));
}

#[test]
fn test_backup_existing_file_declined() {
    let db_path = setup_test_db("backup_declined");
    init_db(&db_path);
    let out = temp_out("backup_declined", "sqlite");
    fs::write(&out, "old").expect("write placeholder");

    st().args(["--db", &db_path, "backup", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Backup cancelled"));

    assert_eq!(fs::read_to_string(&out).expect("read"), "old");
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info");
    init_db_with_data(&db_path);

    st().args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Employees:"))
        .stdout(contains("Time records:"))
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-02"));

    st().args(["--db", &db_path, "db", "--check", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Vacuum completed"));
}

#[test]
fn test_log_lists_backup_and_export() {
    let db_path = setup_test_db("log_ops");
    init_db_with_data(&db_path);
    let out = temp_out("log_ops", "csv");

    st().args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();

    st().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("3 rows of records as csv"))
        .stdout(contains("migration_applied"));
}

#[test]
fn test_export_empty_store_does_not_prompt_for_existing_file() {
    let db_path = setup_test_db("export_empty_existing");
    init_db(&db_path);
    let out = temp_out("export_empty_existing", "csv");
    fs::write(&out, "keep me").expect("write placeholder");

    // no stdin answer: a prompt would be read as "no" and fail the export
    st().args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("No time records to export"));

    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");
}
