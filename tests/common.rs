#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// The binary under test, with HOME pointed at a private temp dir so a
/// developer's own ~/.stafftime config never leaks into the assertions.
pub fn st() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("stafftime_test_home");
    fs::create_dir_all(&home).ok();
    st_in(&home)
}

/// The binary under test with HOME set to `home`.
pub fn st_in(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("stafftime");
    cmd.env("HOME", home);
    cmd
}

/// A fresh, empty HOME for tests that need their own config file.
pub fn temp_home(name: &str) -> PathBuf {
    let mut home: PathBuf = env::temp_dir();
    home.push(format!("{}_stafftime_home", name));
    fs::remove_dir_all(&home).ok();
    fs::create_dir_all(&home).expect("create temp home");
    home
}

/// Write `content` as the config file under `home`; returns its path.
pub fn write_config(home: &Path, content: &str) -> PathBuf {
    let dir = home.join(".stafftime");
    fs::create_dir_all(&dir).expect("create config dir");
    let path = dir.join("stafftime.conf");
    fs::write(&path, content).expect("write config");
    path
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_stafftime.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    st().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn add_employee(db_path: &str, name: &str, position: &str) {
    st().args([
        "--db",
        db_path,
        "employee",
        "add",
        name,
        position,
        "--hired",
        "2024-01-15",
    ])
    .assert()
    .success();
}

pub fn record(db_path: &str, employee_id: &str, date: &str, arrival: &str, departure: &str) {
    st().args([
        "--db",
        db_path,
        "record",
        employee_id,
        date,
        "--in",
        arrival,
        "--out",
        departure,
    ])
    .assert()
    .success();
}

/// Initialize DB with two employees and a few days each:
///  #1 Bianchi: 09:00-17:30 (avg workday 8:30)
///  #2 Rossi:   09:00-16:45 (avg workday 7:45)
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    add_employee(db_path, "Bianchi Anna", "Accountant");
    add_employee(db_path, "Rossi Marco", "Developer");

    record(db_path, "1", "2025-09-01", "09:00", "17:30");
    record(db_path, "1", "2025-09-02", "09:00", "17:30");
    record(db_path, "2", "2025-09-01", "09:00", "16:45");
}

pub fn open_db(db_path: &str) -> rusqlite::Connection {
    rusqlite::Connection::open(db_path).expect("open db")
}
