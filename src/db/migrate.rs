use crate::models::WorkSchedule;
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result, params};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the three domain tables. Column names and text formats match the
/// historical layout so existing databases open unchanged.
fn create_domain_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS work_settings (
            id         INTEGER PRIMARY KEY,
            start_time TEXT,
            end_time   TEXT
        );

        CREATE TABLE IF NOT EXISTS employees (
            id        INTEGER PRIMARY KEY,
            name      TEXT NOT NULL,
            position  TEXT NOT NULL,
            hire_date TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS time_records (
            id             INTEGER PRIMARY KEY,
            employee_id    INTEGER,
            date           TEXT,
            arrival_time   TEXT,
            departure_time TEXT,
            FOREIGN KEY (employee_id) REFERENCES employees (id) ON DELETE CASCADE
        );
        "#,
    )?;
    Ok(())
}

/// Seed the singleton schedule row (id = 1) when the table is empty.
fn seed_work_settings(conn: &Connection, seed: &WorkSchedule) -> Result<()> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM work_settings", [], |row| row.get(0))?;

    if count == 0 {
        conn.execute(
            "INSERT INTO work_settings (id, start_time, end_time) VALUES (1, ?1, ?2)",
            params![seed.start_str(), seed.end_str()],
        )?;
        success(format!(
            "Work schedule initialized: {} - {}",
            seed.start_str(),
            seed.end_str()
        ));
    }

    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        params![version, message],
    )?;
    Ok(())
}

/// Lookup index for the (employee, date) upsert and per-employee listings.
///
/// Not UNIQUE: databases written by older versions may already hold
/// duplicate days, and those must still open.
fn migrate_add_time_records_index(conn: &Connection) -> Result<()> {
    let version = "20250301_0001_time_records_employee_date_idx";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_time_records_employee_date
         ON time_records(employee_id, date);",
    )?;

    mark_applied(conn, version, "Added (employee_id, date) index to time_records")?;
    success(format!("Migration applied: {}", version));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by `db::initialize::init_db()`; safe to call on every open.
pub fn run_pending_migrations(conn: &Connection, seed: &WorkSchedule) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Domain tables
    let fresh = !table_exists(conn, "employees")?;
    create_domain_tables(conn)?;
    if fresh {
        success("Created employees, time_records and work_settings tables.");
    }

    // 3) Singleton schedule
    seed_work_settings(conn, seed)?;

    // 4) Incremental migrations
    migrate_add_time_records_index(conn)?;

    Ok(())
}
