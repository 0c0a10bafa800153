use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::errors::{AppError, AppResult};
use crate::models::WorkSchedule;
use crate::utils::time::parse_time_strict;
use rusqlite::Connection;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine.
pub fn init_db(conn: &Connection, seed: &WorkSchedule) -> AppResult<()> {
    // NO direct CREATE TABLE here.
    // All schema is guaranteed by migrations.

    run_pending_migrations(conn, seed).map_err(|e| AppError::Migration(e.to_string()))?;
    Ok(())
}

/// Schedule used to seed a fresh database, taken from the configuration.
pub fn seed_schedule(cfg: &Config) -> AppResult<WorkSchedule> {
    Ok(WorkSchedule::new(
        parse_time_strict(&cfg.default_start)?,
        parse_time_strict(&cfg.default_end)?,
    ))
}
