//! SQLite connection pool wrapper (lightweight for CLI usage).

use crate::config::Config;
use crate::db::initialize::{init_db, seed_schedule};
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open the database with foreign keys enforced (needed for the
    /// `ON DELETE CASCADE` on `time_records`).
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(Self { conn })
    }

    /// Open the configured database and bring its schema up to date.
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let pool = Self::new(&cfg.database)?;
        init_db(&pool.conn, &seed_schedule(cfg)?)?;
        Ok(pool)
    }

    /// In-memory database with the full schema, seeded with the default schedule.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        init_db(&conn, &Default::default())?;
        Ok(Self { conn })
    }

    /// Helper to execute a closure with a mutable connection reference.
    pub fn with_conn<F, T>(&mut self, func: F) -> AppResult<T>
    where
        F: FnOnce(&mut Connection) -> AppResult<T>,
    {
        func(&mut self.conn)
    }
}
