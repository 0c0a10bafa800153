use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::{init_db, seed_schedule};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and all pending migrations
///  - the work schedule, seeded from `default_start` / `default_end`
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_str = db_path.to_string_lossy().to_string();

    let cfg = Config {
        database: db_str.clone(),
        ..Config::load()?
    };

    println!("⚙️  Initializing stafftime…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_str);

    let pool = DbPool::new(&db_str)?;
    init_db(&pool.conn, &seed_schedule(&cfg)?)?;

    ttlog_quiet(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_str),
    );

    success(format!("Database initialized at {}", &db_str));
    Ok(())
}
