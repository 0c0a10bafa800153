use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::schedule::ScheduleLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::time::parse_optional_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Schedule { start, end } = cmd {
        let start = parse_optional_time(start.as_ref())?;
        let end = parse_optional_time(end.as_ref())?;

        let mut pool = DbPool::open(cfg)?;

        if start.is_none() && end.is_none() {
            let s = ScheduleLogic::get(&pool)?;
            info(format!("Work schedule: {} - {}", s.start_str(), s.end_str()));
            return Ok(());
        }

        let s = ScheduleLogic::update(&mut pool, start, end)?;
        if s.end <= s.start {
            warning("Workday end is not after its start.");
        }
        success(format!("Work schedule updated: {} - {}", s.start_str(), s.end_str()));
    }

    Ok(())
}
