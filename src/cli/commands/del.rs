use crate::config::Config;
use crate::core::employee::EmployeeLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success, warning};

/// Remove an employee after confirmation. Unknown ids only produce a warning.
pub fn handle(id: i64, yes: bool, cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::open(cfg)?;

    let prompt = match crate::db::queries::load_employee(&pool.conn, id)? {
        Some(emp) => format!(
            "Delete employee #{} '{}' and ALL their time records? This action is irreversible.",
            id, emp.name
        ),
        None => {
            warning(format!("Employee #{} does not exist; nothing to delete.", id));
            return Ok(());
        }
    };

    if !yes && !confirm(&prompt) {
        info("Operation cancelled.");
        return Ok(());
    }

    if EmployeeLogic::remove(&mut pool, id)? {
        success(format!("Employee #{} has been deleted.", id));
    } else {
        warning(format!("Employee #{} does not exist; nothing to delete.", id));
    }

    Ok(())
}
