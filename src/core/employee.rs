use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_employee, insert_employee, load_employee, load_employees};
use crate::errors::{AppError, AppResult};
use crate::models::Employee;
use chrono::NaiveDate;

/// High-level business logic for employee records.
pub struct EmployeeLogic;

impl EmployeeLogic {
    /// Validate and insert a new employee; returns the assigned id.
    ///
    /// Name and position are trimmed and must not be empty.
    pub fn add(pool: &mut DbPool, name: &str, position: &str, hire_date: NaiveDate) -> AppResult<i64> {
        let name = name.trim();
        let position = position.trim();

        if name.is_empty() || position.is_empty() {
            return Err(AppError::Validation(
                "name and position cannot be empty".into(),
            ));
        }

        let id = insert_employee(&pool.conn, name, position, &hire_date)?;

        ttlog_quiet(
            &pool.conn,
            "add",
            &format!("employee #{}", id),
            &format!("{} ({}), hired {}", name, position, hire_date),
        );

        Ok(id)
    }

    /// Remove an employee together with every time record.
    ///
    /// Unknown ids are a no-op; returns `false` in that case.
    pub fn remove(pool: &mut DbPool, id: i64) -> AppResult<bool> {
        let existing = load_employee(&pool.conn, id)?;
        let removed = pool.with_conn(|conn| delete_employee(conn, id))?;

        if let Some(emp) = existing.filter(|_| removed) {
            ttlog_quiet(
                &pool.conn,
                "del",
                &format!("employee #{}", id),
                &format!("Removed {} and all time records", emp.name),
            );
        }

        Ok(removed)
    }

    pub fn list(pool: &DbPool) -> AppResult<Vec<Employee>> {
        load_employees(&pool.conn)
    }

    pub fn get(pool: &DbPool, id: i64) -> AppResult<Employee> {
        load_employee(&pool.conn, id)?.ok_or(AppError::EmployeeNotFound(id))
    }
}
