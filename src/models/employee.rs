use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub id: i64,              // ⇔ employees.id (assigned on insert)
    pub name: String,         // ⇔ employees.name
    pub position: String,     // ⇔ employees.position (job title)
    pub hire_date: NaiveDate, // ⇔ employees.hire_date (TEXT "YYYY-MM-DD")
}

impl Employee {
    pub fn hire_date_str(&self) -> String {
        self.hire_date.format("%Y-%m-%d").to_string()
    }
}
