use serde::Serialize;

/// The three averages, already formatted as `H:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsSummary {
    pub avg_delay: String,
    pub avg_overtime: String,
    pub avg_workday: String,
}

impl StatsSummary {
    pub fn zero() -> Self {
        Self {
            avg_delay: "0:00".to_string(),
            avg_overtime: "0:00".to_string(),
            avg_workday: "0:00".to_string(),
        }
    }
}
