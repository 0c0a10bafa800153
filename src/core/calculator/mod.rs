//! Statistics engine: pure functions from (schedule, records) to averages.

pub mod company;
pub mod daily;
pub mod employee;

pub use company::{company_stats, company_stats_raw};
pub use daily::{DayMinutes, day_minutes};
pub use employee::{Averages, averages, employee_stats};
