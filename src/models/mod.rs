pub mod employee;
pub mod schedule;
pub mod stats_summary;
pub mod time_record;

pub use employee::Employee;
pub use schedule::WorkSchedule;
pub use stats_summary::StatsSummary;
pub use time_record::TimeRecord;
