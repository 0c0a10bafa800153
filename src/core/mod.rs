pub mod backup;
pub mod calculator;
pub mod config;
pub mod employee;
pub mod log;
pub mod record;
pub mod schedule;
pub mod stats;
