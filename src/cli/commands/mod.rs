pub mod backup;
pub mod config;
pub mod db;
pub mod del;
pub mod employee;
pub mod export;
pub mod init;
pub mod log;
pub mod record;
pub mod schedule;
pub mod stats;
