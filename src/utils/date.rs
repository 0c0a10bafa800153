use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn parse_date_strict(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// `None` → today, otherwise a strict `YYYY-MM-DD` parse.
pub fn parse_date_or_today(s: Option<&String>) -> AppResult<NaiveDate> {
    match s {
        Some(v) => parse_date_strict(v),
        None => Ok(today()),
    }
}
