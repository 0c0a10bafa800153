//! Time utilities: parsing HH:MM, minute arithmetic, and the `H:MM`
//! average format used by the statistics.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn parse_time_strict(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    match input {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_time_strict(s).map(Some),
        None => Ok(None),
    }
}

/// Minutes since midnight, ignoring seconds.
pub fn minutes_of_day(t: NaiveTime) -> i64 {
    (t.hour() * 60 + t.minute()) as i64
}

pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    minutes_of_day(end) - minutes_of_day(start)
}

/// Format a (possibly fractional) number of minutes as `H:MM`.
///
/// Hours use floor division and are not padded; the minute part is the
/// floored remainder, padded to two digits. Fractions are truncated, so
/// `487.5` → `8:07` and `-30` → `-1:30`.
pub fn format_avg_minutes(avg: f64) -> String {
    let hours = (avg / 60.0).floor() as i64;
    let minutes = avg.rem_euclid(60.0).floor() as i64;
    format!("{}:{:02}", hours, minutes)
}

/// Parse an `H:MM` string produced by [`format_avg_minutes`] back into total
/// minutes (`hours * 60 + minutes`, with the sign carried by the hour part
/// only, so `-1:30` → `-30`).
pub fn parse_hmm(s: &str) -> AppResult<i64> {
    let (h, m) = s
        .split_once(':')
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))?;

    let hours: i64 = h
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidTime(s.to_string()))?;
    let minutes: i64 = m
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidTime(s.to_string()))?;

    Ok(hours * 60 + minutes)
}
