//! Time utilities: combining date and clock cells into timestamps.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDateTime};

/// Parse "<date> <time>" with the given chrono format (e.g. `%m/%d/%y %H:%M`).
///
/// Two-digit years pivot at 69 (69-99 -> 19xx, 00-68 -> 20xx), as POSIX
/// `strptime` does. chrono alone pivots at 70.
pub fn parse_stamp(date: &str, time: &str, format: &str) -> AppResult<NaiveDateTime> {
    let value = format!("{} {}", date, time);
    let stamp = NaiveDateTime::parse_from_str(&value, format)
        .map_err(|source| AppError::TimeParse { value, source })?;

    if format.contains("%y") && stamp.year() == 2069 {
        // both are common years, so every month/day carries over
        if let Some(fixed) = stamp.with_year(1969) {
            return Ok(fixed);
        }
    }
    Ok(stamp)
}

pub fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let duration = end - start;
    duration.num_minutes()
}
