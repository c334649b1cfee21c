//! Elapsed minutes of one shift row.

use crate::errors::AppResult;
use crate::models::row::{ColumnLayout, Row, cell};
use crate::utils::time::{minutes_between, parse_stamp};
use chrono::{Duration, NaiveDateTime};

/// Start and end timestamps of a row, end already moved past midnight if needed.
pub fn shift_bounds(
    row: &Row,
    row_no: usize,
    layout: &ColumnLayout,
) -> AppResult<(NaiveDateTime, NaiveDateTime)> {
    let date = cell(row, row_no, layout.date)?;
    let start = parse_stamp(date, cell(row, row_no, layout.start)?, &layout.datetime_format)?;
    let mut end = parse_stamp(date, cell(row, row_no, layout.end)?, &layout.datetime_format)?;

    // overnight shift: at most one rollover
    if end < start {
        end += Duration::days(1);
    }

    Ok((start, end))
}

/// Whole minutes between start and end of the row, truncated.
pub fn row_duration(row: &Row, row_no: usize, layout: &ColumnLayout) -> AppResult<i64> {
    let (start, end) = shift_bounds(row, row_no, layout)?;
    let minutes = minutes_between(start, end);
    tracing::trace!(
        row = row_no,
        %start,
        %end,
        minutes,
        "duration computed"
    );
    Ok(minutes)
}
