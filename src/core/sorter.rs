use crate::errors::AppResult;
use crate::models::row::{ColumnLayout, Row, cell};
use crate::utils::time::parse_stamp;
use chrono::NaiveDateTime;

/// Date + start time of the row, the ordering key.
pub fn sort_key(row: &Row, row_no: usize, layout: &ColumnLayout) -> AppResult<NaiveDateTime> {
    parse_stamp(
        cell(row, row_no, layout.date)?,
        cell(row, row_no, layout.start)?,
        &layout.datetime_format,
    )
}

/// Latest entry first. Equal keys keep their input order.
pub fn sort_rows(rows: Vec<Row>, layout: &ColumnLayout) -> AppResult<Vec<Row>> {
    let mut keyed = rows
        .into_iter()
        .enumerate()
        .map(|(idx, row)| sort_key(&row, idx + 1, layout).map(|key| (key, row)))
        .collect::<AppResult<Vec<_>>>()?;

    // sort_by is stable
    keyed.sort_by(|a, b| b.0.cmp(&a.0));

    Ok(keyed.into_iter().map(|(_, row)| row).collect())
}
