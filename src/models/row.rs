use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// One `<tr>` of the timelog: cell texts in document order.
pub type Row = Vec<String>;

/// Borrow cell `column` of data row number `row_no` (1-based, for messages).
pub fn cell(row: &Row, row_no: usize, column: usize) -> AppResult<&str> {
    row.get(column)
        .map(String::as_str)
        .ok_or(AppError::MissingColumn {
            row: row_no,
            column,
        })
}

/// Column positions of the fields the pipeline reads or rewrites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    pub date: usize,
    pub start: usize,
    pub end: usize,
    pub duration: usize,
    /// Text marking a duration that was never filled in.
    pub placeholder: String,
    /// chrono format applied to "<date> <time>".
    pub datetime_format: String,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            date: 0,
            start: 1,
            end: 2,
            duration: 5,
            placeholder: "xx".to_string(),
            datetime_format: "%m/%d/%y %H:%M".to_string(),
        }
    }
}

impl ColumnLayout {
    /// Highest column index a data row must reach.
    pub fn min_width(&self) -> usize {
        self.date.max(self.start).max(self.end).max(self.duration) + 1
    }
}

/// A parsed table: header row kept apart from the data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    pub headers: Row,
    pub rows: Vec<Row>,
}

impl Table {
    /// Split parsed rows; the first one becomes the header.
    pub fn from_rows(mut rows: Vec<Row>) -> Option<Self> {
        if rows.is_empty() {
            return None;
        }
        let headers = rows.remove(0);
        Some(Self { headers, rows })
    }

    /// Header first, then data rows, as rendered.
    pub fn all_rows(&self) -> impl Iterator<Item = &Row> {
        std::iter::once(&self.headers).chain(self.rows.iter())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A duration cell that was rewritten during reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    pub date: String,
    pub old: String,
    pub new: i64,
}
