use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;

const OPEN_MARKER: &str = "<table";
const CLOSE_MARKER: &str = "</table>";

/// Read `path` and return the first `<table ...>...</table>` span, markers included.
pub fn extract_table_from_file(path: &Path) -> AppResult<String> {
    let content = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "input file read");
    extract_table(&content).map(str::to_string)
}

/// Locate the first `<table` and the first `</table>` after it.
pub fn extract_table(content: &str) -> AppResult<&str> {
    let start = content.find(OPEN_MARKER).ok_or(AppError::TableNotFound)?;
    let end = content[start..]
        .find(CLOSE_MARKER)
        .map(|offset| start + offset + CLOSE_MARKER.len())
        .ok_or(AppError::TableNotFound)?;

    tracing::debug!(start, end, "table markup located");
    Ok(&content[start..end])
}
