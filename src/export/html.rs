// src/export/html.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::html::render_table;
use crate::models::row::Table;
use std::fs;
use std::path::Path;

/// Write the rendered table, replacing any existing file.
pub(crate) fn export_html(table: &Table, path: &Path) -> AppResult<()> {
    let markup = render_table(table.all_rows());
    fs::write(path, markup)?;

    notify_export_success("HTML", path);
    Ok(())
}
