// src/export/mod.rs

mod html;
mod json_csv;

use crate::errors::AppResult;
use crate::models::row::Table;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Common helper for export completion messages.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Html,
    Csv,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// Write `table` to `path` in the requested format.
pub fn write_table(table: &Table, path: &Path, format: OutputFormat) -> AppResult<()> {
    tracing::debug!(format = format.as_str(), path = %path.display(), "writing output");
    match format {
        OutputFormat::Html => html::export_html(table, path),
        OutputFormat::Csv => json_csv::export_csv(table, path),
        OutputFormat::Json => json_csv::export_json(table, path),
    }
}
