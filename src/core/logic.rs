use crate::core::{reconcile, sorter};
use crate::errors::{AppError, AppResult};
use crate::html;
use crate::models::row::{ColumnLayout, Correction, Table};

/// Result of running the pipeline over one table.
#[derive(Debug, Clone)]
pub struct Processed {
    pub table: Table,
    pub corrections: Vec<Correction>,
}

pub struct Core;

impl Core {
    /// Split scanned markup into header and data rows.
    pub fn parse_table(markup: &str) -> AppResult<Table> {
        Table::from_rows(html::parse_rows(markup)).ok_or(AppError::TableNotFound)
    }

    /// Reconcile durations, then sort newest first. The header stays untouched.
    pub fn process_table(table: Table, layout: &ColumnLayout) -> AppResult<Processed> {
        let Table { headers, mut rows } = table;

        let corrections = reconcile::reconcile_rows(&mut rows, layout)?;
        let rows = sorter::sort_rows(rows, layout)?;

        Ok(Processed {
            table: Table { headers, rows },
            corrections,
        })
    }

    /// Whole transform on an in-memory document: extract, parse, process.
    pub fn process_document(content: &str, layout: &ColumnLayout) -> AppResult<Processed> {
        let markup = html::extract_table(content)?;
        let table = Self::parse_table(markup)?;
        Self::process_table(table, layout)
    }
}
