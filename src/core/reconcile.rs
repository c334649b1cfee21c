use crate::core::calculator::row_duration;
use crate::errors::{AppError, AppResult};
use crate::models::row::{ColumnLayout, Correction, Row, cell};

/// Does the stored duration cell need rewriting?
/// The placeholder always does; so does anything that is not the computed integer.
fn needs_update(stored: &str, computed: i64, layout: &ColumnLayout) -> bool {
    stored == layout.placeholder || stored.parse::<i64>().ok() != Some(computed)
}

/// Recompute every row's duration and overwrite stale cells in place.
///
/// Fails on the first row whose date or times do not parse; corrections for
/// earlier rows are discarded along with the rest of the run.
pub fn reconcile_rows(rows: &mut [Row], layout: &ColumnLayout) -> AppResult<Vec<Correction>> {
    let mut corrections = Vec::new();

    for (idx, row) in rows.iter_mut().enumerate() {
        let row_no = idx + 1;
        if row.len() < layout.min_width() {
            return Err(AppError::MissingColumn {
                row: row_no,
                column: layout.min_width() - 1,
            });
        }
        let computed = row_duration(row, row_no, layout)?;
        let stored = cell(row, row_no, layout.duration)?;

        if needs_update(stored, computed, layout) {
            let correction = Correction {
                date: cell(row, row_no, layout.date)?.to_string(),
                old: stored.to_string(),
                new: computed,
            };
            tracing::debug!(row = row_no, old = %correction.old, new = computed, "duration corrected");
            row[layout.duration] = computed.to_string();
            corrections.push(correction);
        }
    }

    Ok(corrections)
}
