use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::Core;
use crate::errors::{AppError, AppResult};
use crate::export::{self, OutputFormat};
use crate::html;
use crate::models::row::Correction;
use crate::ui::messages::{correction, success, warning};
use crate::utils::is_html_file;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// What a run did.
#[derive(Debug, Clone)]
pub struct Report {
    /// Data rows processed (header excluded).
    pub rows: usize,
    pub corrections: Vec<Correction>,
    /// `None` in check mode.
    pub output: Option<PathBuf>,
}

fn output_path(cli: &Cli, cfg: &Config) -> PathBuf {
    if let Some(path) = &cli.output {
        return path.clone();
    }
    let default = PathBuf::from(&cfg.output_file);
    match cli.format {
        OutputFormat::Html => default,
        other => default.with_extension(other.as_str()),
    }
}

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<Report> {
    let input = cli.input.as_deref().ok_or(AppError::NoInputFile)?;
    if !is_html_file(input) {
        return Err(AppError::NotHtmlFile(input.to_string()));
    }

    let layout = cfg.layout();
    let markup = html::extract_table_from_file(&expand_tilde(input))?;
    let table = Core::parse_table(&markup)?;
    let processed = Core::process_table(table, &layout)?;

    for c in &processed.corrections {
        correction(c);
    }

    let rows = processed.table.len();
    let fixed = processed.corrections.len();

    if cli.check {
        warning(format!(
            "Check mode: {rows} rows, {fixed} duration(s) would be corrected, no file written"
        ));
        return Ok(Report {
            rows,
            corrections: processed.corrections,
            output: None,
        });
    }

    let path = output_path(cli, cfg);
    export::write_table(&processed.table, &path, cli.format)?;
    success(format!("{rows} rows written, {fixed} duration(s) corrected"));

    Ok(Report {
        rows,
        corrections: processed.corrections,
        output: Some(path),
    })
}
