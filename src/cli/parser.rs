use crate::export::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Command-line interface definition for timelog-reorder
/// Recompute shift durations in an HTML timelog and sort it newest first
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "timelog-reorder",
    version = env!("CARGO_PKG_VERSION"),
    about = "Recompute the duration column of an HTML timelog table and sort it newest first",
    long_about = None
)]
pub struct Cli {
    /// HTML file containing the timelog table (.html or .htm)
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,

    /// Output file (default: new_timelog.html, or `output_file` from the config)
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "html")]
    pub format: OutputFormat,

    /// Report corrections without writing any file
    #[arg(long = "check")]
    pub check: bool,

    /// Use a specific configuration file
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Print debug logging on stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
