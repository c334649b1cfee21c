//! timelog-reorder library root.
//! Exposes the CLI parser, the run()/run_with() entry points, and the pipeline modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod html;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::Cli;
use config::Config;
use errors::AppResult;
use std::env;
use tracing_subscriber::EnvFilter;

pub use cli::commands::reorder::Report;

/// Debug output goes to stderr so it never mixes with the correction lines.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into())
    } else if env::var_os("RUST_LOG").is_some() {
        EnvFilter::from_default_env()
    } else {
        return;
    };

    // a subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the tool for already-parsed arguments, without touching process state.
pub fn run_with(cli: &Cli) -> AppResult<Report> {
    let config_path = cli.config.as_deref().map(utils::path::expand_tilde);
    let cfg = Config::load(config_path.as_deref())?;
    cli::commands::reorder::handle(cli, &cfg)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<Report> {
    let cli = Cli::parse();
    init_tracing(cli.debug);
    run_with(&cli)
}
