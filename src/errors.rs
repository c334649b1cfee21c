//! Unified application error type.
//! Every stage of the pipeline (extract, parse, calculate, render, export)
//! returns AppError so a failed run always ends in a single diagnostic.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("No input file name provided.")]
    NoInputFile,

    #[error("The file '{0}' is not an HTML file.")]
    NotHtmlFile(String),

    #[error("Table tag not found.")]
    TableNotFound,

    // ---------------------------
    // Row data
    // ---------------------------
    #[error("Error parsing time data '{value}': {source}")]
    TimeParse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Row {row} has no column {column}")]
    MissingColumn { row: usize, column: usize },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
