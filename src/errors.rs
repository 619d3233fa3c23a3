//! Unified application error type.
//! Every I/O edge (import, export, config, cli) returns AppError so the
//! binary can report failures the same way. The marking engine itself never
//! fails: it reports recoverable outcomes instead (see `models::outcome`).

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
    // Import errors
    // ---------------------------
    #[error("Input file not found: {0}")]
    MissingFile(String),

    #[error("Unsupported input file type: {0}")]
    UnsupportedInput(String),

    #[error("Spreadsheet read error: {0}")]
    Spreadsheet(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("The input file has no header row")]
    EmptyInput,

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Unknown preset: {0}")]
    InvalidPreset(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Invalid export file name: {0}")]
    InvalidExportName(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
