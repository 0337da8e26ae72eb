//! Unified application error type.
//! Fatal failures (I/O, input decoding, config, CLI values) are AppError.
//! Per-record problems found while consolidating are not errors: they are
//! collected as `models::diagnostic::Diagnostic` values instead.

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
    // Input / output encoding
    // ---------------------------
    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid timestamp (expected YYYY-MM-DDTHH:MM:SSZ): {0}")]
    InvalidTimestamp(String),

    #[error("Invalid time unit: {0}")]
    InvalidUnit(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Consolidation
    // ---------------------------
    #[error("Consolidation reported {0} diagnostic(s) in strict mode")]
    Strict(usize),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
