// src/export/mod.rs

mod csv;
mod json;
mod model;
mod tree;

use crate::core::logic::Consolidation;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use clap::ValueEnum;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
    Tree,
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "tree" => Ok(ExportFormat::Tree),
            other => Err(AppError::Config(format!("unknown output format '{other}'"))),
        }
    }
}

/// Rendering knobs coming from config and CLI.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub pretty: bool,
    pub with_diagnostics: bool,
    pub color: bool,
    pub wrap_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            with_diagnostics: false,
            color: false,
            wrap_width: 80,
        }
    }
}

pub fn render(
    consolidation: &Consolidation,
    format: ExportFormat,
    opts: &RenderOptions,
) -> AppResult<String> {
    match format {
        ExportFormat::Json => json::render_json(consolidation, opts),
        ExportFormat::Csv => csv::render_csv(&consolidation.contexts),
        ExportFormat::Tree => Ok(tree::render_tree(&consolidation.contexts, opts)),
    }
}

/// Write rendered output to `path`, or to stdout when `None`.
pub fn write_output(content: &str, path: Option<&Path>) -> AppResult<()> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            success(format!("Output written to {}", p.display()));
        }
        None => {
            let mut out = io::stdout().lock();
            out.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                out.write_all(b"\n")?;
            }
            out.flush()?;
        }
    }
    Ok(())
}
