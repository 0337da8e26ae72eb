//! ctxtree library root.
//! Exposes the consolidation engine, CLI parser and high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

pub use crate::core::{Consolidation, Consolidator, consolidate};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Consolidate { .. } => cli::commands::consolidate::handle(&cli.command, cfg),
        Commands::Groups { .. } => cli::commands::groups::handle(&cli.command),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => Config::load_from(Path::new(path))?,
        None => Config::load()?,
    };

    let level = if cli.verbose { "debug" } else { cfg.log_level.as_str() };
    utils::logging::init(level);

    dispatch(&cli, &cfg)
}
