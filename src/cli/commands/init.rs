use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::PathBuf;

/// Handle the `init` subcommand
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);

    if cli.test {
        info(format!("Test mode: configuration not written ({})", path.display()));
        return Ok(());
    }

    let (path, written) = Config::init(&path)?;
    if written {
        success(format!("Config file: {}", path.display()));
    } else {
        info(format!("Config file already exists: {}", path.display()));
    }
    Ok(())
}
