use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use std::path::PathBuf;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config, path } = &cli.command {
        if *path {
            let file = cli
                .config
                .as_ref()
                .map(PathBuf::from)
                .unwrap_or_else(Config::config_file);
            println!("{}", file.display());
        }

        if *print_config || !*path {
            print!("{}", cfg.to_yaml()?);
        }
    }
    Ok(())
}
