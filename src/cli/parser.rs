use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for ctxtree
/// Consolidates raw context records into a nested tree with aggregated time
#[derive(Parser)]
#[command(
    name = "ctxtree",
    version = env!("CARGO_PKG_VERSION"),
    about = "Consolidate raw time-tracking contexts into a deterministic nested tree",
    long_about = None
)]
pub struct Cli {
    /// Use a custom configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    /// Run in test mode (no config file is written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration directory and a default configuration file
    Init,

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration as YAML")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,
    },

    /// Consolidate raw context records into a nested tree
    Consolidate {
        /// JSON array of raw context records ("-" reads stdin)
        #[arg(long, short = 'i', value_name = "FILE")]
        input: String,

        #[arg(long, short = 'f', value_enum, help = "Output format (default from config)")]
        format: Option<ExportFormat>,

        #[arg(long, short = 'o', value_name = "FILE", help = "Write output to FILE instead of stdout")]
        output: Option<String>,

        #[arg(long = "user", value_name = "ID", help = "Keep only records of this user")]
        user: Option<String>,

        #[arg(
            long,
            value_name = "TIMESTAMP",
            help = "Keep only records created at or after YYYY-MM-DDTHH:MM:SSZ"
        )]
        since: Option<String>,

        #[arg(
            long,
            value_name = "TIMESTAMP",
            help = "Keep only records created at or before YYYY-MM-DDTHH:MM:SSZ"
        )]
        until: Option<String>,

        #[arg(
            long,
            value_name = "TIMESTAMP",
            help = "Evaluation instant for open spans (default: now)"
        )]
        now: Option<String>,

        #[arg(
            long,
            value_name = "UNIT",
            help = "Unit for elapsed time: second, minute or hour (default from config)"
        )]
        unit: Option<String>,

        #[arg(long, help = "Fail if any record produced a diagnostic")]
        strict: bool,

        #[arg(long, help = "Include diagnostics in JSON output")]
        diagnostics: bool,

        #[arg(long, help = "Compact JSON instead of pretty-printed")]
        compact: bool,
    },

    /// Show how raw records are grouped into logical tasks
    Groups {
        /// JSON array of raw context records ("-" reads stdin)
        #[arg(long, short = 'i', value_name = "FILE")]
        input: String,

        #[arg(long = "user", value_name = "ID", help = "Keep only records of this user")]
        user: Option<String>,

        #[arg(
            long,
            value_name = "TIMESTAMP",
            help = "Keep only records created at or after YYYY-MM-DDTHH:MM:SSZ"
        )]
        since: Option<String>,

        #[arg(
            long,
            value_name = "TIMESTAMP",
            help = "Keep only records created at or before YYYY-MM-DDTHH:MM:SSZ"
        )]
        until: Option<String>,
    },
}
