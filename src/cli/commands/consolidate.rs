use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::RecordFilter;
use crate::core::logic::Consolidator;
use crate::errors::{AppError, AppResult};
use crate::export::{self, ExportFormat, RenderOptions};
use crate::models::raw_context::RawContext;
use crate::models::time_spent::TimeUnit;
use crate::ui::messages::warning;
use crate::utils::time::parse_timestamp_arg;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal, Read};
use std::path::Path;

/// Read a JSON array of raw records from a file, or stdin for "-".
pub fn read_records(input: &str) -> AppResult<Vec<RawContext>> {
    let mut content = String::new();
    if input == "-" {
        io::stdin().read_to_string(&mut content)?;
    } else {
        let file = File::open(input).map_err(|e| {
            AppError::from(io::Error::new(e.kind(), format!("cannot open '{input}': {e}")))
        })?;
        BufReader::new(file).read_to_string(&mut content)?;
    }
    Ok(serde_json::from_str(&content)?)
}

/// Handle the `consolidate` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Consolidate {
        input,
        format,
        output,
        user,
        since,
        until,
        now,
        unit,
        strict,
        diagnostics,
        compact,
    } = cmd
    {
        let filter = RecordFilter::from_args(user, since, until)?;
        let records = filter.apply(read_records(input)?);

        let unit = match unit {
            Some(u) => u.parse::<TimeUnit>()?,
            None => cfg.time_unit,
        };
        let mut consolidator = Consolidator::new().unit(unit).precision(cfg.precision);
        if let Some(now) = now {
            consolidator = consolidator.at(parse_timestamp_arg(now)?);
        }

        let mut consolidation = consolidator.consolidate(&records);

        for diag in &consolidation.diagnostics {
            warning(diag);
        }
        if *strict || cfg.strict {
            consolidation = consolidation.into_strict()?;
        }

        let format = match format {
            Some(f) => *f,
            None => cfg.output_format.parse::<ExportFormat>()?,
        };
        let opts = RenderOptions {
            pretty: cfg.pretty && !*compact,
            with_diagnostics: *diagnostics,
            color: output.is_none() && io::stdout().is_terminal(),
            wrap_width: cfg.wrap_width,
        };

        let rendered = export::render(&consolidation, format, &opts)?;
        export::write_output(&rendered, output.as_deref().map(Path::new))?;
    }
    Ok(())
}
