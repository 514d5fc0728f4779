use crate::reports;
use clap::Args;
use collatz::config::Config;
use collatz::error::CzResult;
use collatz::input::parse_start;
use collatz::result::compute;
use std::fs;
use std::path::PathBuf;
use strum_macros::{Display, EnumString};
use tracing::info;

#[derive(Debug, Clone, Copy, EnumString, Display, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum OutputFormat {
    Table,
    Json,
    Chart,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Starting value (a positive integer).
    #[arg(value_parser = parse_start, allow_negative_numbers = true)]
    pub start: u64,

    #[command(flatten)]
    pub config: Config,

    #[arg(short, long, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Also print one row per step (table format only).
    #[arg(long, default_value_t = false)]
    pub steps: bool,

    /// Write the JSON document to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: RunArgs) -> CzResult<()> {
    info!("Computing trajectory for {}", args.start);
    let result = compute(args.start, &args.config)?;
    info!(
        "Reached {} after {} steps",
        result.steps[result.steps.len() - 1].value,
        result.steps.len() - 1
    );

    let json = match args.format {
        OutputFormat::Table => {
            reports::print_summary(&result, &args.config.display);
            if args.steps {
                reports::print_steps(&result, &args.config.display);
            }
            if args.output.is_some() {
                Some(serde_json::to_string_pretty(&result)?)
            } else {
                None
            }
        }
        OutputFormat::Json => Some(serde_json::to_string_pretty(&result)?),
        OutputFormat::Chart => Some(serde_json::to_string_pretty(&result.chart_series())?),
    };

    if let Some(doc) = json {
        match &args.output {
            Some(path) => {
                fs::write(path, doc)?;
                info!("Wrote {} output to {}", args.format, path.display());
            }
            None => println!("{}", doc),
        }
    }

    Ok(())
}
