use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod chart_cmd;
mod cli;
mod describe_cmd;
mod error;
mod forecast_url_cmd;
mod normalize_cmd;
mod radar_cmd;
mod shared;
mod timezones_cmd;

use chart_cmd::run_chart;
use cli::{Cli, Commands};
use describe_cmd::run_describe;
use error::{CliResult, OutputFormat, output_format_hint, parse_output_format, render_error};
use forecast_url_cmd::run_forecast_url;
use normalize_cmd::run_normalize;
use radar_cmd::run_radar;
use timezones_cmd::run_timezones;

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve the output format, run the command and render any error in the
/// requested format.
fn dispatch<F>(output_format: &str, run: F) -> ExitCode
where
    F: FnOnce(OutputFormat) -> CliResult<ExitCode>,
{
    let fallback = output_format_hint(output_format);
    let output_format = match parse_output_format(output_format) {
        Ok(format) => format,
        Err(err) => return render_error(&err, fallback),
    };

    match run(output_format) {
        Ok(code) => code,
        Err(err) => render_error(&err, output_format),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!("Parsed CLI args: {:?}", cli);

    match cli.command {
        Commands::Normalize(args) => {
            let format = args.output_format.clone();
            dispatch(&format, |output| run_normalize(args, output))
        }
        Commands::Chart(args) => {
            let format = args.output_format.clone();
            dispatch(&format, |output| run_chart(args, output))
        }
        Commands::Describe(args) => {
            let format = args.output_format.clone();
            dispatch(&format, |output| run_describe(args, output))
        }
        Commands::Radar(args) => {
            let format = args.output_format.clone();
            dispatch(&format, |output| run_radar(args, output))
        }
        Commands::ForecastUrl(args) => {
            let format = args.output_format.clone();
            dispatch(&format, |output| run_forecast_url(args, output))
        }
        Commands::Timezones(args) => {
            let format = args.output_format.clone();
            dispatch(&format, |output| run_timezones(args, output))
        }
    }
}
