use std::process::ExitCode;

use chrono::Utc;
use tracing::debug;
use wxchart_core::tz::timezone_options;

use crate::cli::TimezonesArgs;
use crate::error::{CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{parse_rfc3339_to_utc, print_json};

pub fn run_timezones(args: TimezonesArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let at = match args.at.as_deref() {
        Some(s) => parse_rfc3339_to_utc(s)?,
        None => Utc::now(),
    };
    debug!(%at, "Listing timezones");

    let filter = args.filter.as_deref().map(str::to_lowercase);
    let options: Vec<_> = timezone_options(at)
        .into_iter()
        .filter(|option| {
            filter
                .as_deref()
                .is_none_or(|f| option.value.to_lowercase().contains(f))
        })
        .collect();

    match output_format {
        OutputFormat::Json => print_json(&options)?,
        OutputFormat::Text => {
            for option in &options {
                println!("{}", option.label);
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
