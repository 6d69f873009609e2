use std::process::ExitCode;

use tracing::{debug, info};
use wxchart_core::tz::{expected_hours, parse_tz};
use wxchart_core::{CurrentSummary, DailyBucket, normalize_payload};

use crate::cli::NormalizeArgs;
use crate::error::{CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{load_payload, print_json};

pub fn run_normalize(args: NormalizeArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let payload = load_payload(&args.input, args.stdin)?;
    let forecast = normalize_payload(&payload)?;
    info!(days = forecast.daily_buckets.len(), "Normalized forecast");

    match output_format {
        OutputFormat::Json => print_json(&forecast)?,
        OutputFormat::Text => {
            // Coverage is only reported when the payload names a known zone.
            let tz = parse_tz(&payload.timezone).ok();
            if tz.is_none() {
                debug!(timezone = %payload.timezone, "Unknown timezone, skipping coverage");
            }

            if forecast.is_empty() {
                println!("No hourly data");
            }
            for bucket in &forecast.daily_buckets {
                let expected = tz.and_then(|tz| expected_hours(bucket.date, tz));
                println!("{}", bucket_line(bucket, expected));
            }
            println!(
                "{}",
                summary_line(&forecast.current_summary, &payload.hourly_units.temperature)
            );
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

fn bucket_line(bucket: &DailyBucket, expected: Option<i64>) -> String {
    let first = bucket.hourly_time.first().map(String::as_str).unwrap_or("");
    let last = bucket.hourly_time.last().map(String::as_str).unwrap_or("");

    match expected {
        Some(expected) => format!(
            "{}: {} to {} ({}/{} hours)",
            bucket.label,
            first,
            last,
            bucket.len(),
            expected
        ),
        None => format!(
            "{}: {} to {} ({} hours)",
            bucket.label,
            first,
            last,
            bucket.len()
        ),
    }
}

fn summary_line(summary: &CurrentSummary, temperature_unit: &str) -> String {
    if summary.weather_description.is_empty() {
        format!(
            "Now: {} | {}{}",
            summary.label, summary.temperature, temperature_unit
        )
    } else {
        format!(
            "Now: {} | {}{} | {}",
            summary.label, summary.temperature, temperature_unit, summary.weather_description
        )
    }
}
