use std::process::ExitCode;

use tracing::info;
use wxchart_core::{ChartData, ChartOptions, chart_data, normalize_payload, select_day};

use crate::cli::ChartArgs;
use crate::error::{CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{load_payload, print_json};

/// Unit string the forecast API reports for weather codes.
const WMO_CODE_UNIT: &str = "wmo code";

pub fn run_chart(args: ChartArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let payload = load_payload(&args.input, args.stdin)?;
    let forecast = normalize_payload(&payload)?;

    let options = ChartOptions {
        include_humidity: args.humidity,
        include_weather_code: args.weather_code,
    };

    let Some(bucket) = select_day(&forecast, args.day)? else {
        info!("Forecast has no hourly data, nothing to chart");
        match output_format {
            OutputFormat::Json => println!("null"),
            OutputFormat::Text => println!("No hourly data"),
        }
        return Ok(ExitCode::from(EXIT_SUCCESS));
    };

    let chart = chart_data(bucket, &payload.hourly_units, options);
    info!(day = %chart.title, hours = chart.labels.len(), "Projected chart");

    match output_format {
        OutputFormat::Json => print_json(&chart)?,
        OutputFormat::Text => {
            println!("{}", chart.title);
            for line in chart_rows(&chart) {
                println!("{}", line);
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

/// One text row per hour: `2 PM | Temperature 21°C | Precipitation 40%`.
fn chart_rows(chart: &ChartData) -> Vec<String> {
    chart
        .labels
        .iter()
        .enumerate()
        .map(|(idx, label)| {
            let mut row = format!("{:>5}", label);
            for series in &chart.series {
                if let Some(value) = series.values.get(idx) {
                    let unit = if series.unit == WMO_CODE_UNIT { "" } else { series.unit.as_str() };
                    row.push_str(&format!(" | {} {}{}", series.name, value, unit));
                }
            }
            row
        })
        .collect()
}
