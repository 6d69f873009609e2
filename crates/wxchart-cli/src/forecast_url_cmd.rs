use std::process::ExitCode;

use serde::Serialize;
use tracing::debug;
use wxchart_core::request::{ForecastRequest, Point};

use crate::cli::ForecastUrlArgs;
use crate::error::{CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::print_json;

#[derive(Debug, Serialize)]
struct ForecastUrlOutput {
    point: Point,
    #[serde(skip_serializing_if = "Option::is_none")]
    timezone: Option<String>,
    url: String,
}

pub fn run_forecast_url(args: ForecastUrlArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let request = ForecastRequest::new(Point::new(args.lat, args.lng), args.tz);
    let url = request.url()?;
    debug!(%url, "Built forecast request");

    match output_format {
        OutputFormat::Json => print_json(&ForecastUrlOutput {
            point: request.point,
            timezone: request.timezone,
            url,
        })?,
        OutputFormat::Text => println!("{}", url),
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
