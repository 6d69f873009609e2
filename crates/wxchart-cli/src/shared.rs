use std::fs;
use std::io::{self, Read};

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use wxchart_core::radar::{FrameSet, RadarManifest};
use wxchart_core::{ForecastPayload, parse_payload, parse_radar_manifest};

use crate::error::{CliError, CliResult};

/// Read a whole document from a file, or from stdin for `-`.
pub fn read_input(input: &str, stdin: bool) -> anyhow::Result<String> {
    if stdin || input == "-" {
        debug!("Reading input from stdin");
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        debug!("Reading input from {}", input);
        fs::read_to_string(input).with_context(|| format!("Failed to open file '{input}'"))
    }
}

pub fn load_payload(input: &str, stdin: bool) -> CliResult<ForecastPayload> {
    let json = read_input(input, stdin)?;
    let payload = parse_payload(&json)?;
    debug!(
        hours = payload.hourly.len(),
        timezone = %payload.timezone,
        "Loaded forecast payload"
    );
    Ok(payload)
}

pub fn load_manifest(input: &str, stdin: bool) -> CliResult<RadarManifest> {
    let json = read_input(input, stdin)?;
    Ok(parse_radar_manifest(&json)?)
}

pub fn parse_frame_set(s: &str) -> CliResult<FrameSet> {
    match s.to_lowercase().as_str() {
        "past" => Ok(FrameSet::Past),
        "nowcast" => Ok(FrameSet::Nowcast),
        _ => Err(CliError::input(format!(
            "Invalid frames '{}'. Expected: past, nowcast",
            s
        ))),
    }
}

pub fn parse_rfc3339_to_utc(s: &str) -> CliResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| CliError::input(format!("Failed to parse RFC3339 '{}': {}", s, e)))
}

/// Format Unix seconds as RFC3339 with Z suffix.
pub fn format_epoch_utc(seconds: i64) -> String {
    DateTime::from_timestamp(seconds, 0)
        .map(|dt| dt.format("%Y-%m-%dT%H:%M:%SZ").to_string())
        .unwrap_or_else(|| seconds.to_string())
}

pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
    println!("{}", json);
    Ok(())
}
