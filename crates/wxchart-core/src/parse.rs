//! Input parsing for forecast data.
//!
//! Hourly timestamps arrive as local wall-clock strings without an offset
//! (e.g. `2022-01-01T00:00`); they are interpreted in the forecast's own
//! timezone and never converted. This module also decodes the JSON payloads
//! handed over by the forecast and radar collaborators.

use chrono::NaiveDateTime;

use crate::error::{Result, WxChartError};
use crate::models::ForecastPayload;
use crate::radar::RadarManifest;

const LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse a local timestamp without offset.
///
/// # Examples
///
/// ```
/// use wxchart_core::parse::parse_local_timestamp;
/// use chrono::Timelike;
///
/// let dt = parse_local_timestamp("2022-01-01T14:00").unwrap();
/// assert_eq!(dt.hour(), 14);
/// ```
pub fn parse_local_timestamp(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();

    LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| {
            WxChartError::ParseError(format!(
                "Invalid local timestamp: '{}'. Expected YYYY-MM-DDTHH:MM",
                input
            ))
        })
}

/// Parse every hourly timestamp, failing on the first bad entry.
pub fn parse_hourly_times(times: &[String]) -> Result<Vec<NaiveDateTime>> {
    times
        .iter()
        .enumerate()
        .map(|(idx, ts)| {
            parse_local_timestamp(ts).map_err(|e| match e {
                WxChartError::ParseError(msg) => {
                    WxChartError::ParseError(format!("hourly.time[{}]: {}", idx, msg))
                }
                other => other,
            })
        })
        .collect()
}

/// Decode a forecast payload from JSON.
pub fn parse_payload(json: &str) -> Result<ForecastPayload> {
    serde_json::from_str(json)
        .map_err(|e| WxChartError::ParseError(format!("Invalid forecast payload: {}", e)))
}

/// Decode a radar-tile manifest from JSON.
pub fn parse_radar_manifest(json: &str) -> Result<RadarManifest> {
    serde_json::from_str(json)
        .map_err(|e| WxChartError::ParseError(format!("Invalid radar manifest: {}", e)))
}
