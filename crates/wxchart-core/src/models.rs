//! Core data types for wxchart.
//!
//! This module defines the primary types used throughout the library:
//! - [`HourlySeries`] - Parallel hourly forecast sequences
//! - [`CurrentSnapshot`] - The "now" observation delivered with a forecast
//! - [`ForecastPayload`] - A complete forecast response
//! - [`DaySpan`] - Inclusive index range of one calendar day
//! - [`DailyBucket`] - Hourly values belonging to one calendar day
//! - [`CurrentSummary`] - Human-readable current conditions
//! - [`NormalizedForecast`] - Ordered day buckets plus the current summary

use std::ops::RangeInclusive;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WxChartError};

/// Hourly forecast fields as parallel, index-aligned sequences.
///
/// Field names follow the forecast API on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlySeries {
    /// Local wall-clock timestamps without offset (e.g. `2022-01-01T00:00`).
    pub time: Vec<String>,
    /// Air temperature at 2 m, in `HourlyUnits::temperature`.
    #[serde(rename = "temperature_2m")]
    pub temperature: Vec<f64>,
    /// Relative humidity at 2 m (%).
    #[serde(rename = "relativehumidity_2m", alias = "relative_humidity_2m")]
    pub relative_humidity: Vec<f64>,
    /// Precipitation probability (%).
    pub precipitation_probability: Vec<f64>,
    /// WMO weather code.
    #[serde(rename = "weathercode", alias = "weather_code")]
    pub weather_code: Vec<i64>,
}

impl HourlySeries {
    /// Number of hourly entries, taken from the `time` sequence.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Check that every sequence has as many entries as `time`.
    pub fn validate(&self) -> Result<()> {
        let expected = self.time.len();
        let lengths = [
            ("temperature", self.temperature.len()),
            ("relative_humidity", self.relative_humidity.len()),
            ("precipitation_probability", self.precipitation_probability.len()),
            ("weather_code", self.weather_code.len()),
        ];

        for (field, actual) in lengths {
            if actual != expected {
                return Err(WxChartError::LengthMismatch {
                    field,
                    expected,
                    actual,
                });
            }
        }

        Ok(())
    }
}

/// A single point-in-time observation, independent of the hourly grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentSnapshot {
    pub time: String,
    pub temperature: f64,
    #[serde(rename = "weathercode", alias = "weather_code")]
    pub weather_code: i64,
    #[serde(
        rename = "windspeed",
        alias = "wind_speed",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub wind_speed: Option<f64>,
    #[serde(
        rename = "winddirection",
        alias = "wind_direction",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub wind_direction: Option<f64>,
}

/// Unit strings reported for each hourly field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyUnits {
    pub time: String,
    #[serde(rename = "temperature_2m")]
    pub temperature: String,
    #[serde(rename = "relativehumidity_2m", alias = "relative_humidity_2m")]
    pub relative_humidity: String,
    pub precipitation_probability: String,
    #[serde(rename = "weathercode", alias = "weather_code")]
    pub weather_code: String,
}

impl Default for HourlyUnits {
    fn default() -> Self {
        Self {
            time: "iso8601".to_string(),
            temperature: "°C".to_string(),
            relative_humidity: "%".to_string(),
            precipitation_probability: "%".to_string(),
            weather_code: "wmo code".to_string(),
        }
    }
}

/// A complete forecast response as delivered by the forecast API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPayload {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub elevation: Option<f64>,
    #[serde(default)]
    pub generationtime_ms: Option<f64>,
    #[serde(default)]
    pub utc_offset_seconds: i32,
    /// IANA timezone the hourly timestamps are expressed in.
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub timezone_abbreviation: String,
    pub hourly: HourlySeries,
    #[serde(default)]
    pub hourly_units: HourlyUnits,
    pub current_weather: CurrentSnapshot,
}

/// Inclusive index range of the hourly entries that fall on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySpan {
    /// Day label (e.g. `Sat Jan 1`).
    pub label: String,
    /// Calendar date of every entry in the span.
    pub date: NaiveDate,
    /// First index (inclusive).
    pub start: usize,
    /// Last index (inclusive).
    pub end: usize,
}

impl DaySpan {
    pub fn len(&self) -> usize {
        (self.end + 1).saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    pub fn range(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// Hourly values belonging to one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyBucket {
    /// Day label (e.g. `Sat Jan 1`).
    pub label: String,
    pub date: NaiveDate,
    /// Hour-only labels (e.g. `2 PM`).
    pub hourly_time: Vec<String>,
    pub hourly_temperature: Vec<f64>,
    pub hourly_relative_humidity: Vec<f64>,
    pub hourly_precipitation_probability: Vec<f64>,
    pub hourly_weather_code: Vec<i64>,
}

impl DailyBucket {
    /// Number of hours observed for this day.
    pub fn len(&self) -> usize {
        self.hourly_time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hourly_time.is_empty()
    }
}

/// Human-readable current conditions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentSummary {
    /// Weekday, month, day and hour (e.g. `Sat Jan 1, 12 AM`).
    pub label: String,
    pub temperature: f64,
    /// Empty when the weather code is unknown.
    pub weather_description: String,
}

/// Day buckets in first-seen order plus the current summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedForecast {
    pub daily_buckets: Vec<DailyBucket>,
    pub current_summary: CurrentSummary,
}

impl NormalizedForecast {
    /// Day labels in bucket order, for the day selector.
    pub fn labels(&self) -> Vec<&str> {
        self.daily_buckets.iter().map(|b| b.label.as_str()).collect()
    }

    /// Look up a bucket by its day label.
    pub fn bucket(&self, label: &str) -> Option<&DailyBucket> {
        self.daily_buckets.iter().find(|b| b.label == label)
    }

    /// `true` when the hourly series was empty. This is a valid state.
    pub fn is_empty(&self) -> bool {
        self.daily_buckets.is_empty()
    }
}
