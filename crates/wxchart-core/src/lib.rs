//! # wxchart-core
//!
//! Day bucketing and chart projection for hourly weather forecasts.
//!
//! A forecast arrives as parallel hourly sequences (time, temperature,
//! humidity, precipitation probability, weather code) plus a separate
//! "current" snapshot. This library splits the hourly sequences into
//! calendar-day buckets and builds a human-readable current-conditions
//! summary, ready for a chart renderer.
//!
//! ## Features
//!
//! - **Calendar-day buckets**: Boundaries follow the local date of each
//!   timestamp, so DST days and truncated forecasts give shorter buckets.
//! - **Ordered output**: Buckets keep first-seen order.
//! - **Weather codes**: Static WMO code table with total lookup.
//! - **Chart projection**: Labels plus line/bar series for one selected day.
//! - **Collaborator shapes**: Forecast request URLs, radar tile layers and
//!   timezone picker options.
//!
//! ## Example
//!
//! ```rust
//! use wxchart_core::prelude::*;
//!
//! let json = r#"{
//!     "latitude": 52.52,
//!     "longitude": 13.419,
//!     "timezone": "Europe/Berlin",
//!     "hourly": {
//!         "time": ["2022-01-01T23:00", "2022-01-02T00:00"],
//!         "temperature_2m": [10, 5],
//!         "relativehumidity_2m": [45, 44],
//!         "precipitation_probability": [0, 10],
//!         "weathercode": [0, 61]
//!     },
//!     "current_weather": { "time": "2022-01-01T23:00", "temperature": 9.5, "weathercode": 3 }
//! }"#;
//!
//! let payload = parse_payload(json).unwrap();
//! let forecast = normalize_payload(&payload).unwrap();
//!
//! println!("Days: {:?}", forecast.labels());
//! println!("Now: {}", forecast.current_summary.label);
//!
//! if let Some(day) = select_day(&forecast, None).unwrap() {
//!     let chart = chart_data(day, &payload.hourly_units, ChartOptions::default());
//!     println!("{} hours charted", chart.labels.len());
//! }
//! ```

pub mod chart;
pub mod error;
pub mod labels;
pub mod models;
pub mod normalize;
pub mod parse;
pub mod radar;
pub mod request;
pub mod tz;
pub mod weather_code;

// Re-export commonly used types at the crate root
pub use chart::{ChartData, ChartOptions, ChartSeries, chart_data, select_day};
pub use error::{Result, WxChartError};
pub use models::{
    CurrentSnapshot, CurrentSummary, DailyBucket, DaySpan, ForecastPayload, HourlySeries,
    HourlyUnits, NormalizedForecast,
};
pub use normalize::{day_spans, normalize, normalize_payload, summarize_current};
pub use parse::{parse_local_timestamp, parse_payload, parse_radar_manifest};

/// Prelude module for convenient imports.
///
/// ```
/// use wxchart_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::chart::*;
    pub use crate::error::{Result, WxChartError};
    pub use crate::models::*;
    pub use crate::normalize::{day_spans, normalize, normalize_payload, summarize_current};
    pub use crate::parse::{
        parse_hourly_times, parse_local_timestamp, parse_payload, parse_radar_manifest,
    };
    pub use crate::radar::{FrameSet, RadarManifest, TileLayer, TileOptions, tile_layers};
    pub use crate::request::{ForecastRequest, Point};
    pub use crate::tz::{expected_hours, parse_tz};
    pub use crate::weather_code::describe;
}

#[cfg(test)]
mod tests {
    use super::*;

    const BERLIN_PAYLOAD: &str = r#"{
        "latitude": 52.52,
        "longitude": 13.419,
        "elevation": 44.812,
        "generationtime_ms": 2.2119,
        "utc_offset_seconds": 7200,
        "timezone": "Europe/Berlin",
        "timezone_abbreviation": "CEST",
        "hourly": {
            "time": ["2022-01-01T00:00", "2022-01-01T01:00", "2022-01-01T02:00"],
            "temperature_2m": [10, 5, 20],
            "relativehumidity_2m": [45, 44, 42],
            "precipitation_probability": [0, 0, 0],
            "weathercode": [0, 0, 1]
        },
        "hourly_units": {
            "time": "iso8601",
            "temperature_2m": "°C",
            "relativehumidity_2m": "%",
            "precipitation_probability": "%",
            "weathercode": "wmo code"
        },
        "current_weather": {
            "time": "2022-01-01T00:00",
            "temperature": 13.3,
            "weathercode": 3,
            "windspeed": 10.3,
            "winddirection": 262
        }
    }"#;

    #[test]
    fn full_workflow_from_json() {
        let payload = parse_payload(BERLIN_PAYLOAD).unwrap();
        let forecast = normalize_payload(&payload).unwrap();

        assert_eq!(forecast.labels(), vec!["Sat Jan 1"]);
        let day = forecast.bucket("Sat Jan 1").unwrap();
        assert_eq!(day.hourly_temperature, vec![10.0, 5.0, 20.0]);
        assert_eq!(forecast.current_summary.weather_description, "Overcast");

        let chart = chart_data(day, &payload.hourly_units, ChartOptions::default());
        assert_eq!(chart.labels, vec!["12 AM", "1 AM", "2 AM"]);
        assert_eq!(chart.series[0].unit, "°C");
    }

    #[test]
    fn full_workflow_serializes() {
        let payload = parse_payload(BERLIN_PAYLOAD).unwrap();
        let forecast = normalize_payload(&payload).unwrap();
        let value = serde_json::to_value(&forecast).unwrap();

        assert_eq!(value["daily_buckets"][0]["label"], "Sat Jan 1");
        assert_eq!(value["current_summary"]["label"], "Sat Jan 1, 12 AM");
        assert_eq!(value["current_summary"]["weather_description"], "Overcast");
    }

    #[test]
    fn prelude_exports() {
        use crate::prelude::*;

        let _tz = parse_tz("UTC").unwrap();
        let _frames = FrameSet::Nowcast;
        let _options = ChartOptions::default();
        assert_eq!(describe(0), "Clear sky");
    }
}
