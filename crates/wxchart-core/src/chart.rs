//! Chart projection of a day bucket.
//!
//! A chart is a list of hour labels plus labeled numeric series. Temperature
//! is drawn as a line on the left axis and precipitation probability as bars
//! on the right axis; humidity and weather code are optional extras.

use serde::Serialize;

use crate::error::{Result, WxChartError};
use crate::models::{DailyBucket, HourlyUnits, NormalizedForecast};

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Line,
    Bar,
}

/// Which y axis a series is plotted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Left,
    Right,
}

/// One labeled numeric series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub kind: SeriesKind,
    pub axis: Axis,
    pub unit: String,
    pub values: Vec<f64>,
}

/// Labels and series for one day, ready for a chart renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    /// Day label of the projected bucket.
    pub title: String,
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

/// Optional series to include in addition to temperature and precipitation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChartOptions {
    pub include_humidity: bool,
    pub include_weather_code: bool,
}

/// Project a day bucket into chart data.
///
/// # Arguments
///
/// * `bucket` - The day to chart
/// * `units` - Unit strings reported with the forecast, copied onto each series
/// * `options` - Which optional series to append
///
/// # Returns
///
/// Hour labels plus one series per field, each as long as the labels.
pub fn chart_data(bucket: &DailyBucket, units: &HourlyUnits, options: ChartOptions) -> ChartData {
    let mut series = vec![
        ChartSeries {
            name: "Temperature".to_string(),
            kind: SeriesKind::Line,
            axis: Axis::Left,
            unit: units.temperature.clone(),
            values: bucket.hourly_temperature.clone(),
        },
        ChartSeries {
            name: "Precipitation".to_string(),
            kind: SeriesKind::Bar,
            axis: Axis::Right,
            unit: units.precipitation_probability.clone(),
            values: bucket.hourly_precipitation_probability.clone(),
        },
    ];

    if options.include_humidity {
        series.push(ChartSeries {
            name: "Humidity".to_string(),
            kind: SeriesKind::Line,
            axis: Axis::Right,
            unit: units.relative_humidity.clone(),
            values: bucket.hourly_relative_humidity.clone(),
        });
    }

    if options.include_weather_code {
        series.push(ChartSeries {
            name: "Weather code".to_string(),
            kind: SeriesKind::Bar,
            axis: Axis::Right,
            unit: units.weather_code.clone(),
            values: bucket.hourly_weather_code.iter().map(|&c| c as f64).collect(),
        });
    }

    ChartData {
        title: bucket.label.clone(),
        labels: bucket.hourly_time.clone(),
        series,
    }
}

/// Pick the bucket to chart. `None` selects the first day.
///
/// Returns `Ok(None)` for a forecast without buckets, which is a valid empty
/// state.
pub fn select_day(
    forecast: &NormalizedForecast,
    index: Option<usize>,
) -> Result<Option<&DailyBucket>> {
    if forecast.is_empty() {
        return Ok(None);
    }

    let index = index.unwrap_or(0);
    forecast
        .daily_buckets
        .get(index)
        .map(Some)
        .ok_or(WxChartError::InvalidSelection {
            index,
            available: forecast.daily_buckets.len(),
        })
}
