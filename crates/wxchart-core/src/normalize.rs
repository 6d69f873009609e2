//! Day bucketing of hourly forecasts.
//!
//! Hourly entries are grouped into calendar days by their local date. Since
//! the input is time ordered, a day is a contiguous run of indices, so the
//! grouping is a run-length pass producing one [`DaySpan`] per day. The span
//! list is computed once and every hourly sequence is sliced with the same
//! immutable spans, so the sequences of a bucket cannot drift apart.
//!
//! Bucket length follows the data: a DST day or a truncated forecast yields
//! fewer (or more) than 24 entries.

use chrono::NaiveDateTime;

use crate::error::Result;
use crate::labels::{current_label, day_label, hour_label};
use crate::models::{
    CurrentSnapshot, CurrentSummary, DailyBucket, DaySpan, ForecastPayload, HourlySeries,
    NormalizedForecast,
};
use crate::parse::{parse_hourly_times, parse_local_timestamp};
use crate::weather_code::describe;

/// Group timestamps into runs sharing a calendar date.
///
/// A date that reappears after a different date starts a new span; spans are
/// never merged across gaps.
///
/// # Examples
///
/// ```
/// use wxchart_core::normalize::day_spans;
/// use wxchart_core::parse::parse_local_timestamp;
///
/// let times: Vec<_> = ["2022-01-01T23:00", "2022-01-02T00:00", "2022-01-02T01:00"]
///     .iter()
///     .map(|s| parse_local_timestamp(s).unwrap())
///     .collect();
///
/// let spans = day_spans(&times);
/// assert_eq!(spans.len(), 2);
/// assert_eq!((spans[0].start, spans[0].end), (0, 0));
/// assert_eq!((spans[1].start, spans[1].end), (1, 2));
/// ```
pub fn day_spans(times: &[NaiveDateTime]) -> Vec<DaySpan> {
    let mut spans: Vec<DaySpan> = Vec::new();

    for (idx, dt) in times.iter().enumerate() {
        let date = dt.date();
        match spans.last_mut() {
            Some(span) if span.date == date => span.end = idx,
            _ => spans.push(DaySpan {
                label: day_label(*dt),
                date,
                start: idx,
                end: idx,
            }),
        }
    }

    spans
}

/// Split an hourly series into day buckets and summarize the current snapshot.
///
/// Fails on mismatched sequence lengths or unparsable timestamps. An empty
/// series yields an empty bucket list.
///
/// # Arguments
///
/// * `series` - Parallel hourly sequences in local wall-clock time
/// * `current` - The "now" snapshot delivered with the forecast
///
/// # Returns
///
/// Day buckets in input order plus the current summary.
///
/// # Examples
///
/// ```
/// use wxchart_core::models::{CurrentSnapshot, HourlySeries};
/// use wxchart_core::normalize::normalize;
///
/// let series = HourlySeries {
///     time: vec!["2022-01-01T00:00".into(), "2022-01-01T01:00".into()],
///     temperature: vec![10.0, 5.0],
///     relative_humidity: vec![45.0, 44.0],
///     precipitation_probability: vec![0.0, 0.0],
///     weather_code: vec![0, 0],
/// };
/// let current = CurrentSnapshot {
///     time: "2022-01-01T00:00".into(),
///     temperature: 13.3,
///     weather_code: 3,
///     wind_speed: None,
///     wind_direction: None,
/// };
///
/// let forecast = normalize(&series, &current).unwrap();
/// assert_eq!(forecast.labels(), vec!["Sat Jan 1"]);
/// assert_eq!(forecast.current_summary.weather_description, "Overcast");
/// ```
pub fn normalize(series: &HourlySeries, current: &CurrentSnapshot) -> Result<NormalizedForecast> {
    series.validate()?;
    let times = parse_hourly_times(&series.time)?;
    let current_summary = summarize_current(current)?;

    let spans = day_spans(&times);
    let daily_buckets = spans
        .iter()
        .map(|span| DailyBucket {
            label: span.label.clone(),
            date: span.date,
            hourly_time: times[span.range()].iter().copied().map(hour_label).collect(),
            hourly_temperature: series.temperature[span.range()].to_vec(),
            hourly_relative_humidity: series.relative_humidity[span.range()].to_vec(),
            hourly_precipitation_probability: series.precipitation_probability[span.range()]
                .to_vec(),
            hourly_weather_code: series.weather_code[span.range()].to_vec(),
        })
        .collect();

    Ok(NormalizedForecast {
        daily_buckets,
        current_summary,
    })
}

/// Build the current-conditions summary.
///
/// The snapshot time is formatted on its own; it does not have to fall inside
/// any bucket.
///
/// # Arguments
///
/// * `current` - The "now" snapshot delivered with the forecast
///
/// # Returns
///
/// The label, temperature and weather description, or an error if the
/// snapshot time cannot be parsed. Unknown codes give an empty description.
pub fn summarize_current(current: &CurrentSnapshot) -> Result<CurrentSummary> {
    let dt = parse_local_timestamp(&current.time)?;

    Ok(CurrentSummary {
        label: current_label(dt),
        temperature: current.temperature,
        weather_description: describe(current.weather_code).to_string(),
    })
}

/// Normalize a complete forecast payload.
pub fn normalize_payload(payload: &ForecastPayload) -> Result<NormalizedForecast> {
    normalize(&payload.hourly, &payload.current_weather)
}
