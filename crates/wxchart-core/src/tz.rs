//! Timezone handling utilities.
//!
//! Forecast timestamps are local wall-clock times. This module validates
//! timezone identifiers, measures the length of a local day across DST
//! transitions and builds the option list for a timezone picker.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::{TZ_VARIANTS, Tz};
use serde::Serialize;

use crate::error::{Result, WxChartError};

/// Timezone used when none has been selected.
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Parse an IANA timezone name into a [`chrono_tz::Tz`].
///
/// # Arguments
///
/// * `name` - The IANA timezone name (e.g., "Europe/Berlin", "Etc/GMT+5")
///
/// # Returns
///
/// The parsed timezone on success, or an error if the timezone name is invalid.
///
/// # Examples
///
/// ```
/// use wxchart_core::tz::parse_tz;
///
/// let tz = parse_tz("Europe/Berlin").unwrap();
/// assert_eq!(tz.to_string(), "Europe/Berlin");
/// ```
pub fn parse_tz(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| WxChartError::InvalidTimezone(name.to_string()))
}

/// Convert a local wall-clock time to UTC.
///
/// Ambiguous times resolve to the earlier occurrence. Times inside a DST gap
/// resolve to the first valid instant after the gap.
pub fn local_to_utc(local: NaiveDateTime, tz: Tz) -> Option<DateTime<Utc>> {
    tz.from_local_datetime(&local)
        .earliest()
        .or_else(|| {
            (1..=24 * 60)
                .map(|minutes| local + Duration::minutes(minutes))
                .find_map(|candidate| tz.from_local_datetime(&candidate).earliest())
        })
        .map(|dt| dt.with_timezone(&Utc))
}

/// Convert local midnight of `date` to UTC.
pub fn local_midnight_to_utc(date: NaiveDate, tz: Tz) -> Option<DateTime<Utc>> {
    local_to_utc(date.and_hms_opt(0, 0, 0)?, tz)
}

/// Number of hours in the local calendar day: 23 or 25 on DST transition
/// days, 24 otherwise.
///
/// # Arguments
///
/// * `date` - The local calendar date
/// * `tz` - The timezone the date is read in
///
/// # Returns
///
/// The hour count, or `None` if either midnight cannot be mapped to UTC.
///
/// ```
/// use chrono::NaiveDate;
/// use wxchart_core::tz::{expected_hours, parse_tz};
///
/// let tz = parse_tz("Europe/Berlin").unwrap();
/// let spring = NaiveDate::from_ymd_opt(2026, 3, 29).unwrap();
/// assert_eq!(expected_hours(spring, tz), Some(23));
/// ```
pub fn expected_hours(date: NaiveDate, tz: Tz) -> Option<i64> {
    let start = local_midnight_to_utc(date, tz)?;
    let end = local_midnight_to_utc(date.succ_opt()?, tz)?;
    Some((end - start).num_hours())
}

/// Format a UTC offset in seconds as `+HH:MM` / `-HH:MM`.
pub fn format_offset(seconds: i32) -> String {
    let sign = if seconds < 0 { '-' } else { '+' };
    let abs = seconds.unsigned_abs();
    format!("{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60)
}

/// An entry in the timezone picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimezoneOption {
    /// Display label, e.g. `(UTC+01:00) Europe/Berlin`.
    pub label: String,
    /// IANA identifier passed to the forecast request.
    pub value: String,
    /// Offset from UTC in seconds at the reference instant.
    pub offset_seconds: i32,
}

/// All IANA timezones, labeled with the offset in effect at `at`, sorted by
/// offset and then by name.
pub fn timezone_options(at: DateTime<Utc>) -> Vec<TimezoneOption> {
    let mut options: Vec<TimezoneOption> = TZ_VARIANTS
        .iter()
        .map(|tz| {
            let offset_seconds = at.with_timezone(tz).offset().fix().local_minus_utc();
            TimezoneOption {
                label: format!("(UTC{}) {}", format_offset(offset_seconds), tz.name()),
                value: tz.name().to_string(),
                offset_seconds,
            }
        })
        .collect();

    options.sort_by(|a, b| {
        a.offset_seconds
            .cmp(&b.offset_seconds)
            .then_with(|| a.value.cmp(&b.value))
    });
    options
}
