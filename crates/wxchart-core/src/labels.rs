//! Display labels for days and hours.
//!
//! Labels use English abbreviations and a 12-hour clock regardless of the
//! host locale, so the same payload always yields the same keys.

use chrono::NaiveDateTime;

/// Day label used as the bucket key, e.g. `Sat Jan 1`.
///
/// ```
/// use wxchart_core::labels::day_label;
/// use wxchart_core::parse::parse_local_timestamp;
///
/// let dt = parse_local_timestamp("2022-01-01T23:00").unwrap();
/// assert_eq!(day_label(dt), "Sat Jan 1");
/// ```
pub fn day_label(dt: NaiveDateTime) -> String {
    dt.format("%a %b %-d").to_string()
}

/// Hour-only label, e.g. `12 AM` or `2 PM`.
pub fn hour_label(dt: NaiveDateTime) -> String {
    dt.format("%-I %p").to_string()
}

/// Label for the current-conditions summary, e.g. `Sat Jan 1, 2 PM`.
pub fn current_label(dt: NaiveDateTime) -> String {
    format!("{}, {}", day_label(dt), hour_label(dt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_local_timestamp;

    fn at(s: &str) -> NaiveDateTime {
        parse_local_timestamp(s).unwrap()
    }

    #[test]
    fn day_label_has_no_padding() {
        assert_eq!(day_label(at("2022-01-02T00:00")), "Sun Jan 2");
        assert_eq!(day_label(at("2022-12-25T10:00")), "Sun Dec 25");
    }

    #[test]
    fn hour_label_twelve_hour_clock() {
        assert_eq!(hour_label(at("2022-01-01T00:00")), "12 AM");
        assert_eq!(hour_label(at("2022-01-01T01:00")), "1 AM");
        assert_eq!(hour_label(at("2022-01-01T12:00")), "12 PM");
        assert_eq!(hour_label(at("2022-01-01T14:00")), "2 PM");
        assert_eq!(hour_label(at("2022-01-01T23:30")), "11 PM");
    }

    #[test]
    fn current_label_combines_day_and_hour() {
        assert_eq!(current_label(at("2022-01-01T00:00")), "Sat Jan 1, 12 AM");
        assert_eq!(current_label(at("2023-07-14T15:00")), "Fri Jul 14, 3 PM");
    }
}
