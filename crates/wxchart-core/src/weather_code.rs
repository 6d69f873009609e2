//! WMO weather code descriptions.
//!
//! The table is fixed and immutable. Lookups are total: an unknown code maps
//! to an empty description instead of an error.

/// WMO weather codes and their English descriptions, in ascending code order.
pub const WEATHER_CODES: [(i64, &str); 28] = [
    (0, "Clear sky"),
    (1, "Mainly clear"),
    (2, "Partly cloudy"),
    (3, "Overcast"),
    (45, "Fog"),
    (48, "Depositing rime fog"),
    (51, "Drizzle: Light"),
    (53, "Drizzle: Moderate"),
    (55, "Drizzle: Dense intensity"),
    (56, "Freezing Drizzle: Light"),
    (57, "Freezing Drizzle: Dense intensity"),
    (61, "Rain: Slight"),
    (63, "Rain: Moderate"),
    (65, "Rain: Heavy intensity"),
    (66, "Freezing Rain: Light"),
    (67, "Freezing Rain: Heavy intensity"),
    (71, "Snow fall: Slight"),
    (73, "Snow fall: Moderate"),
    (75, "Snow fall: Heavy intensity"),
    (77, "Snow grains"),
    (80, "Rain showers: Slight"),
    (81, "Rain showers: Moderate"),
    (82, "Rain showers: Violent"),
    (85, "Snow showers: Slight"),
    (86, "Snow showers: Heavy"),
    (95, "Thunderstorm: Slight or moderate"),
    (96, "Thunderstorm with slight hail"),
    (99, "Thunderstorm with heavy hail"),
];

/// Describe a WMO weather code.
///
/// ```
/// use wxchart_core::weather_code::describe;
///
/// assert_eq!(describe(3), "Overcast");
/// assert_eq!(describe(1000), "");
/// ```
pub fn describe(code: i64) -> &'static str {
    WEATHER_CODES
        .binary_search_by_key(&code, |&(c, _)| c)
        .map(|idx| WEATHER_CODES[idx].1)
        .unwrap_or("")
}

pub fn is_known(code: i64) -> bool {
    !describe(code).is_empty()
}

/// All known codes in ascending order.
pub fn known_codes() -> impl Iterator<Item = i64> {
    WEATHER_CODES.iter().map(|&(code, _)| code)
}
