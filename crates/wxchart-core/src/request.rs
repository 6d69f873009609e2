//! Forecast request construction.
//!
//! The HTTP call is made elsewhere; this module only builds the request URL
//! for a clicked map point and a selected timezone.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, WxChartError};
use crate::tz::parse_tz;

pub const FORECAST_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";

/// Hourly fields requested from the forecast API.
pub const HOURLY_FIELDS: [&str; 4] = [
    "temperature_2m",
    "relativehumidity_2m",
    "precipitation_probability",
    "weathercode",
];

/// A map point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(WxChartError::InvalidCoordinate(format!(
                "latitude {} outside [-90, 90]",
                self.lat
            )));
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(WxChartError::InvalidCoordinate(format!(
                "longitude {} outside [-180, 180]",
                self.lng
            )));
        }
        Ok(())
    }
}

/// Parameters of one forecast request.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRequest {
    pub point: Point,
    /// IANA timezone, or `auto` to let the API pick one from the point.
    /// `None` leaves timestamps in GMT.
    pub timezone: Option<String>,
}

impl ForecastRequest {
    pub fn new(point: Point, timezone: Option<String>) -> Self {
        Self { point, timezone }
    }

    /// Build the request URL.
    ///
    /// Query values are form-encoded, so a timezone such as `Etc/GMT+5`
    /// reaches the API intact.
    ///
    /// # Returns
    ///
    /// The full URL, or an error when the point is out of range or the
    /// timezone is unknown.
    ///
    /// ```
    /// use wxchart_core::request::{ForecastRequest, Point};
    ///
    /// let req = ForecastRequest::new(Point::new(49.25, -123.12), Some("America/Vancouver".into()));
    /// let url = req.url().unwrap();
    /// assert!(url.contains("&timezone=America%2FVancouver"));
    /// ```
    pub fn url(&self) -> Result<String> {
        self.point.validate()?;

        let lat = self.point.lat.to_string();
        let lng = self.point.lng.to_string();
        let hourly = HOURLY_FIELDS.join(",");
        let mut params = vec![
            ("latitude", lat.as_str()),
            ("longitude", lng.as_str()),
            ("current_weather", "true"),
        ];

        if let Some(tz) = self.timezone.as_deref().map(str::trim) {
            if !tz.eq_ignore_ascii_case("auto") {
                parse_tz(tz)?;
            }
            params.push(("timezone", tz));
        }

        params.push(("hourly", hourly.as_str()));

        let url = Url::parse_with_params(FORECAST_ENDPOINT, &params)
            .map_err(|e| WxChartError::ParseError(format!("forecast URL: {e}")))?;
        Ok(url.into())
    }
}
