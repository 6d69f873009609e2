//! Error types for wxchart-core.
//!
//! Malformed input is a precondition violation and is reported as an error.
//! Unknown weather codes and empty hourly series are not errors.

use thiserror::Error;

/// The main error type for wxchart operations.
#[derive(Debug, Error)]
pub enum WxChartError {
    /// An hourly sequence does not line up with the `time` sequence.
    #[error("Length mismatch: '{field}' has {actual} entries, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Error parsing a timestamp, enum string or JSON document.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid timezone name provided.
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Day selection outside the available buckets.
    #[error("Invalid day selection {index}: {available} day(s) available")]
    InvalidSelection { index: usize, available: usize },

    /// Latitude or longitude out of range.
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),
}

/// Result type alias for wxchart operations.
pub type Result<T> = std::result::Result<T, WxChartError>;
