//! Timestamp formatting utilities
//!
//! Records capture local wall-clock time at the call and render it with the
//! instance's [`TimestampFormat`]. Custom patterns use chrono's strftime syntax.

use super::error::{LoggerError, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Pattern behind [`TimestampFormat::Standard`]: `2025-01-08 10:30:45.123456`
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use clog::TimestampFormat;
///
/// // Apache log format
/// let format = TimestampFormat::from("%d/%b/%Y:%H:%M:%S %z");
/// assert_eq!(format, TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Local time with microseconds: `2025-01-08 10:30:45.123456`
    #[default]
    Standard,

    /// ISO 8601 with milliseconds and offset: `2025-01-08T10:30:45.123+01:00`
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45.123456789+01:00`
    Rfc3339,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    /// Format a local `DateTime` according to this format
    ///
    /// Fails with [`LoggerError::InvalidTimeFormat`] when a custom pattern
    /// contains a specifier chrono does not understand.
    pub fn format(&self, datetime: &DateTime<Local>) -> Result<String> {
        match self {
            TimestampFormat::Standard => render(datetime, DEFAULT_TIME_FORMAT),
            TimestampFormat::Iso8601 => render(datetime, "%Y-%m-%dT%H:%M:%S%.3f%:z"),
            TimestampFormat::Rfc3339 => Ok(datetime.to_rfc3339()),
            TimestampFormat::UnixMillis => Ok(datetime.timestamp_millis().to_string()),
            TimestampFormat::Custom(pattern) => render(datetime, pattern),
        }
    }

    /// Get the strftime pattern behind this format, if it has one
    pub fn pattern(&self) -> Option<&str> {
        match self {
            TimestampFormat::Standard => Some(DEFAULT_TIME_FORMAT),
            TimestampFormat::Custom(pattern) => Some(pattern),
            _ => None,
        }
    }
}

// chrono's `to_string()` panics on a bad pattern; writing surfaces it as fmt::Error.
fn render(datetime: &DateTime<Local>, pattern: &str) -> Result<String> {
    let mut out = String::with_capacity(pattern.len() + 16);
    write!(out, "{}", datetime.format(pattern))
        .map_err(|_| LoggerError::invalid_time_format(pattern))?;
    Ok(out)
}

impl From<&str> for TimestampFormat {
    fn from(pattern: &str) -> Self {
        TimestampFormat::Custom(pattern.to_string())
    }
}

impl From<String> for TimestampFormat {
    fn from(pattern: String) -> Self {
        TimestampFormat::Custom(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .earliest()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_standard_format() {
        let result = TimestampFormat::Standard.format(&fixed_datetime()).unwrap();
        assert_eq!(result, "2025-01-08 10:30:45.123456");
    }

    #[test]
    fn test_iso8601_format() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime()).unwrap();
        assert!(result.starts_with("2025-01-08T10:30:45.123"));
    }

    #[test]
    fn test_rfc3339_format() {
        let result = TimestampFormat::Rfc3339.format(&fixed_datetime()).unwrap();
        assert!(result.starts_with("2025-01-08T10:30:45"));
    }

    #[test]
    fn test_unix_millis_format() {
        let result = TimestampFormat::UnixMillis.format(&fixed_datetime()).unwrap();
        let parsed: i64 = result.parse().expect("valid unix millis timestamp");
        assert_eq!(parsed % 1000, 123);
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::from("%Y/%m/%d %H:%M");
        let result = format.format(&fixed_datetime()).unwrap();
        assert_eq!(result, "2025/01/08 10:30");
    }

    #[test]
    fn test_invalid_custom_format() {
        let format = TimestampFormat::from("%Y-%Q");
        let err = format.format(&fixed_datetime()).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidTimeFormat { .. }));
    }

    #[test]
    fn test_pattern() {
        assert_eq!(TimestampFormat::Standard.pattern(), Some(DEFAULT_TIME_FORMAT));
        assert_eq!(TimestampFormat::from("%H").pattern(), Some("%H"));
        assert_eq!(TimestampFormat::UnixMillis.pattern(), None);
    }

    #[test]
    fn test_deserialization() {
        let format: TimestampFormat =
            serde_json::from_str("\"Standard\"").expect("deserialize Standard");
        assert_eq!(format, TimestampFormat::Standard);

        let format: TimestampFormat =
            serde_json::from_str(r#"{"Custom":"%Y-%m-%d"}"#).expect("deserialize Custom");
        assert_eq!(format, TimestampFormat::Custom("%Y-%m-%d".to_string()));
    }
}
