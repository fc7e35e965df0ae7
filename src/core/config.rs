//! Logger configuration
//!
//! Everything about a logger except its sink and lock handle is plain data
//! and can be loaded from JSON:
//!
//! ```
//! use clog::{LoggerConfig, LogLevel, OutputFormat};
//!
//! let config = LoggerConfig::from_json(
//!     r#"{"level": "WARN", "prefix": "api", "output_format": "json"}"#,
//! ).unwrap();
//! assert_eq!(config.level, LogLevel::Warn);
//! assert_eq!(config.output_format, OutputFormat::Json);
//! ```

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::output_format::{OutputFormat, PrintSource};
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Minimum level that is emitted
    pub level: LogLevel,
    /// Label printed as ` (prefix)`; empty means none
    #[serde(skip_serializing_if = "String::is_empty")]
    pub prefix: String,
    pub time_format: TimestampFormat,
    /// Wrap the level name in ANSI colors (text format only)
    pub color: bool,
    /// Report time elapsed since the previous record
    pub diffs: bool,
    /// Append the process id
    pub pid: bool,
    /// Opaque id appended to every record; empty means none
    #[serde(skip_serializing_if = "String::is_empty")]
    pub trace_id: String,
    pub print_source: PrintSource,
    pub output_format: OutputFormat,
    /// Escape `\n`, `\r` and `\t` in text messages so a record stays on one line
    pub escape_newlines: bool,
    /// Use a lock private to the logger instead of the process-wide one
    pub own_lock: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Debug,
            prefix: String::new(),
            time_format: TimestampFormat::default(),
            color: false,
            diffs: false,
            pid: false,
            trace_id: String::new(),
            print_source: PrintSource::File,
            output_format: OutputFormat::Text,
            escape_newlines: false,
            own_lock: false,
        }
    }
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON configuration. Missing keys take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(json).map_err(|e| {
            LoggerError::config("LoggerConfig", e.to_string())
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject a time format that cannot be rendered
    pub fn validate(&self) -> Result<()> {
        self.time_format.format(&chrono::Local::now()).map(|_| ())
    }
}
