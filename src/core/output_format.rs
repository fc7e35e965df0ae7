//! Output encoding and source-location options
//!
//! - Text: Human-readable single line (default)
//! - Json: One compact JSON object per line
//! - JsonIndent: Tab-indented JSON object followed by a newline

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output encoding for log records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable text format (default)
    ///
    /// Example: `2025-01-08 10:30:45.123456 main.rs:12 (api) [INFO] Request processed`
    #[default]
    Text,

    /// JSON format for machine processing
    ///
    /// Example: `{"time":"2025-01-08 10:30:45.123456","file":"main.rs","line":12,"level":"INFO","msg":"Request processed"}`
    Json,

    /// JSON indented with a tab per nesting level
    JsonIndent,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::JsonIndent => "json_indent",
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::JsonIndent)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "std" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "json_indent" | "json-indent" | "jsonindent" => Ok(OutputFormat::JsonIndent),
            _ => Err(LoggerError::unsupported_format(s)),
        }
    }
}

/// Numeric codes: 1 = text, 2 = JSON, 3 = indented JSON
impl TryFrom<u8> for OutputFormat {
    type Error = LoggerError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(OutputFormat::Text),
            2 => Ok(OutputFormat::Json),
            3 => Ok(OutputFormat::JsonIndent),
            other => Err(LoggerError::unsupported_format(other.to_string())),
        }
    }
}

/// How the call site is rendered in each record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrintSource {
    /// No file or line
    Disabled,
    /// File name without directories, plus line
    #[default]
    File,
    /// Path as recorded by the compiler, plus line
    FullPath,
}

impl FromStr for PrintSource {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "disabled" | "disable" | "none" | "off" => Ok(PrintSource::Disabled),
            "file" => Ok(PrintSource::File),
            "full_path" | "full-path" | "fullpath" => Ok(PrintSource::FullPath),
            _ => Err(LoggerError::config(
                "PrintSource",
                format!("Invalid print source: '{}'", s),
            )),
        }
    }
}
