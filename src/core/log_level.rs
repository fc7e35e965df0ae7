//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a record. Ordering is total: `Debug < Info < Warn < Error < Fatal`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    #[default]
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Debug => Magenta,
            LogLevel::Info => Blue,
            LogLevel::Warn => Yellow,
            LogLevel::Error | LogLevel::Fatal => Red,
        }
    }

    /// Level name wrapped in the ANSI escape for [`color_code`](Self::color_code).
    ///
    /// Unlike `colored::Colorize`, this ignores terminal detection: an
    /// instance with color enabled always gets colored output.
    pub fn colored_str(&self) -> String {
        format!(
            "\x1b[{}m{}\x1b[0m",
            self.color_code().to_fg_str(),
            self.to_str()
        )
    }

    /// Whether a logger with this threshold emits records at `level`
    #[inline]
    pub fn admits(&self, level: LogLevel) -> bool {
        level >= *self
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, LoggerError> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => Err(LoggerError::config(
                "LogLevel",
                format!("Invalid log level: '{}'", s),
            )),
        }
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = LoggerError;

    fn try_from(code: u8) -> Result<Self, LoggerError> {
        LogLevel::ALL
            .into_iter()
            .find(|level| *level as u8 == code)
            .ok_or_else(|| LoggerError::config("LogLevel", format!("Invalid level code: {}", code)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Fatal);
    }

    #[test]
    fn test_admits() {
        assert!(LogLevel::Warn.admits(LogLevel::Warn));
        assert!(LogLevel::Warn.admits(LogLevel::Fatal));
        assert!(!LogLevel::Warn.admits(LogLevel::Info));
        assert!(LogLevel::Debug.admits(LogLevel::Debug));
    }

    #[test]
    fn test_parse() {
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("Error".parse::<LogLevel>().unwrap(), LogLevel::Error);
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_numeric_codes() {
        assert_eq!(LogLevel::try_from(1).unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::try_from(5).unwrap(), LogLevel::Fatal);
        assert!(LogLevel::try_from(0).is_err());
        assert!(LogLevel::try_from(6).is_err());
    }

    #[test]
    fn test_colored_str() {
        assert_eq!(LogLevel::Debug.colored_str(), "\x1b[35mDEBUG\x1b[0m");
        assert_eq!(LogLevel::Info.colored_str(), "\x1b[34mINFO\x1b[0m");
        assert_eq!(LogLevel::Warn.colored_str(), "\x1b[33mWARN\x1b[0m");
        assert_eq!(LogLevel::Error.colored_str(), "\x1b[31mERROR\x1b[0m");
        assert_eq!(LogLevel::Fatal.colored_str(), "\x1b[31mFATAL\x1b[0m");
    }

    #[test]
    fn test_serde_uppercase() {
        assert_eq!(serde_json::to_string(&LogLevel::Warn).unwrap(), "\"WARN\"");
        let level: LogLevel = serde_json::from_str("\"INFO\"").unwrap();
        assert_eq!(level, LogLevel::Info);
    }
}
