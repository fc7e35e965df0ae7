//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The sink rejected a write, possibly after part of the record was written
    #[error("Sink write failed after {written} bytes: {source}")]
    SinkWrite {
        written: usize,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An encoder produced bytes that are not UTF-8
    #[error("Encoded record is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Output format name or code that has no encoder
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// strftime pattern chrono cannot render
    #[error("Invalid time format pattern '{pattern}'")]
    InvalidTimeFormat { pattern: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl LoggerError {
    /// Create a sink write error carrying the bytes written before failure
    pub fn sink_write(written: usize, source: std::io::Error) -> Self {
        LoggerError::SinkWrite { written, source }
    }

    pub fn unsupported_format(format: impl Into<String>) -> Self {
        LoggerError::UnsupportedFormat(format.into())
    }

    pub fn invalid_time_format(pattern: impl Into<String>) -> Self {
        LoggerError::InvalidTimeFormat {
            pattern: pattern.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// True when the error comes from how the logger was configured rather
    /// than from the sink or from serializing a record.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            LoggerError::UnsupportedFormat(_)
                | LoggerError::InvalidTimeFormat { .. }
                | LoggerError::InvalidConfiguration { .. }
        )
    }

    /// Bytes that reached the sink before a write failure
    pub fn bytes_written(&self) -> Option<usize> {
        match self {
            LoggerError::SinkWrite { written, .. } => Some(*written),
            _ => None,
        }
    }
}
