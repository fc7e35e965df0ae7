//! Core logger types

pub mod call_site;
pub mod config;
pub mod error;
pub mod log;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod output_format;
pub mod sync;
pub mod timestamp;

pub use call_site::CallSite;
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use log::Log;
pub use log_level::LogLevel;
pub use log_record::LogRecord;
pub use logger::{Logger, LoggerBuilder, FATAL_EXIT_CODE};
pub use output_format::{OutputFormat, PrintSource};
pub use sync::{OutputLock, SharedLock};
pub use timestamp::{TimestampFormat, DEFAULT_TIME_FORMAT};
