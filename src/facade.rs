//! Process-wide default logger
//!
//! Free functions mirroring every [`Logger`] operation, all delegating to one
//! instance created on first use and kept for the life of the process. It
//! starts with the same defaults as [`Logger::new`]: DEBUG, plain text,
//! stderr, no color, the process-wide lock.
//!
//! Code that needs isolation from other users of the default logger should
//! build its own [`Logger`] (or start from [`copy`]).
//!
//! ```no_run
//! use clog::LogLevel;
//!
//! clog::set_level(LogLevel::Info).enable_pid();
//! clog::info!("service started on {}", "0.0.0.0:8080").unwrap();
//! ```

use crate::core::{
    LogLevel, Logger, OutputFormat, PrintSource, Result, SharedLock, TimestampFormat,
};
use crate::sinks::Sink;
use once_cell::sync::Lazy;
use std::fmt;
use std::io::Write;

static DEFAULT_LOGGER: Lazy<Logger> = Lazy::new(Logger::new);

/// The default logger itself
pub fn default_logger() -> &'static Logger {
    &DEFAULT_LOGGER
}

/// Independent logger starting from the default logger's options and sink
pub fn copy() -> Logger {
    DEFAULT_LOGGER.copy()
}

/// Lock the default logger holds; pass it to [`Logger::with_shared_lock`] to
/// order another logger's writes with it.
pub fn default_lock() -> SharedLock {
    crate::core::sync::global_lock()
}

pub fn set_level(level: LogLevel) -> &'static Logger {
    DEFAULT_LOGGER.set_level(level)
}

pub fn set_sink<W: Write + Send + 'static>(writer: W) -> &'static Logger {
    DEFAULT_LOGGER.set_sink(writer)
}

pub fn set_shared_sink(sink: Sink) -> &'static Logger {
    DEFAULT_LOGGER.set_shared_sink(sink)
}

pub fn set_prefix(prefix: impl Into<String>) -> &'static Logger {
    DEFAULT_LOGGER.set_prefix(prefix)
}

pub fn clear_prefix() -> &'static Logger {
    DEFAULT_LOGGER.clear_prefix()
}

pub fn set_time_format(format: impl Into<TimestampFormat>) -> &'static Logger {
    DEFAULT_LOGGER.set_time_format(format)
}

pub fn enable_color() -> &'static Logger {
    DEFAULT_LOGGER.enable_color()
}

pub fn disable_color() -> &'static Logger {
    DEFAULT_LOGGER.disable_color()
}

pub fn enable_diffs() -> &'static Logger {
    DEFAULT_LOGGER.enable_diffs()
}

pub fn disable_diffs() -> &'static Logger {
    DEFAULT_LOGGER.disable_diffs()
}

pub fn enable_pid() -> &'static Logger {
    DEFAULT_LOGGER.enable_pid()
}

pub fn disable_pid() -> &'static Logger {
    DEFAULT_LOGGER.disable_pid()
}

pub fn set_trace_id(trace_id: impl Into<String>) -> &'static Logger {
    DEFAULT_LOGGER.set_trace_id(trace_id)
}

pub fn clear_trace_id() -> &'static Logger {
    DEFAULT_LOGGER.clear_trace_id()
}

pub fn set_print_source(print_source: PrintSource) -> &'static Logger {
    DEFAULT_LOGGER.set_print_source(print_source)
}

pub fn set_output_format(format: OutputFormat) -> &'static Logger {
    DEFAULT_LOGGER.set_output_format(format)
}

pub fn enable_newline_escaping() -> &'static Logger {
    DEFAULT_LOGGER.enable_newline_escaping()
}

pub fn disable_newline_escaping() -> &'static Logger {
    DEFAULT_LOGGER.disable_newline_escaping()
}

// Each emit function is one more #[track_caller] frame on top of the
// instance methods, so records still point at the user's line.

#[track_caller]
pub fn log(level: LogLevel, args: fmt::Arguments<'_>) -> Result<()> {
    DEFAULT_LOGGER.log(level, args)
}

#[track_caller]
pub fn debug(args: fmt::Arguments<'_>) -> Result<()> {
    DEFAULT_LOGGER.debug(args)
}

#[track_caller]
pub fn info(args: fmt::Arguments<'_>) -> Result<()> {
    DEFAULT_LOGGER.info(args)
}

#[track_caller]
pub fn warn(args: fmt::Arguments<'_>) -> Result<()> {
    DEFAULT_LOGGER.warn(args)
}

#[track_caller]
pub fn error(args: fmt::Arguments<'_>) -> Result<()> {
    DEFAULT_LOGGER.error(args)
}

/// Emit at FATAL through the default logger, then exit the process
#[track_caller]
pub fn fatal(args: fmt::Arguments<'_>) -> ! {
    DEFAULT_LOGGER.fatal(args)
}
