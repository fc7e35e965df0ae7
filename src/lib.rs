//! # clog
//!
//! Leveled logging with optional prefixes, ANSI colors, call sites, time
//! diffs, process ids and trace ids, rendered as plain text or JSON.
//!
//! ## Features
//!
//! - **Instances or a default**: build independent [`Logger`]s, or use the
//!   process-wide one through free functions and macros
//! - **Thread Safe**: loggers share one output lock by default, so records
//!   from different loggers on the same sink never interleave
//! - **Accurate call sites**: records point at the calling line, whether the
//!   call went through an instance or the default logger
//! - **Errors are returned**: sink and encoding failures come back to the
//!   caller instead of being swallowed

pub mod core;
pub mod facade;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        CallSite, Log, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        OutputFormat, PrintSource, Result, SharedLock, TimestampFormat,
    };
    pub use crate::sinks::{MemorySink, Sink};
}

pub use crate::core::{
    CallSite, Log, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerConfig, LoggerError,
    OutputFormat, OutputLock, PrintSource, Result, SharedLock, TimestampFormat, DEFAULT_TIME_FORMAT,
    FATAL_EXIT_CODE,
};
pub use facade::{
    clear_prefix, clear_trace_id, copy, debug, default_lock, default_logger, disable_color,
    disable_diffs, disable_newline_escaping, disable_pid, enable_color, enable_diffs,
    enable_newline_escaping, enable_pid, error, fatal, info, log,
    set_level, set_output_format, set_prefix, set_print_source, set_shared_sink, set_sink,
    set_time_format, set_trace_id, warn,
};
pub use sinks::{MemorySink, Sink};
