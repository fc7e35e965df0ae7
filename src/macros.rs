//! Logging macros for printf-style message formatting.
//!
//! Each macro takes either a logger followed by a format string, or just a
//! format string, in which case it goes to the default logger. Arguments
//! follow `format!` syntax. Every macro except `fatal!` returns
//! [`Result<()>`](crate::Result).
//!
//! # Examples
//!
//! ```
//! use clog::prelude::*;
//! use clog::info;
//!
//! # fn main() -> clog::Result<()> {
//! let logger = Logger::builder().sink(MemorySink::new()).build();
//!
//! // Basic logging
//! info!(logger, "Server started")?;
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Literal format strings
//!
//! The default-logger form is picked only when the first argument is a
//! string literal. A template built with `concat!`, or one held in a `const`,
//! is not a literal token, so the macro reads it as a logger expression and
//! fails to compile. Call the free functions with `format_args!` instead:
//!
//! ```
//! # fn main() -> clog::Result<()> {
//! let code = 7;
//! clog::set_sink(std::io::sink());
//! clog::info(format_args!(concat!("worker ", "exited with {}"), code))?;
//! # Ok(())
//! # }
//! ```

/// Log a message at an explicit level.
///
/// Without a logger the format string must be a literal; see the
/// [module docs](crate::macros#literal-format-strings).
///
/// # Examples
///
/// ```
/// # use clog::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build();
/// use clog::log;
/// log!(logger, LogLevel::Info, "Simple message").unwrap();
/// log!(logger, LogLevel::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $fmt:literal $($arg:tt)*) => {
        $crate::facade::log($level, ::std::format_args!($fmt $($arg)*))
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, ::std::format_args!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// Without a logger the format string must be a literal.
///
/// ```
/// # use clog::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build();
/// use clog::debug;
/// debug!(logger, "Counter value: {}", 10).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt:literal $($arg:tt)*) => {
        $crate::facade::debug(::std::format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(::std::format_args!($($arg)+))
    };
}

/// Log an info-level message.
///
/// Without a logger the format string must be a literal.
#[macro_export]
macro_rules! info {
    ($fmt:literal $($arg:tt)*) => {
        $crate::facade::info(::std::format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(::std::format_args!($($arg)+))
    };
}

/// Log a warning-level message.
///
/// Without a logger the format string must be a literal.
#[macro_export]
macro_rules! warn {
    ($fmt:literal $($arg:tt)*) => {
        $crate::facade::warn(::std::format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(::std::format_args!($($arg)+))
    };
}

/// Log an error-level message.
///
/// Without a logger the format string must be a literal.
#[macro_export]
macro_rules! error {
    ($fmt:literal $($arg:tt)*) => {
        $crate::facade::error(::std::format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(::std::format_args!($($arg)+))
    };
}

/// Log a fatal-level message and exit the process.
///
/// Without a logger the format string must be a literal.
///
/// ```no_run
/// # use clog::prelude::*;
/// # let logger = Logger::new();
/// use clog::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($fmt:literal $($arg:tt)*) => {
        $crate::facade::fatal(::std::format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(::std::format_args!($($arg)+))
    };
}
