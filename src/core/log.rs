//! Leveled logging interface
//!
//! Code that only emits records can take `&dyn Log` or `impl Log` instead of
//! a concrete [`Logger`], and callers can hand it any implementation.

use super::{error::Result, log_level::LogLevel, logger::Logger};
use std::fmt;
use std::sync::Arc;

pub trait Log {
    /// Emit `args` at `level`
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) -> Result<()>;

    #[track_caller]
    fn debug(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(LogLevel::Debug, args)
    }

    #[track_caller]
    fn info(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(LogLevel::Info, args)
    }

    #[track_caller]
    fn warn(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(LogLevel::Warn, args)
    }

    #[track_caller]
    fn error(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(LogLevel::Error, args)
    }
}

impl Log for Logger {
    #[track_caller]
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) -> Result<()> {
        Logger::log(self, level, args)
    }
}

impl<T: Log + ?Sized> Log for &T {
    #[track_caller]
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) -> Result<()> {
        (**self).log(level, args)
    }
}

impl<T: Log + ?Sized> Log for Arc<T> {
    #[track_caller]
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) -> Result<()> {
        (**self).log(level, args)
    }
}
