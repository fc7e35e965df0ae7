//! Main logger implementation

use super::{
    call_site::CallSite,
    config::LoggerConfig,
    error::Result,
    log_level::LogLevel,
    log_record::{escape_line_breaks, LogRecord},
    output_format::{OutputFormat, PrintSource},
    sync::{OutputLock, SharedLock},
    timestamp::TimestampFormat,
};
use crate::sinks::Sink;
use chrono::Local;
use parking_lot::Mutex;
use std::fmt;
use std::io::Write;
use std::time::{Duration, Instant};

/// Exit status used by [`Logger::fatal`]
pub const FATAL_EXIT_CODE: i32 = 1;

struct LoggerState {
    config: LoggerConfig,
    sink: Sink,
    last_emit: Option<Instant>,
}

/// A configurable logger.
///
/// All mutators take `&self` and return `&Self`, so a logger can be shared
/// between threads and configured with chained calls:
///
/// ```
/// use clog::{Logger, LogLevel, MemorySink};
///
/// let sink = MemorySink::new();
/// let logger = Logger::new();
/// logger
///     .set_sink(sink.clone())
///     .set_prefix("api")
///     .set_level(LogLevel::Info)
///     .enable_pid();
///
/// clog::info!(logger, "listening on port {}", 8080).unwrap();
/// assert!(sink.contents().contains("(api) [INFO] listening on port 8080"));
/// ```
pub struct Logger {
    lock: OutputLock,
    state: Mutex<LoggerState>,
    pid: u32,
}

impl Logger {
    /// Logger at DEBUG, writing plain text to stderr, holding the process-wide lock
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(LoggerConfig::default(), Sink::stderr(), OutputLock::global())
    }

    /// Logger configured from `config`, writing to stderr
    #[must_use]
    pub fn from_config(config: LoggerConfig) -> Self {
        let lock = if config.own_lock {
            OutputLock::Local
        } else {
            OutputLock::global()
        };
        Self::from_parts(config, Sink::stderr(), lock)
    }

    fn from_parts(mut config: LoggerConfig, sink: Sink, lock: OutputLock) -> Self {
        config.own_lock = lock.is_local();
        Self {
            lock,
            state: Mutex::new(LoggerState {
                config,
                sink,
                last_emit: None,
            }),
            pid: std::process::id(),
        }
    }

    /// Switch to a lock private to this logger.
    ///
    /// Only safe when no other logger writes to the same sink at the same
    /// time; otherwise records may interleave.
    #[must_use]
    pub fn with_own_lock(mut self) -> Self {
        self.lock = OutputLock::Local;
        self.state.get_mut().config.own_lock = true;
        self
    }

    /// Join `lock`, ordering this logger's writes with every logger holding it
    #[must_use]
    pub fn with_shared_lock(mut self, lock: SharedLock) -> Self {
        self.lock = OutputLock::Shared(lock);
        self.state.get_mut().config.own_lock = false;
        self
    }

    /// Independent logger with the same options and sink.
    ///
    /// The copy starts with no previous record, so its first diff is zero.
    #[must_use]
    pub fn copy(&self) -> Logger {
        let locked = self.lock.lock(&self.state);
        Self::from_parts(
            locked.state.config.clone(),
            locked.state.sink.clone(),
            self.lock.clone(),
        )
    }

    fn update(&self, apply: impl FnOnce(&mut LoggerState)) -> &Self {
        let mut locked = self.lock.lock(&self.state);
        apply(&mut *locked.state);
        self
    }

    pub fn set_level(&self, level: LogLevel) -> &Self {
        self.update(|state| state.config.level = level)
    }

    /// Write to `writer` from now on
    pub fn set_sink<W: Write + Send + 'static>(&self, writer: W) -> &Self {
        self.set_shared_sink(Sink::new(writer))
    }

    /// Write through an existing sink handle, shared with whoever else holds it
    pub fn set_shared_sink(&self, sink: Sink) -> &Self {
        self.update(|state| state.sink = sink)
    }

    /// Label each record with ` (prefix)`; an empty prefix clears it
    pub fn set_prefix(&self, prefix: impl Into<String>) -> &Self {
        let prefix = prefix.into();
        self.update(|state| state.config.prefix = prefix)
    }

    pub fn clear_prefix(&self) -> &Self {
        self.set_prefix(String::new())
    }

    /// Accepts a [`TimestampFormat`] or a strftime pattern
    pub fn set_time_format(&self, format: impl Into<TimestampFormat>) -> &Self {
        let format = format.into();
        self.update(|state| state.config.time_format = format)
    }

    pub fn enable_color(&self) -> &Self {
        self.update(|state| state.config.color = true)
    }

    pub fn disable_color(&self) -> &Self {
        self.update(|state| state.config.color = false)
    }

    /// Report the time since the previous record. The first record after
    /// enabling reports zero.
    pub fn enable_diffs(&self) -> &Self {
        self.update(|state| {
            if !state.config.diffs {
                state.last_emit = None;
            }
            state.config.diffs = true;
        })
    }

    pub fn disable_diffs(&self) -> &Self {
        self.update(|state| state.config.diffs = false)
    }

    pub fn enable_pid(&self) -> &Self {
        self.update(|state| state.config.pid = true)
    }

    pub fn disable_pid(&self) -> &Self {
        self.update(|state| state.config.pid = false)
    }

    /// Append `UUID:<id>` to every record; an empty id clears it
    pub fn set_trace_id(&self, trace_id: impl Into<String>) -> &Self {
        let trace_id = trace_id.into();
        self.update(|state| state.config.trace_id = trace_id)
    }

    pub fn clear_trace_id(&self) -> &Self {
        self.set_trace_id(String::new())
    }

    pub fn set_print_source(&self, print_source: PrintSource) -> &Self {
        self.update(|state| state.config.print_source = print_source)
    }

    pub fn set_output_format(&self, format: OutputFormat) -> &Self {
        self.update(|state| state.config.output_format = format)
    }

    /// Escape line breaks and tabs in text messages. JSON output is unaffected.
    pub fn enable_newline_escaping(&self) -> &Self {
        self.update(|state| state.config.escape_newlines = true)
    }

    pub fn disable_newline_escaping(&self) -> &Self {
        self.update(|state| state.config.escape_newlines = false)
    }

    /// Current threshold
    pub fn level(&self) -> LogLevel {
        self.lock.lock(&self.state).state.config.level
    }

    /// Snapshot of the current options
    pub fn config(&self) -> LoggerConfig {
        self.lock.lock(&self.state).state.config.clone()
    }

    pub fn uses_own_lock(&self) -> bool {
        self.lock.is_local()
    }

    /// Process id reported when pid printing is enabled
    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Emit `args` at `level` if the threshold admits it.
    ///
    /// Unlike [`fatal`](Self::fatal), a `Fatal` record logged here does not
    /// exit the process.
    #[track_caller]
    pub fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) -> Result<()> {
        self.log_at(level, CallSite::capture(), args)
    }

    /// Emit with an explicit call site instead of the caller's location
    pub fn log_at(&self, level: LogLevel, site: CallSite, args: fmt::Arguments<'_>) -> Result<()> {
        if !self.level().admits(level) {
            return Ok(());
        }

        // Formatting runs caller Display/Debug code, which may log too; no lock is held here.
        let msg = fmt::format(args);

        let mut locked = self.lock.lock(&self.state);
        let state = &mut *locked.state;

        // The threshold may have moved while the message was formatted
        if !state.config.level.admits(level) {
            return Ok(());
        }

        let now = Local::now();
        let time = state.config.time_format.format(&now)?;

        let diff = if state.config.diffs {
            let instant = Instant::now();
            let elapsed = state
                .last_emit
                .map_or(Duration::ZERO, |previous| instant.duration_since(previous));
            state.last_emit = Some(instant);
            Some(elapsed)
        } else {
            None
        };

        let config = &state.config;
        let msg = if config.escape_newlines && config.output_format == OutputFormat::Text {
            escape_line_breaks(&msg)
        } else {
            msg
        };
        let record = LogRecord::new(level, msg)
            .with_time(time)
            .with_call_site(site, config.print_source)
            .with_prefix(&config.prefix)
            .with_diff(diff)
            .with_pid(config.pid.then_some(self.pid))
            .with_uuid((!config.trace_id.is_empty()).then_some(config.trace_id.as_str()));

        let encoded = record.encode(config.output_format, config.color)?;
        state.sink.write_record(encoded.as_bytes())
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(LogLevel::Debug, args)
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(LogLevel::Info, args)
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(LogLevel::Warn, args)
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(LogLevel::Error, args)
    }

    /// Emit at FATAL, then exit with [`FATAL_EXIT_CODE`].
    ///
    /// FATAL is the top of the level order, so every threshold admits it.
    /// The process exits whether or not the write succeeded.
    #[track_caller]
    pub fn fatal(&self, args: fmt::Arguments<'_>) -> ! {
        let _ = self.log(LogLevel::Fatal, args);
        std::process::exit(FATAL_EXIT_CODE)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("lock", &self.lock)
            .field("config", &self.config())
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use clog::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder()
///     .level(LogLevel::Info)
///     .sink(sink.clone())
///     .prefix("worker")
///     .output_format(OutputFormat::Json)
///     .build();
///
/// clog::debug!(logger, "hidden").unwrap();
/// clog::info!(logger, "job {} done", 7).unwrap();
/// assert_eq!(sink.lines().len(), 1);
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    sink: Option<Sink>,
    shared_lock: Option<SharedLock>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            sink: None,
            shared_lock: None,
        }
    }

    /// Start from a complete configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.config.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn sink<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.sink = Some(Sink::new(writer));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn shared_sink(mut self, sink: Sink) -> Self {
        self.sink = Some(sink);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = prefix.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn time_format(mut self, format: impl Into<TimestampFormat>) -> Self {
        self.config.time_format = format.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn color(mut self, enabled: bool) -> Self {
        self.config.color = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn diffs(mut self, enabled: bool) -> Self {
        self.config.diffs = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn pid(mut self, enabled: bool) -> Self {
        self.config.pid = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.config.trace_id = trace_id.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn print_source(mut self, print_source: PrintSource) -> Self {
        self.config.print_source = print_source;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.config.output_format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn escape_newlines(mut self, enabled: bool) -> Self {
        self.config.escape_newlines = enabled;
        self
    }

    /// Use a lock private to the logger instead of a shared one
    #[must_use = "builder methods return a new value"]
    pub fn own_lock(mut self, enabled: bool) -> Self {
        self.config.own_lock = enabled;
        self
    }

    /// Share `lock` instead of the process-wide lock. Ignored with `own_lock(true)`.
    #[must_use = "builder methods return a new value"]
    pub fn shared_lock(mut self, lock: SharedLock) -> Self {
        self.shared_lock = Some(lock);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let lock = match (self.config.own_lock, self.shared_lock) {
            (true, _) => OutputLock::Local,
            (false, Some(lock)) => OutputLock::Shared(lock),
            (false, None) => OutputLock::global(),
        };
        Logger::from_parts(self.config, self.sink.unwrap_or_default(), lock)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
