//! Call-site capture
//!
//! Every public emit entry point is `#[track_caller]`, on [`Logger`] and on
//! the facade alike. The compiler threads the location through each tracked
//! frame, so [`CallSite::capture`] resolves to the first untracked frame: the
//! line in user code that called the logger. The facade adds one tracked
//! frame on top of the instance path, which is how the extra level of
//! indirection is skipped.
//!
//! [`Logger`]: super::logger::Logger

use super::output_format::PrintSource;
use std::panic::Location;
use std::path::Path;

/// File recorded when a location cannot be resolved
pub const UNKNOWN_FILE: &str = "???";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    /// Location of the caller, looked through every `#[track_caller]` frame
    #[track_caller]
    #[inline]
    pub fn capture() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn from_location(location: &'static Location<'static>) -> Self {
        if location.file().is_empty() {
            return Self::unknown();
        }
        Self {
            file: location.file(),
            line: location.line(),
        }
    }

    /// Placeholder used when no location is available
    pub const fn unknown() -> Self {
        Self {
            file: UNKNOWN_FILE,
            line: 0,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.line == 0 && self.file == UNKNOWN_FILE
    }

    /// File name without its directories
    pub fn file_name(&self) -> &'static str {
        Path::new(self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.file)
    }

    /// File as it should appear in a record, or `None` when printing is disabled
    pub fn display_file(&self, mode: PrintSource) -> Option<&'static str> {
        match mode {
            PrintSource::Disabled => None,
            PrintSource::File => Some(self.file_name()),
            PrintSource::FullPath => Some(self.file),
        }
    }
}
