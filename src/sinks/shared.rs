//! Shared handle over a byte-writable output target

use crate::core::{LoggerError, Result};
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

/// Cloneable handle to any `Write + Send` target.
///
/// Clones write to the same target, so several loggers (or a logger and its
/// [`copy`](crate::Logger::copy)) can share one file or buffer. The handle
/// only writes and flushes; the target is released when the last clone drops.
#[derive(Clone)]
pub struct Sink {
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Sink {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Write one encoded record and flush.
    ///
    /// On failure the error carries how many bytes of the record reached the target.
    pub fn write_record(&self, bytes: &[u8]) -> Result<()> {
        let mut writer = self.writer.lock();
        let mut written = 0;

        while written < bytes.len() {
            match writer.write(&bytes[written..]) {
                Ok(0) => {
                    return Err(LoggerError::sink_write(
                        written,
                        io::Error::new(io::ErrorKind::WriteZero, "sink accepted no bytes"),
                    ));
                }
                Ok(n) => written += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(LoggerError::sink_write(written, e)),
            }
        }

        writer
            .flush()
            .map_err(|e| LoggerError::sink_write(written, e))
    }

    /// True when both handles write to the same target
    pub fn same_target(&self, other: &Sink) -> bool {
        Arc::ptr_eq(&self.writer, &other.writer)
    }
}

impl Default for Sink {
    fn default() -> Self {
        Self::stderr()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("handles", &Arc::strong_count(&self.writer))
            .finish()
    }
}
