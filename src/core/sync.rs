//! Output synchronization
//!
//! A logger either joins a shared lock (the process-wide one by default, or
//! any injected [`SharedLock`]) or relies on its own state lock alone. Every
//! mutator and every emit takes the output lock first and the state lock
//! second; both are released when the guard drops, including on error paths.

use once_cell::sync::Lazy;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// Handle to a lock that serializes output across loggers.
pub type SharedLock = Arc<Mutex<()>>;

static WRITER_LOCK: Lazy<SharedLock> = Lazy::new(|| Arc::new(Mutex::new(())));

/// The lock every logger joins unless told otherwise
pub fn global_lock() -> SharedLock {
    Arc::clone(&WRITER_LOCK)
}

/// Locking strategy chosen when a logger is built
#[derive(Debug, Clone)]
pub enum OutputLock {
    /// Writes are ordered with every other logger holding the same lock
    Shared(SharedLock),
    /// Only this logger's own state lock is taken.
    ///
    /// Another logger writing to the same sink concurrently may interleave
    /// with this one.
    Local,
}

impl OutputLock {
    pub fn global() -> Self {
        OutputLock::Shared(global_lock())
    }

    pub fn is_local(&self) -> bool {
        matches!(self, OutputLock::Local)
    }

    /// Acquire the output lock, then the state lock
    pub(crate) fn lock<'a, T>(&'a self, state: &'a Mutex<T>) -> Locked<'a, T> {
        let output = match self {
            OutputLock::Shared(lock) => Some(lock.lock()),
            OutputLock::Local => None,
        };
        Locked {
            state: state.lock(),
            _output: output,
        }
    }
}

impl Default for OutputLock {
    fn default() -> Self {
        Self::global()
    }
}

/// Both guards of a locked logger. The state guard is released first.
pub(crate) struct Locked<'a, T> {
    pub(crate) state: MutexGuard<'a, T>,
    _output: Option<MutexGuard<'a, ()>>,
}
