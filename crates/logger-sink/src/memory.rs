//! crates/logger-sink/src/memory.rs
//! In-memory sink that keeps every write as a separate entry.

use std::io;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::Sink;

/// Sink that records each write in memory.
///
/// Every call to [`Sink::write`] is stored as its own entry, which makes it
/// easy to assert both on what was written and on how many writes happened.
/// An untouched sink is how tests observe that a filtered message produced no
/// output at all.
///
/// # Examples
///
/// ```
/// use logger_sink::{MemorySink, Sink};
///
/// let sink = MemorySink::new();
/// assert!(sink.is_empty());
///
/// sink.write("[WARN] disk almost full\n")?;
/// assert_eq!(sink.last().as_deref(), Some("[WARN] disk almost full\n"));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    writes: Mutex<Vec<String>>,
    color: bool,
}

impl MemorySink {
    /// Creates an empty sink that reports no color support.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the sink claims to render ANSI colors.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn entries(&self) -> MutexGuard<'_, Vec<String>> {
        // A panic while holding the lock cannot leave a half-pushed entry.
        self.writes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a copy of every recorded write, oldest first.
    #[must_use]
    pub fn writes(&self) -> Vec<String> {
        self.entries().clone()
    }

    /// Returns all recorded writes concatenated.
    #[must_use]
    pub fn contents(&self) -> String {
        self.entries().concat()
    }

    /// Returns the most recent write.
    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.entries().last().cloned()
    }

    /// Number of recorded writes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Reports whether nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Discards every recorded write.
    pub fn clear(&self) {
        self.entries().clear();
    }
}

impl Sink for MemorySink {
    fn write(&self, text: &str) -> io::Result<()> {
        self.entries().push(text.to_owned());
        Ok(())
    }

    fn supports_color(&self) -> bool {
        self.color
    }
}
