//! crates/logger-sink/src/writer.rs
//! Sinks backed by [`std::io::Write`] implementors.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use is_terminal::IsTerminal;

use crate::Sink;

/// Sink that forwards each line to an [`io::Write`] target.
///
/// The writer lives behind a mutex so that several loggers sharing the sink
/// cannot interleave partial lines. Every write is followed by a flush, which
/// keeps line-oriented output visible even when `W` buffers internally.
///
/// # Examples
///
/// ```
/// use logger_sink::{Sink, WriterSink};
///
/// let sink = WriterSink::new(Vec::new());
/// sink.write("ready\n")?;
///
/// assert_eq!(sink.into_inner(), b"ready\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct WriterSink<W> {
    writer: Mutex<W>,
    color: bool,
}

impl<W> WriterSink<W> {
    /// Creates a sink that reports no color support.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            color: false,
        }
    }

    /// Sets whether the sink claims to render ANSI colors.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Runs `f` with exclusive access to the underlying writer.
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut writer)
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W> fmt::Debug for WriterSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterSink")
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

impl<W> Sink for WriterSink<W>
where
    W: Write + Send,
{
    fn write(&self, text: &str) -> io::Result<()> {
        self.with_writer(|writer| {
            writer.write_all(text.as_bytes())?;
            writer.flush()
        })
    }

    fn supports_color(&self) -> bool {
        self.color
    }
}

/// Sink that writes to the process's standard error stream.
///
/// Each line is written while holding the stderr lock. Color support follows
/// whether stderr is attached to a terminal.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrSink {
    _private: (),
}

impl StderrSink {
    /// Creates a stderr sink.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl Sink for StderrSink {
    fn write(&self, text: &str) -> io::Result<()> {
        let mut stderr = io::stderr().lock();
        stderr.write_all(text.as_bytes())?;
        stderr.flush()
    }

    fn supports_color(&self) -> bool {
        io::stderr().is_terminal()
    }
}
