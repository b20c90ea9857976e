//! crates/logger-sink/src/console.rs
//! Line-based console sink for environments without a stderr stream.

use std::fmt;
use std::io;

use crate::Sink;

type LineFn = dyn Fn(&str) + Send + Sync;

/// Sink that hands each line to a line-oriented console callback.
///
/// Console APIs of this shape terminate every call with their own newline, so
/// the sink removes exactly one trailing `\n` or `\r\n` before invoking the
/// callback. Interior newlines are passed through unchanged.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use logger_sink::{ConsoleSink, Sink};
///
/// let lines = Arc::new(Mutex::new(Vec::new()));
/// let captured = Arc::clone(&lines);
/// let sink = ConsoleSink::new(move |line| captured.lock().unwrap().push(line.to_owned()));
///
/// sink.write("[WARN] low memory\r\n")?;
/// assert_eq!(*lines.lock().unwrap(), vec!["[WARN] low memory".to_owned()]);
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct ConsoleSink {
    line: Box<LineFn>,
}

impl ConsoleSink {
    /// Creates a sink that forwards stripped lines to `line`.
    pub fn new<F>(line: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        Self {
            line: Box::new(line),
        }
    }

    /// Creates a sink that prints each line to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(|line| println!("{line}"))
    }
}

impl fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleSink").finish_non_exhaustive()
    }
}

impl Sink for ConsoleSink {
    fn write(&self, text: &str) -> io::Result<()> {
        (self.line)(strip_line_ending(text));
        Ok(())
    }
}

fn strip_line_ending(text: &str) -> &str {
    text.strip_suffix('\n')
        .map_or(text, |rest| rest.strip_suffix('\r').unwrap_or(rest))
}
