//! crates/logger-sink/src/sink.rs
//! The write-target abstraction shared by every logger.

use std::io;
use std::sync::Arc;

/// A destination for rendered log lines.
///
/// Implementations receive the complete line, trailing newline included, and
/// must serialise concurrent writes themselves. The trait is object safe so
/// loggers can hold any sink behind a [`SharedSink`].
///
/// # Examples
///
/// ```
/// use std::io;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use logger_sink::Sink;
///
/// #[derive(Default)]
/// struct Counting(AtomicUsize);
///
/// impl Sink for Counting {
///     fn write(&self, _text: &str) -> io::Result<()> {
///         self.0.fetch_add(1, Ordering::Relaxed);
///         Ok(())
///     }
/// }
///
/// let sink = Counting::default();
/// sink.write("ready\n")?;
/// assert_eq!(sink.0.load(Ordering::Relaxed), 1);
/// # Ok::<(), io::Error>(())
/// ```
pub trait Sink: Send + Sync {
    /// Writes `text` to the destination.
    fn write(&self, text: &str) -> io::Result<()>;

    /// Reports whether the destination renders ANSI color sequences.
    ///
    /// Loggers configured with automatic color selection consult this before
    /// styling severity tags and labels. The default is `false`.
    fn supports_color(&self) -> bool {
        false
    }
}

/// Reference-counted handle to a sink shared between loggers.
pub type SharedSink = Arc<dyn Sink>;

impl<S> Sink for Arc<S>
where
    S: Sink + ?Sized,
{
    fn write(&self, text: &str) -> io::Result<()> {
        (**self).write(text)
    }

    fn supports_color(&self) -> bool {
        (**self).supports_color()
    }
}

impl<S> Sink for Box<S>
where
    S: Sink + ?Sized,
{
    fn write(&self, text: &str) -> io::Result<()> {
        (**self).write(text)
    }

    fn supports_color(&self) -> bool {
        (**self).supports_color()
    }
}

/// Wraps `sink` in a [`SharedSink`] handle.
#[must_use]
pub fn shared<S>(sink: S) -> SharedSink
where
    S: Sink + 'static,
{
    Arc::new(sink)
}

/// Returns the sink loggers use when none is configured.
///
/// Native targets write to the process's standard error stream. On `wasm`
/// targets, where no stderr stream is available, lines go through a
/// line-based console writer instead.
#[must_use]
pub fn default_sink() -> SharedSink {
    #[cfg(not(target_family = "wasm"))]
    {
        shared(crate::StderrSink::new())
    }

    #[cfg(target_family = "wasm")]
    {
        shared(crate::ConsoleSink::stdout())
    }
}
