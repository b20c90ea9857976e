//! crates/logger/src/logger.rs
//! The leveled, labelable logger.

use std::borrow::Cow;
use std::fmt;
use std::io;
use std::sync::Arc;

use logger_sink::{SharedSink, Sink, default_sink};

use crate::config::{ColorMode, LoggerConfig};
use crate::format::{Arg, format};
use crate::level::{Level, LevelSpec, Threshold, parse_level};
use crate::message::Message;
use crate::observer::{LevelObserver, Observers, SubscriptionId};
use crate::style::{LABEL_COLOR, colorize, tag_color};

/// Filters messages by severity and writes them, tagged and labelled, to a sink.
///
/// Each emitted line has the shape `[TAG] label message`, where the tag is
/// omitted for `info`, the label is omitted when unset, and the segments are
/// joined by single spaces. The sink receives the line plus one trailing
/// newline in a single write.
///
/// Loggers derived with [`label`](Self::label) share the sink and copy the
/// threshold at derivation time; later threshold changes on either side stay
/// local to that logger.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use leveled_logger::{Arg, ColorMode, Logger, LoggerConfig};
/// use logger_sink::MemorySink;
///
/// let sink = Arc::new(MemorySink::new());
/// let mut logger = Logger::with_config(
///     None,
///     LoggerConfig::default().sink(sink.clone()).color(ColorMode::Never),
/// );
/// logger.set_log_level("warn");
///
/// logger.info("not shown", &[])?;
/// logger.warn("disk %d%% full", &[Arg::from(93)])?;
/// logger.label("cache").error("evicted %s", &[Arg::from("key-7")])?;
///
/// assert_eq!(sink.writes(), vec!["[WARN] disk 93% full\n", "[ERROR] cache evicted key-7\n"]);
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct Logger {
    threshold: Threshold,
    label: Option<String>,
    sink: SharedSink,
    color: ColorMode,
    observers: Observers,
}

impl Logger {
    /// Creates an unlabelled logger with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(None, LoggerConfig::default())
    }

    /// Creates a labelled logger with the default configuration.
    #[must_use]
    pub fn with_label(label: &str) -> Self {
        Self::with_config(Some(label), LoggerConfig::default())
    }

    /// Creates a logger from an explicit configuration.
    ///
    /// The threshold starts at the configuration's default threshold. An
    /// explicit level, when configured, is then applied as if by
    /// [`set_log_level`](Self::set_log_level).
    #[must_use]
    pub fn with_config(label: Option<&str>, config: LoggerConfig) -> Self {
        let (sink, log_level, default_threshold, color) = config.into_parts();
        let mut logger = Self {
            threshold: default_threshold,
            label: label.map(str::to_owned),
            sink: sink.unwrap_or_else(default_sink),
            color,
            observers: Observers::default(),
        };
        if let Some(level) = log_level {
            logger.set_log_level(level);
        }
        logger
    }

    /// Creates an unlabelled logger that writes to `sink`.
    pub fn to_sink<S>(sink: S) -> Self
    where
        S: Sink + 'static,
    {
        Self::with_config(None, LoggerConfig::from_sink(sink))
    }

    /// Derives from `parent` when one is given, otherwise builds a new logger
    /// from `config`.
    ///
    /// A derived logger takes `label` when given and keeps the parent's label
    /// otherwise. Either way the result is a new logger, never the parent
    /// itself: it shares the parent's sink, starts from a copy of its
    /// threshold, and has no level-change observers.
    #[must_use]
    pub fn inherit_or_new(parent: Option<&Self>, label: Option<&str>, config: LoggerConfig) -> Self {
        match parent {
            Some(parent) => {
                let label = label.map(str::to_owned).or_else(|| parent.label.clone());
                parent.derive(label)
            }
            None => Self::with_config(label, config),
        }
    }

    /// Returns a new logger labelled `name` that shares this logger's sink.
    ///
    /// The threshold and color mode are copied; level-change observers are
    /// not carried over.
    #[must_use]
    pub fn label(&self, name: impl Into<String>) -> Self {
        self.derive(Some(name.into()))
    }

    fn derive(&self, label: Option<String>) -> Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "leveled_logger",
            parent_label = self.label.as_deref().unwrap_or_default(),
            label = label.as_deref().unwrap_or_default(),
            threshold = %self.threshold,
            "derived logger"
        );

        Self {
            threshold: self.threshold,
            label,
            sink: Arc::clone(&self.sink),
            color: self.color,
            observers: Observers::default(),
        }
    }

    /// This logger's label.
    #[must_use]
    pub fn label_name(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The sink this logger writes to.
    #[must_use]
    pub fn sink(&self) -> &SharedSink {
        &self.sink
    }

    /// The current threshold.
    #[must_use]
    pub fn log_level(&self) -> Threshold {
        self.threshold
    }

    /// Sets the threshold and notifies every level-change observer.
    ///
    /// Unrecognised names and `NaN` ranks silence the logger.
    pub fn set_log_level<'a>(&mut self, level: impl Into<LevelSpec<'a>>) -> &mut Self {
        self.threshold = parse_level(level, Threshold::SILENT);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "leveled_logger",
            label = self.label.as_deref().unwrap_or_default(),
            threshold = %self.threshold,
            "log level changed"
        );

        self.observers.notify(self.threshold);
        self
    }

    /// Registers `observer` to receive every new threshold.
    pub fn on_level_change<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: LevelObserver + 'static,
    {
        self.observers.subscribe(Box::new(observer))
    }

    /// Removes a previously registered observer. Returns whether it was found.
    pub fn remove_observer(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Reports whether messages at `level` would be written.
    pub fn at_level<'a>(&self, level: impl Into<LevelSpec<'a>>) -> bool {
        self.threshold >= Threshold::parse(level)
    }

    /// Formats `template` with `args` and writes the result, regardless of
    /// the threshold.
    pub fn print(&self, template: &str, args: &[Arg<'_>]) -> io::Result<&Self> {
        let mut line = format(template, args);
        line.push('\n');
        self.sink.write(&line)?;
        Ok(self)
    }

    /// Logs at [`Level::Debug`].
    pub fn debug<'a>(&self, message: impl Into<Message<'a>>, args: &[Arg<'a>]) -> io::Result<&Self> {
        self.log_at(Level::Debug, message, args)
    }

    /// Logs at [`Level::Info`]. Info lines carry no tag.
    pub fn info<'a>(&self, message: impl Into<Message<'a>>, args: &[Arg<'a>]) -> io::Result<&Self> {
        self.log_at(Level::Info, message, args)
    }

    /// Alias for [`info`](Self::info).
    pub fn log<'a>(&self, message: impl Into<Message<'a>>, args: &[Arg<'a>]) -> io::Result<&Self> {
        self.info(message, args)
    }

    /// Logs at [`Level::Warn`].
    pub fn warn<'a>(&self, message: impl Into<Message<'a>>, args: &[Arg<'a>]) -> io::Result<&Self> {
        self.log_at(Level::Warn, message, args)
    }

    /// Logs at [`Level::Error`].
    pub fn error<'a>(&self, message: impl Into<Message<'a>>, args: &[Arg<'a>]) -> io::Result<&Self> {
        self.log_at(Level::Error, message, args)
    }

    /// Logs `message` at `level`.
    ///
    /// Nothing is formatted or written when `level` is above the threshold.
    /// Error messages render their source chain when debug output is enabled.
    /// A message that is neither text nor an error becomes the first
    /// interpolation argument of an empty body.
    pub fn log_at<'a>(
        &self,
        level: Level,
        message: impl Into<Message<'a>>,
        args: &[Arg<'a>],
    ) -> io::Result<&Self> {
        if !self.at_level(level) {
            return Ok(self);
        }

        let message: Message<'a> = message.into();
        let (body, leading) = message.into_parts(self.at_level(Level::Debug));
        let args: Cow<'_, [Arg<'a>]> = match leading {
            Some(leading) => {
                let mut all = Vec::with_capacity(args.len() + 1);
                all.push(leading);
                all.extend_from_slice(args);
                Cow::Owned(all)
            }
            None => Cow::Borrowed(args),
        };

        let color = self.color.enabled_for(&*self.sink);
        let prefix = tag_color(level).map(|tag| colorize(level.tag(), tag, color));
        let label = self
            .label
            .as_deref()
            .filter(|label| !label.is_empty())
            .map(|label| colorize(label, LABEL_COLOR, color));

        let line = [prefix.as_deref(), label.as_deref(), Some(body.as_ref())]
            .into_iter()
            .flatten()
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        self.print(&line, &args)
    }

    /// Captures this logger and `level` so the pair can be passed around as a
    /// single logging function.
    #[must_use]
    pub fn bound(&self, level: Level) -> BoundLevel<'_> {
        BoundLevel {
            logger: self,
            level,
        }
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
            .field("threshold", &self.threshold)
            .field("label", &self.label)
            .field("color", &self.color)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

/// A logger paired with a fixed level, callable like a logging function.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use leveled_logger::{BoundLevel, ColorMode, Level, Logger, LoggerConfig};
/// use logger_sink::MemorySink;
///
/// fn report(log: BoundLevel<'_>, failures: usize) -> std::io::Result<()> {
///     log.call(format!("{failures} checks failed"), &[])?;
///     Ok(())
/// }
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = Logger::with_config(None, LoggerConfig::default().sink(sink.clone()).color(ColorMode::Never));
/// report(logger.bound(Level::Warn), 2)?;
///
/// assert_eq!(sink.contents(), "[WARN] 2 checks failed\n");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Copy, Clone, Debug)]
pub struct BoundLevel<'l> {
    logger: &'l Logger,
    level: Level,
}

impl<'l> BoundLevel<'l> {
    /// Logs `message` at the bound level.
    pub fn call<'a>(&self, message: impl Into<Message<'a>>, args: &[Arg<'a>]) -> io::Result<&'l Logger> {
        self.logger.log_at(self.level, message, args)
    }

    /// The bound level.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// The bound logger.
    #[must_use]
    pub const fn logger(&self) -> &'l Logger {
        self.logger
    }
}
