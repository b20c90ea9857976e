//! crates/logger/src/config.rs
//! Construction-time configuration for loggers.

use std::env;
use std::fmt;
use std::sync::Arc;

use logger_sink::{SharedSink, Sink};

use crate::{Level, LevelSpec, ParseLevelError, Threshold, parse_level};

/// Environment variable consulted by [`LoggerConfig::from_env`].
///
/// The name carries no application prefix. Applications that namespace their
/// variables (for example `MYAPP_LOGLEVEL`) pass their own name to
/// [`LoggerConfig::from_env_var`].
pub const LOG_LEVEL_ENV: &str = "LOGLEVEL";

/// Whether severity tags and labels are styled with ANSI colors.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorMode {
    /// Style output when the sink reports color support.
    #[default]
    Auto,
    /// Always emit escape sequences.
    Always,
    /// Never emit escape sequences.
    Never,
}

impl ColorMode {
    /// Resolves the mode against a concrete sink.
    #[must_use]
    pub fn enabled_for(self, sink: &dyn Sink) -> bool {
        match self {
            Self::Auto => sink.supports_color(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Options recognised when constructing a [`Logger`](crate::Logger).
///
/// The environment-derived default threshold is not read implicitly: call
/// [`LoggerConfig::from_env`] once at startup and pass the resulting
/// configuration (or clones of it) to every logger that should honour it.
///
/// # Examples
///
/// ```
/// use leveled_logger::{ColorMode, Level, Logger, LoggerConfig};
/// use logger_sink::MemorySink;
///
/// let config = LoggerConfig::from_sink(MemorySink::new())
///     .log_level(Level::Debug)
///     .color(ColorMode::Never);
/// let logger = Logger::with_config(Some("db"), config);
///
/// assert!(logger.at_level("debug"));
/// assert_eq!(logger.label_name(), Some("db"));
/// ```
#[derive(Clone)]
pub struct LoggerConfig {
    sink: Option<SharedSink>,
    log_level: Option<Threshold>,
    default_threshold: Threshold,
    color: ColorMode,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            sink: None,
            log_level: None,
            default_threshold: Threshold::from(Level::Info),
            color: ColorMode::Auto,
        }
    }
}

impl LoggerConfig {
    /// Configuration whose default threshold comes from [`LOG_LEVEL_ENV`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_var(LOG_LEVEL_ENV)
    }

    /// Configuration whose default threshold comes from the variable `name`.
    #[must_use]
    pub fn from_env_var(name: &str) -> Self {
        let value = env::var(name).ok();
        Self::default().default_threshold(default_threshold_from(value.as_deref()))
    }

    /// Normalises a bare sink into a configuration that writes to it.
    pub fn from_sink<S>(sink: S) -> Self
    where
        S: Sink + 'static,
    {
        Self::default().sink(Arc::new(sink))
    }

    /// Overrides the sink.
    #[must_use]
    pub fn sink(mut self, sink: SharedSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Sets the initial level, parsed the way
    /// [`Logger::set_log_level`](crate::Logger::set_log_level) parses it.
    #[must_use]
    pub fn log_level<'a>(mut self, level: impl Into<LevelSpec<'a>>) -> Self {
        self.log_level = Some(parse_level(level, Threshold::SILENT));
        self
    }

    /// Sets the threshold used when no explicit level is configured.
    #[must_use]
    pub fn default_threshold(mut self, threshold: Threshold) -> Self {
        self.default_threshold = threshold;
        self
    }

    /// Sets the color mode.
    #[must_use]
    pub fn color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// Configured sink override, if any.
    #[must_use]
    pub fn sink_override(&self) -> Option<&SharedSink> {
        self.sink.as_ref()
    }

    /// Configured initial level, if any.
    #[must_use]
    pub fn initial_level(&self) -> Option<Threshold> {
        self.log_level
    }

    /// Threshold used when no explicit level is configured.
    #[must_use]
    pub fn fallback_threshold(&self) -> Threshold {
        self.default_threshold
    }

    /// Configured color mode.
    #[must_use]
    pub fn color_mode(&self) -> ColorMode {
        self.color
    }

    pub(crate) fn into_parts(self) -> (Option<SharedSink>, Option<Threshold>, Threshold, ColorMode) {
        (self.sink, self.log_level, self.default_threshold, self.color)
    }
}

impl<S> From<S> for LoggerConfig
where
    S: Sink + 'static,
{
    fn from(sink: S) -> Self {
        Self::from_sink(sink)
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("sink", &self.sink.as_ref().map(|_| "<sink>"))
            .field("log_level", &self.log_level)
            .field("default_threshold", &self.default_threshold)
            .field("color", &self.color)
            .finish()
    }
}

/// Interprets an environment value as the default threshold.
///
/// Accepts a level name in any case or a numeric rank. Anything else,
/// including an absent value, yields `info`.
///
/// # Examples
///
/// ```
/// use leveled_logger::{Level, Threshold, default_threshold_from};
///
/// assert_eq!(default_threshold_from(Some("debug")), Threshold::from(Level::Debug));
/// assert_eq!(default_threshold_from(Some("0")), Threshold::from(Level::Error));
/// assert_eq!(default_threshold_from(Some("loud")), Threshold::from(Level::Info));
/// assert_eq!(default_threshold_from(None), Threshold::from(Level::Info));
/// ```
#[must_use]
pub fn default_threshold_from(value: Option<&str>) -> Threshold {
    let fallback = Threshold::from(Level::Info);
    let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) else {
        return fallback;
    };

    match value.parse::<Level>() {
        Ok(level) => Threshold::from(level),
        Err(ParseLevelError::OutOfRange(rank)) => {
            Threshold::from_rank(i32::try_from(rank).unwrap_or(if rank < 0 { i32::MIN } else { i32::MAX }))
        }
        // Fractional ranks such as "2.5" still count as numbers.
        Err(ParseLevelError::Unknown(_)) => value
            .parse::<f64>()
            .map_or(fallback, |rank| parse_level(rank, fallback)),
    }
}

#[cfg(test)]
mod tests;
