//! crates/logger/src/level.rs
//! Severity levels, thresholds, and the lenient level parser.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Message severity, ordered from least to most verbose.
///
/// The rank of a level is its position in [`Level::ALL`]: `error` is 0 and
/// `debug` is 3. A [`Threshold`] admits every level whose rank is at or below
/// its own.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Level {
    /// Failures.
    Error = 0,
    /// Recoverable problems.
    Warn = 1,
    /// Regular progress output.
    Info = 2,
    /// Diagnostic detail.
    Debug = 3,
}

impl Level {
    /// Every level in rank order.
    pub const ALL: [Self; 4] = [Self::Error, Self::Warn, Self::Info, Self::Debug];

    /// Integer rank of the level.
    #[must_use]
    pub const fn rank(self) -> i32 {
        self as i32
    }

    /// Lowercase level name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Bracketed uppercase tag rendered in front of tagged messages.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Error => "[ERROR]",
            Self::Warn => "[WARN]",
            Self::Info => "[INFO]",
            Self::Debug => "[DEBUG]",
        }
    }

    /// Looks up a level by name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(name))
    }

    /// Looks up a level by rank.
    #[must_use]
    pub const fn from_rank(rank: i32) -> Option<Self> {
        match rank {
            0 => Some(Self::Error),
            1 => Some(Self::Warn),
            2 => Some(Self::Info),
            3 => Some(Self::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned by the strict [`Level`] parser.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseLevelError {
    /// The input was neither a level name nor an integer.
    #[error("unknown log level `{0}`; expected one of error, warn, info, debug")]
    Unknown(String),
    /// The input was an integer outside `0..=3`.
    #[error("log level rank {0} is out of range 0..=3")]
    OutOfRange(i64),
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Accepts a level name in any ASCII case or a decimal rank.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(level) = Self::from_name(trimmed) {
            return Ok(level);
        }

        match trimmed.parse::<i64>() {
            Ok(rank) => i32::try_from(rank)
                .ok()
                .and_then(Self::from_rank)
                .ok_or(ParseLevelError::OutOfRange(rank)),
            Err(_) => Err(ParseLevelError::Unknown(trimmed.to_owned())),
        }
    }
}

/// The verbosity a logger admits, as a severity rank.
///
/// Besides the four level ranks a threshold can hold [`Threshold::SILENT`],
/// which admits nothing, [`Threshold::UNBOUNDED`], which admits everything, or
/// any other integer a caller supplied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Threshold(i32);

impl Threshold {
    /// Ranks below `error`; disables every level.
    pub const SILENT: Self = Self(-1);

    /// Ranks above every level; enables everything.
    pub const UNBOUNDED: Self = Self(i32::MAX);

    /// Wraps a raw rank.
    #[must_use]
    pub const fn from_rank(rank: i32) -> Self {
        Self(rank)
    }

    /// Raw rank.
    #[must_use]
    pub const fn rank(self) -> i32 {
        self.0
    }

    /// The level with exactly this rank, if any.
    #[must_use]
    pub const fn level(self) -> Option<Level> {
        Level::from_rank(self.0)
    }

    /// Reports whether messages at `level` pass this threshold.
    #[must_use]
    pub const fn allows(self, level: Level) -> bool {
        self.0 >= level.rank()
    }

    /// Parses a comparison target, treating unreadable ranks as unbounded.
    ///
    /// Fractional ranks round up, so `threshold >= Threshold::parse(x)` holds
    /// exactly when the threshold rank is at least `x`.
    pub fn parse<'a>(level: impl Into<LevelSpec<'a>>) -> Self {
        match level.into() {
            LevelSpec::Rank(rank) if !rank.is_nan() => Self(rank.ceil() as i32),
            other => parse_level(other, Self::UNBOUNDED),
        }
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::from(Level::Info)
    }
}

impl From<Level> for Threshold {
    fn from(level: Level) -> Self {
        Self(level.rank())
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::SILENT => f.write_str("silent"),
            Self::UNBOUNDED => f.write_str("unbounded"),
            other => match other.level() {
                Some(level) => f.write_str(level.name()),
                None => write!(f, "{}", other.0),
            },
        }
    }
}

/// A severity as supplied by a caller: a level name or a numeric rank.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LevelSpec<'a> {
    /// A level name such as `"warn"`; matched case-insensitively.
    Name(&'a str),
    /// A numeric rank; `NaN` stands for an unreadable value.
    Rank(f64),
}

impl<'a> From<&'a str> for LevelSpec<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl<'a> From<&'a String> for LevelSpec<'a> {
    fn from(name: &'a String) -> Self {
        Self::Name(name)
    }
}

impl From<Level> for LevelSpec<'_> {
    fn from(level: Level) -> Self {
        Self::Rank(f64::from(level.rank()))
    }
}

impl From<Threshold> for LevelSpec<'_> {
    fn from(threshold: Threshold) -> Self {
        Self::Rank(f64::from(threshold.rank()))
    }
}

impl From<i32> for LevelSpec<'_> {
    fn from(rank: i32) -> Self {
        Self::Rank(f64::from(rank))
    }
}

impl From<u8> for LevelSpec<'_> {
    fn from(rank: u8) -> Self {
        Self::Rank(f64::from(rank))
    }
}

impl From<f64> for LevelSpec<'_> {
    fn from(rank: f64) -> Self {
        Self::Rank(rank)
    }
}

/// Resolves a caller-supplied severity into a [`Threshold`].
///
/// Names are matched case-insensitively; a name that matches no level
/// (`"silent"`, `"none"`, a typo) resolves to [`Threshold::SILENT`]. Numeric
/// ranks are used as given, rounded down to a whole rank. A `NaN` rank
/// resolves to `default`. The function never fails.
///
/// # Examples
///
/// ```
/// use leveled_logger::{Level, Threshold, parse_level};
///
/// assert_eq!(parse_level("WARN", Threshold::SILENT), Threshold::from(Level::Warn));
/// assert_eq!(parse_level("silent", Threshold::UNBOUNDED), Threshold::SILENT);
/// assert_eq!(parse_level(f64::NAN, Threshold::UNBOUNDED), Threshold::UNBOUNDED);
/// assert_eq!(parse_level(3, Threshold::SILENT), Threshold::from(Level::Debug));
/// ```
pub fn parse_level<'a>(level: impl Into<LevelSpec<'a>>, default: Threshold) -> Threshold {
    match level.into() {
        LevelSpec::Name(name) => Level::from_name(name).map_or(Threshold::SILENT, Threshold::from),
        LevelSpec::Rank(rank) if rank.is_nan() => default,
        // Float-to-int casts saturate, so infinities land on the i32 bounds.
        LevelSpec::Rank(rank) => Threshold(rank.floor() as i32),
    }
}
