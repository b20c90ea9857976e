//! crates/logger/src/message.rs
//! The leading value of a log call and how it is turned into text.

use std::borrow::Cow;
use std::error::Error;
use std::fmt::Write as _;

use crate::Arg;

/// The first value passed to a severity method.
///
/// Text becomes the message body. Errors are rendered with their full source
/// chain when debug output is enabled and with their [`Display`] form
/// otherwise. Any other value is not a message at all: it is moved to the
/// front of the interpolation arguments and the body is left empty.
///
/// [`Display`]: std::fmt::Display
#[derive(Clone, Debug)]
pub enum Message<'a> {
    /// Message text, possibly containing format directives.
    Text(Cow<'a, str>),
    /// An error value.
    Error(&'a (dyn Error + 'static)),
    /// A value that is neither text nor an error.
    Value(Arg<'a>),
}

impl<'a> Message<'a> {
    /// Wraps an error value.
    pub fn error<E>(error: &'a E) -> Self
    where
        E: Error + 'static,
    {
        Self::Error(error)
    }

    /// Wraps a non-text value.
    pub fn value(arg: impl Into<Arg<'a>>) -> Self {
        Self::Value(arg.into())
    }

    /// Resolves the message into body text plus an optional leading argument.
    pub(crate) fn into_parts(self, with_trace: bool) -> (Cow<'a, str>, Option<Arg<'a>>) {
        match self {
            Self::Text(text) => (text, None),
            Self::Error(error) if with_trace => (Cow::Owned(error_trace(error)), None),
            Self::Error(error) => (Cow::Owned(error.to_string()), None),
            Self::Value(arg) => (Cow::Borrowed(""), Some(arg)),
        }
    }
}

/// Renders `error` followed by one indented `caused by:` line per source.
pub(crate) fn error_trace(error: &(dyn Error + 'static)) -> String {
    let mut out = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let _ = write!(out, "\n    caused by: {cause}");
        source = cause.source();
    }
    out
}

impl<'a> From<&'a str> for Message<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for Message<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl From<String> for Message<'_> {
    fn from(text: String) -> Self {
        Self::Text(Cow::Owned(text))
    }
}

impl<'a> From<Cow<'a, str>> for Message<'a> {
    fn from(text: Cow<'a, str>) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a (dyn Error + 'static)> for Message<'a> {
    fn from(error: &'a (dyn Error + 'static)) -> Self {
        Self::Error(error)
    }
}

impl<'a> From<&'a (dyn Error + Send + Sync + 'static)> for Message<'a> {
    fn from(error: &'a (dyn Error + Send + Sync + 'static)) -> Self {
        Self::Error(error)
    }
}

impl<'a> From<Arg<'a>> for Message<'a> {
    fn from(arg: Arg<'a>) -> Self {
        match arg {
            Arg::Text(text) => Self::Text(text),
            other => Self::Value(other),
        }
    }
}

macro_rules! value_messages {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Message<'_> {
                fn from(value: $ty) -> Self {
                    Self::Value(Arg::from(value))
                }
            }
        )*
    };
}

value_messages!(bool, i32, i64, u32, u64, usize, f64);
