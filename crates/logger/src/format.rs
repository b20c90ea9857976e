//! crates/logger/src/format.rs
//! printf-style interpolation of log arguments into a template.

use std::borrow::Cow;
use std::fmt::{self, Write as _};

/// A value interpolated into a log template.
///
/// Strings stay raw, numbers keep their numeric form so `%d` and `%f` can
/// reinterpret them, and anything else is carried as its pre-rendered
/// [`Debug`](fmt::Debug) text.
#[derive(Clone, Debug, PartialEq)]
pub enum Arg<'a> {
    /// Text, rendered without quotes.
    Text(Cow<'a, str>),
    /// Signed integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// Pre-rendered `{:?}` output of an arbitrary value.
    Debug(String),
}

impl Arg<'_> {
    /// Captures the [`Debug`](fmt::Debug) rendering of `value`.
    pub fn debug<T>(value: &T) -> Self
    where
        T: fmt::Debug + ?Sized,
    {
        Self::Debug(format!("{value:?}"))
    }

    /// Converts into an owned argument with no borrowed data.
    #[must_use]
    pub fn into_owned(self) -> Arg<'static> {
        match self {
            Arg::Text(text) => Arg::Text(Cow::Owned(text.into_owned())),
            Arg::Int(value) => Arg::Int(value),
            Arg::Float(value) => Arg::Float(value),
            Arg::Bool(value) => Arg::Bool(value),
            Arg::Debug(text) => Arg::Debug(text),
        }
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            Self::Bool(value) => Some(f64::from(u8::from(*value))),
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    Some(0.0)
                } else {
                    trimmed.parse().ok()
                }
            }
            Self::Debug(_) => None,
        }
    }

    fn write_integer(&self, out: &mut String) {
        match self.as_number() {
            Some(number) if number.is_finite() => {
                let _ = write!(out, "{}", number.trunc() as i64);
            }
            Some(number) => write_float(out, number),
            None => out.push_str("NaN"),
        }
    }

    fn write_float(&self, out: &mut String) {
        match self.as_number() {
            Some(number) => write_float(out, number),
            None => out.push_str("NaN"),
        }
    }

    fn write_debug(&self, out: &mut String) {
        match self {
            Self::Text(text) => {
                let _ = write!(out, "{:?}", text.as_ref());
            }
            other => {
                let _ = write!(out, "{other}");
            }
        }
    }

    fn write_json(&self, out: &mut String) {
        match self {
            Self::Text(text) => match serde_json::to_string(text.as_ref()) {
                Ok(json) => out.push_str(&json),
                Err(_) => out.push_str("undefined"),
            },
            Self::Float(value) if !value.is_finite() => out.push_str("null"),
            other => {
                let _ = write!(out, "{other}");
            }
        }
    }
}

fn write_float(out: &mut String, number: f64) {
    if number.is_nan() {
        out.push_str("NaN");
    } else if number.is_infinite() {
        out.push_str(if number > 0.0 { "Infinity" } else { "-Infinity" });
    } else {
        let _ = write!(out, "{number}");
    }
}

impl fmt::Display for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => {
                let mut out = String::new();
                write_float(&mut out, *value);
                f.write_str(&out)
            }
            Self::Bool(value) => write!(f, "{value}"),
            Self::Debug(text) => f.write_str(text),
        }
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl From<String> for Arg<'_> {
    fn from(text: String) -> Self {
        Self::Text(Cow::Owned(text))
    }
}

impl<'a> From<Cow<'a, str>> for Arg<'a> {
    fn from(text: Cow<'a, str>) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for Arg<'_> {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for Arg<'_> {
    fn from(value: char) -> Self {
        Self::Text(Cow::Owned(value.to_string()))
    }
}

impl From<f32> for Arg<'_> {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Arg<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

macro_rules! int_args {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Arg<'_> {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

int_args!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Arg<'_> {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or_else(|_| Self::Float(value as f64), Self::Int)
    }
}

impl From<usize> for Arg<'_> {
    fn from(value: usize) -> Self {
        i64::try_from(value).map_or_else(|_| Self::Float(value as f64), Self::Int)
    }
}

/// Interpolates `args` into `template`.
///
/// Recognised directives: `%s` (text form), `%d` and `%i` (integer), `%f`
/// (float), `%j` (JSON), `%o` and `%O` (debug form) and `%%` (a literal
/// percent sign). A directive with no argument left, or an unknown directive,
/// is copied verbatim. Arguments not consumed by a directive are appended,
/// each preceded by a single space.
///
/// With no arguments at all the template is returned untouched, so `%%`
/// stays `%%` there.
///
/// # Examples
///
/// ```
/// use leveled_logger::{Arg, format};
///
/// let line = format("copied %d files to %s", &[Arg::from(3), Arg::from("/tmp")]);
/// assert_eq!(line, "copied 3 files to /tmp");
///
/// let line = format("done", &[Arg::from(true), Arg::from(1.5)]);
/// assert_eq!(line, "done true 1.5");
///
/// assert_eq!(format("100%% done", &[]), "100%% done");
/// ```
#[must_use]
pub fn format(template: &str, args: &[Arg<'_>]) -> String {
    if args.is_empty() {
        return template.to_owned();
    }

    let mut out = String::with_capacity(template.len());
    let mut remaining = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }

        let Some(&directive) = chars.peek() else {
            out.push('%');
            break;
        };

        match directive {
            '%' => {
                chars.next();
                out.push('%');
            }
            's' | 'd' | 'i' | 'f' | 'j' | 'o' | 'O' => {
                chars.next();
                let Some(arg) = remaining.next() else {
                    out.push('%');
                    out.push(directive);
                    continue;
                };
                match directive {
                    'd' | 'i' => arg.write_integer(&mut out),
                    'f' => arg.write_float(&mut out),
                    'j' => arg.write_json(&mut out),
                    'o' | 'O' => arg.write_debug(&mut out),
                    _ => {
                        let _ = write!(out, "{arg}");
                    }
                }
            }
            _ => out.push('%'),
        }
    }

    for arg in remaining {
        let _ = write!(out, " {arg}");
    }

    out
}
