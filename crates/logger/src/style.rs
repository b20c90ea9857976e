//! crates/logger/src/style.rs
//! ANSI styling for severity tags and labels.

use anstyle::{AnsiColor, Color, Style};

use crate::Level;

/// Color used for logger labels.
pub(crate) const LABEL_COLOR: AnsiColor = AnsiColor::Magenta;

/// Tag color for `level`, or `None` for levels rendered without a tag.
pub(crate) const fn tag_color(level: Level) -> Option<AnsiColor> {
    match level {
        Level::Debug => Some(AnsiColor::Cyan),
        Level::Warn => Some(AnsiColor::Yellow),
        Level::Error => Some(AnsiColor::Red),
        Level::Info => None,
    }
}

/// Wraps `text` in the escape sequences for `color`, or returns it unchanged
/// when styling is disabled.
pub(crate) fn colorize(text: &str, color: AnsiColor, enabled: bool) -> String {
    if !enabled {
        return text.to_owned();
    }
    let style = Style::new().fg_color(Some(Color::Ansi(color)));
    format!("{style}{text}{style:#}")
}
