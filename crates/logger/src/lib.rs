#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `leveled_logger` is a synchronous, human-readable console logger. A
//! [`Logger`] holds a severity [`Threshold`], an optional label, and a shared
//! [`Sink`](logger_sink::Sink). Messages at or below the threshold are
//! rendered as `[TAG] label message` and written to the sink with a trailing
//! newline; everything else is dropped before any formatting happens.
//!
//! # Design
//!
//! - Severities are the four ranked [`Level`]s `error < warn < info < debug`.
//!   Callers may name them in any case or pass numeric ranks; [`parse_level`]
//!   resolves both and never fails.
//! - [`Logger::label`] derives a child that shares the sink and copies the
//!   threshold. Changing either logger's level afterwards leaves the other
//!   untouched.
//! - Configuration is explicit. [`LoggerConfig::from_env`] reads the
//!   [`LOG_LEVEL_ENV`] variable once; nothing consults the environment
//!   behind the caller's back.
//! - Level changes are published to [`LevelObserver`]s registered with
//!   [`Logger::on_level_change`].
//! - Messages are interpolated with printf-style directives by [`format`].
//!
//! # Output
//!
//! | Level   | Tag       | Color  |
//! |---------|-----------|--------|
//! | `error` | `[ERROR]` | red    |
//! | `warn`  | `[WARN]`  | yellow |
//! | `info`  | none      | none   |
//! | `debug` | `[DEBUG]` | cyan   |
//!
//! Labels are rendered in magenta. Colors are applied according to the
//! logger's [`ColorMode`].
//!
//! # Errors
//!
//! Malformed severities degrade to a default instead of failing. The only
//! error a logging call returns is the [`std::io::Error`] raised by the sink.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use leveled_logger::{ColorMode, Logger, LoggerConfig, Threshold};
//! use logger_sink::MemorySink;
//!
//! let sink = Arc::new(MemorySink::new());
//! let mut app = Logger::with_config(None, LoggerConfig::default().sink(sink.clone()).color(ColorMode::Never));
//! let db = app.label("db");
//!
//! app.set_log_level("error");
//! app.warn("dropped", &[])?;
//! db.warn("slow query", &[])?;
//!
//! assert_eq!(sink.writes(), vec!["[WARN] db slow query\n"]);
//! assert_eq!(db.log_level(), Threshold::default());
//! # Ok::<(), std::io::Error>(())
//! ```

mod config;
mod format;
mod level;
mod logger;
mod macros;
mod message;
mod observer;
mod style;

pub use config::{ColorMode, LOG_LEVEL_ENV, LoggerConfig, default_threshold_from};
pub use format::{Arg, format};
pub use level::{Level, LevelSpec, ParseLevelError, Threshold, parse_level};
pub use logger::{BoundLevel, Logger};
pub use message::Message;
pub use observer::{LevelObserver, SubscriptionId};
