//! crates/logger/src/macros.rs
//! Variadic front-ends for the severity methods.
//!
//! Each macro converts its trailing arguments with [`Arg::from`](crate::Arg)
//! and forwards them, so call sites read like a printf call:
//!
//! ```
//! use std::sync::Arc;
//! use leveled_logger::{ColorMode, Logger, LoggerConfig, log_warn};
//! use logger_sink::MemorySink;
//!
//! let sink = Arc::new(MemorySink::new());
//! let logger = Logger::with_config(None, LoggerConfig::default().sink(sink.clone()).color(ColorMode::Never));
//!
//! log_warn!(logger, "retrying %s in %ds", "upload", 5)?;
//! assert_eq!(sink.contents(), "[WARN] retrying upload in 5s\n");
//! # Ok::<(), std::io::Error>(())
//! ```

/// Logs at error level: `log_error!(logger, message, args...)`.
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $message:expr $(, $arg:expr)* $(,)?) => {
        $logger.error($message, &[$($crate::Arg::from($arg)),*])
    };
}

/// Logs at warn level: `log_warn!(logger, message, args...)`.
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $message:expr $(, $arg:expr)* $(,)?) => {
        $logger.warn($message, &[$($crate::Arg::from($arg)),*])
    };
}

/// Logs at info level: `log_info!(logger, message, args...)`.
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $message:expr $(, $arg:expr)* $(,)?) => {
        $logger.info($message, &[$($crate::Arg::from($arg)),*])
    };
}

/// Logs at debug level: `log_debug!(logger, message, args...)`.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $message:expr $(, $arg:expr)* $(,)?) => {
        $logger.debug($message, &[$($crate::Arg::from($arg)),*])
    };
}

/// Writes unconditionally: `log_print!(logger, template, args...)`.
#[macro_export]
macro_rules! log_print {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.print($template, &[$($crate::Arg::from($arg)),*])
    };
}
