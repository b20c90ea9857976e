//! Integration tests for rendered output.
//!
//! These tests pin the exact line layout (`[TAG] label message`), the
//! trailing newline written by `print`, the ANSI styling of tags and labels,
//! and argument interpolation.

use std::sync::Arc;

use leveled_logger::{Arg, ColorMode, Logger, LoggerConfig, log_debug, log_info, log_print};
use logger_sink::{MemorySink, Sink, WriterSink};

const CYAN: &str = "\u{1b}[36m";
const YELLOW: &str = "\u{1b}[33m";
const RED: &str = "\u{1b}[31m";
const MAGENTA: &str = "\u{1b}[35m";
const RESET: &str = "\u{1b}[0m";

fn logger_with(label: Option<&str>, color: ColorMode) -> (Logger, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let mut logger = Logger::with_config(
        label,
        LoggerConfig::default().sink(sink.clone()).color(color),
    );
    logger.set_log_level("debug");
    (logger, sink)
}

fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(ch);
        }
    }
    out
}

// ============================================================================
// Print
// ============================================================================

/// Verifies print writes the text plus exactly one newline.
#[test]
fn print_appends_single_newline() {
    let (logger, sink) = logger_with(None, ColorMode::Never);
    logger.print("foobar", &[]).expect("write succeeds");

    assert_eq!(sink.writes(), vec!["foobar\n"]);
}

/// Verifies print ignores the threshold.
#[test]
fn print_is_unconditional() {
    let (mut logger, sink) = logger_with(None, ColorMode::Never);
    logger.set_log_level("silent");
    logger.print("still here", &[]).expect("write succeeds");

    assert_eq!(sink.contents(), "still here\n");
}

/// Verifies print reaches io::Write-backed sinks byte for byte.
#[test]
fn print_through_writer_sink() {
    let sink = Arc::new(WriterSink::new(Vec::new()));
    let logger = Logger::to_sink(sink.clone());
    log_print!(logger, "%s=%d", "answer", 42).expect("write succeeds");

    let written = sink.with_writer(|buffer| buffer.clone());
    assert_eq!(written, b"answer=42\n".to_vec());
}

/// Verifies calls chain through the returned logger reference.
#[test]
fn calls_chain() {
    let (logger, sink) = logger_with(None, ColorMode::Never);
    logger
        .print("one", &[])
        .and_then(|logger| logger.warn("two", &[]))
        .and_then(|logger| logger.log("three", &[]))
        .expect("writes succeed");

    assert_eq!(sink.contents(), "one\n[WARN] two\nthree\n");
}

// ============================================================================
// Segments
// ============================================================================

/// Verifies the label sits between the tag and the message.
#[test]
fn label_follows_tag() {
    let (logger, sink) = logger_with(Some("http"), ColorMode::Never);

    logger.warn("slow", &[]).expect("write succeeds");
    logger.info("ready", &[]).expect("write succeeds");

    assert_eq!(sink.writes(), vec!["[WARN] http slow\n", "http ready\n"]);
}

/// Verifies an empty message leaves no trailing separator.
#[test]
fn empty_message_drops_its_segment() {
    let (logger, sink) = logger_with(Some("http"), ColorMode::Never);
    logger.error("", &[]).expect("write succeeds");

    assert_eq!(sink.last().as_deref(), Some("[ERROR] http\n"));
}

/// Verifies log is an alias for info.
#[test]
fn log_matches_info() {
    let (logger, sink) = logger_with(Some("a"), ColorMode::Never);
    logger.log("same", &[]).expect("write succeeds");
    logger.info("same", &[]).expect("write succeeds");

    let writes = sink.writes();
    assert_eq!(writes[0], writes[1]);
}

// ============================================================================
// Colors
// ============================================================================

/// Verifies each tag gets its color and info stays untagged.
#[test]
fn tags_are_colorized_per_level() {
    let (logger, sink) = logger_with(None, ColorMode::Always);

    logger.debug("d", &[]).expect("write succeeds");
    logger.info("i", &[]).expect("write succeeds");
    logger.warn("w", &[]).expect("write succeeds");
    logger.error("e", &[]).expect("write succeeds");

    assert_eq!(
        sink.writes(),
        vec![
            format!("{CYAN}[DEBUG]{RESET} d\n"),
            "i\n".to_owned(),
            format!("{YELLOW}[WARN]{RESET} w\n"),
            format!("{RED}[ERROR]{RESET} e\n"),
        ]
    );
}

/// Verifies labels are rendered in magenta.
#[test]
fn label_is_magenta() {
    let (logger, sink) = logger_with(Some("db"), ColorMode::Always);
    logger.info("up", &[]).expect("write succeeds");

    assert_eq!(sink.contents(), format!("{MAGENTA}db{RESET} up\n"));
}

/// Verifies stripping color codes yields the plain layout.
#[test]
fn colored_output_strips_to_plain_output() {
    let (colored, colored_sink) = logger_with(Some("db"), ColorMode::Always);
    let (plain, plain_sink) = logger_with(Some("db"), ColorMode::Never);

    for logger in [&colored, &plain] {
        logger.debug("foobar", &[]).expect("write succeeds");
        logger.warn("foobar", &[]).expect("write succeeds");
    }

    assert_eq!(strip_ansi(&colored_sink.contents()), plain_sink.contents());
}

/// Verifies automatic color selection follows the sink.
#[test]
fn auto_color_asks_the_sink() {
    let capable = Arc::new(MemorySink::new().with_color(true));
    let logger = Logger::with_config(None, LoggerConfig::default().sink(capable.clone()));
    assert!(capable.supports_color());
    logger.error("boom", &[]).expect("write succeeds");
    assert_eq!(capable.contents(), format!("{RED}[ERROR]{RESET} boom\n"));

    let plain = Arc::new(MemorySink::new());
    let logger = Logger::with_config(None, LoggerConfig::default().sink(plain.clone()));
    logger.error("boom", &[]).expect("write succeeds");
    assert_eq!(plain.contents(), "[ERROR] boom\n");
}

// ============================================================================
// Arguments
// ============================================================================

/// Verifies directives in the message consume the extra arguments.
#[test]
fn message_directives_interpolate_args() {
    let (logger, sink) = logger_with(Some("sync"), ColorMode::Never);
    logger
        .warn("%d of %d files skipped", &[Arg::from(3), Arg::from(10)])
        .expect("write succeeds");

    assert_eq!(sink.last().as_deref(), Some("[WARN] sync 3 of 10 files skipped\n"));
}

/// Verifies a message with no arguments is written as given, escapes included.
#[test]
fn message_without_args_is_not_interpolated() {
    let (logger, sink) = logger_with(None, ColorMode::Never);
    logger.print("100%% done", &[]).expect("write succeeds");
    logger.warn("disk 90%% full", &[]).expect("write succeeds");

    assert_eq!(sink.writes(), vec!["100%% done\n", "[WARN] disk 90%% full\n"]);
}

/// Verifies unconsumed arguments are appended with spaces.
#[test]
fn extra_args_are_appended() {
    let (logger, sink) = logger_with(None, ColorMode::Never);
    log_debug!(logger, "values", 1, "two", 3.5, false).expect("write succeeds");

    assert_eq!(sink.last().as_deref(), Some("[DEBUG] values 1 two 3.5 false\n"));
}

/// Verifies the macros accept a trailing comma and no arguments.
#[test]
fn macros_without_args() {
    let (logger, sink) = logger_with(None, ColorMode::Never);
    log_info!(logger, "plain",).expect("write succeeds");

    assert_eq!(sink.last().as_deref(), Some("plain\n"));
}
