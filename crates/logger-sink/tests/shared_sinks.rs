//! Integration tests for sinks shared between several writers.
//!
//! Loggers hold sinks behind `SharedSink` handles and write from whichever
//! thread they live on. Each write must arrive as one intact entry.

use std::sync::{Arc, Mutex};
use std::thread;

use logger_sink::{ConsoleSink, MemorySink, SharedSink, Sink, WriterSink, shared};

const THREADS: usize = 8;
const LINES_PER_THREAD: usize = 50;

fn hammer(sink: &SharedSink) {
    thread::scope(|scope| {
        for worker in 0..THREADS {
            let sink = Arc::clone(sink);
            scope.spawn(move || {
                for line in 0..LINES_PER_THREAD {
                    sink.write(&format!("worker {worker} line {line}\n"))
                        .expect("write succeeds");
                }
            });
        }
    });
}

// ============================================================================
// Concurrent Writes
// ============================================================================

/// Verifies concurrent writes to a memory sink are recorded whole.
#[test]
fn memory_sink_keeps_writes_intact() {
    let memory = Arc::new(MemorySink::new());
    let handle: SharedSink = memory.clone();
    hammer(&handle);

    let writes = memory.writes();
    assert_eq!(writes.len(), THREADS * LINES_PER_THREAD);
    assert!(writes.iter().all(|line| line.starts_with("worker ") && line.ends_with('\n')));
}

/// Verifies concurrent writes through a writer sink never interleave.
#[test]
fn writer_sink_never_interleaves_lines() {
    let writer = Arc::new(WriterSink::new(Vec::new()));
    let handle: SharedSink = writer.clone();
    hammer(&handle);

    let bytes = writer.with_writer(|buffer| buffer.clone());
    let text = String::from_utf8(bytes).expect("utf-8 output");
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), THREADS * LINES_PER_THREAD);
    for line in lines {
        let mut parts = line.split(' ');
        assert_eq!(parts.next(), Some("worker"));
        assert!(parts.next().is_some_and(|n| n.parse::<usize>().is_ok()));
        assert_eq!(parts.next(), Some("line"));
        assert!(parts.next().is_some_and(|n| n.parse::<usize>().is_ok()));
        assert_eq!(parts.next(), None);
    }
}

// ============================================================================
// Handles
// ============================================================================

/// Verifies every clone of a shared handle reaches the same sink.
#[test]
fn cloned_handles_share_state() {
    let memory = Arc::new(MemorySink::new());
    let first: SharedSink = memory.clone();
    let second = Arc::clone(&first);

    first.write("a\n").expect("write succeeds");
    second.write("b\n").expect("write succeeds");

    assert_eq!(memory.contents(), "a\nb\n");
}

/// Verifies color support is visible through shared handles.
#[test]
fn color_support_survives_sharing() {
    let plain = shared(MemorySink::new());
    let colored = shared(WriterSink::new(Vec::new()).with_color(true));

    assert!(!plain.supports_color());
    assert!(colored.supports_color());
}

/// Verifies console sinks hand their callback the line without its terminator.
#[test]
fn console_sink_through_shared_handle() {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&lines);
    let console = shared(ConsoleSink::new(move |line: &str| {
        recorded.lock().expect("lock").push(line.to_owned());
    }));

    console.write("[WARN] one\n").expect("write succeeds");
    console.write("two\r\n").expect("write succeeds");
    console.write("three").expect("write succeeds");

    assert_eq!(*lines.lock().expect("lock"), vec!["[WARN] one", "two", "three"]);
}
