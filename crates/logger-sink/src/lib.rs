#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logger-sink/src/lib.rs
//!
//! # Overview
//!
//! `logger-sink` provides the write targets that loggers emit their formatted
//! lines into. A sink receives one fully rendered line (including its trailing
//! newline) per call and is responsible for getting it to its destination.
//!
//! # Design
//!
//! The crate exposes the [`Sink`] trait together with [`SharedSink`], an
//! [`Arc`](std::sync::Arc) handle that several loggers can hold at once. A
//! parent logger and every logger derived from it write through the same
//! handle; the sink is never owned exclusively by any of them.
//!
//! # Invariants
//!
//! - Loggers never lock. Each sink serialises its own writes: [`WriterSink`]
//!   and [`MemorySink`] guard their state with a mutex, [`StderrSink`] takes
//!   the stderr lock for the duration of a write.
//! - One [`Sink::write`] call corresponds to one emitted line.
//! - [`ConsoleSink`] strips exactly one trailing `\n` (or `\r\n`) before
//!   handing the line to its callback, matching line-based console APIs that
//!   add their own terminator.
//!
//! # Errors
//!
//! [`Sink::write`] surfaces [`std::io::Error`] values from the underlying
//! writer unchanged. Loggers propagate them to their callers.
//!
//! # Examples
//!
//! Share an in-memory sink between two handles and inspect what was written:
//!
//! ```
//! use logger_sink::{MemorySink, Sink};
//!
//! let sink = MemorySink::new();
//! sink.write("phase one\n")?;
//! sink.write("phase two\n")?;
//!
//! assert_eq!(sink.contents(), "phase one\nphase two\n");
//! assert_eq!(sink.len(), 2);
//! # Ok::<(), std::io::Error>(())
//! ```

mod console;
mod memory;
mod sink;
mod writer;

pub use console::ConsoleSink;
pub use memory::MemorySink;
pub use sink::{SharedSink, Sink, default_sink, shared};
pub use writer::{StderrSink, WriterSink};
