#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the line sinks a codelog logger routes its output
//! through. A sink is deliberately thin: it receives a fully rendered line,
//! writes it followed by `\n`, and flushes.
//!
//! # Design
//!
//! The crate exposes [`MessageSink`], a lightweight wrapper around an
//! [`std::io::Write`] implementor, and the [`FileSink`] alias for sinks backed
//! by a log file. Consoles are modelled as a `MessageSink` over standard output
//! (or any writer a test wants to capture).
//!
//! # Invariants
//!
//! - Every successful [`MessageSink::write_line`] writes exactly one `\n`
//!   after the line and flushes the writer.
//! - [`FileSink::create`] truncates an existing file.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values originating from the
//! underlying writer unchanged.
//!
//! # Examples
//!
//! ```
//! use logging_sink::MessageSink;
//!
//! let mut buffer = Vec::new();
//! let mut sink = MessageSink::new(&mut buffer);
//! sink.write_line("INFO: Test message: Hello (TEST-001)")?;
//! assert_eq!(sink.lines_written(), 1);
//! drop(sink);
//!
//! assert_eq!(buffer, b"INFO: Test message: Hello (TEST-001)\n");
//! # Ok::<(), std::io::Error>(())
//! ```

mod sink;

pub use sink::{FileSink, MessageSink};
