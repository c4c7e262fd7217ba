#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` implements code-based templated logging. Every message a
//! program can print is registered up front under a unique code together
//! with its severity, the verbosity it requires and a format template. Call
//! sites then log by code, which keeps output consistent and lets the whole
//! catalogue be exported, reviewed and counted.
//!
//! # Design
//!
//! A [`Logger`] owns the pieces that decide what a call produces:
//!
//! - [`MessageRegistry`] maps codes to immutable
//!   [`MessageTemplate`]s.
//! - [`EmissionGate`] filters calls by severity and verbosity thresholds.
//! - [`ThrottleTracker`] caps the number of normally rendered lines per code,
//!   replacing the first call past the cap with a one-time warning and
//!   silencing the rest.
//! - [`Summary`] aggregates the recorded [`Entry`] history into per-severity
//!   and per-code counts.
//!
//! Lines are written through [`logging_sink::MessageSink`] to the console and,
//! optionally, a log file that is flushed after every line and closed when the
//! logger is closed or dropped.
//!
//! # Invariants
//!
//! - A call is recorded exactly when it passes the thresholds and its line
//!   could be dispatched; the recorded output is always the canonical line.
//! - Per code, at most one cap warning is ever written.
//! - Errors leave the logger unchanged.
//!
//! # Diagnostics
//!
//! The crate reports its own activity through `tracing` under the
//! `codelog::registry`, `codelog::throttle` and `codelog::sink` targets. No
//! subscriber is installed.
//!
//! # Examples
//!
//! ```
//! use logging::{FormatArgs, Logger, LoggerConfig, Severity};
//!
//! let config = LoggerConfig::new("build")
//!     .with_verbosity_threshold(1)
//!     .with_max_messages_per_code(2);
//! let mut logger = Logger::with_writer(config, Vec::<u8>::new())?;
//! logger.add_message("TEST-001", "A test message.", Severity::Info, 1, "Test message: {}")?;
//!
//! for i in 0..5 {
//!     logger.log("TEST-001", &FormatArgs::new().with(i))?;
//! }
//!
//! assert_eq!(logger.entries().len(), 5);
//! assert!(logger.throttle_state("TEST-001").threshold_announced);
//! assert!(logger.summary_report().ends_with("TEST-001: Test message: {} = 5"));
//! # Ok::<(), logging::LogError>(())
//! ```

#[macro_use]
mod tracing_macros;

mod catalog;
mod config;
mod entry;
mod error;
mod gate;
mod logger;
mod macros;
mod registry;
mod summary;
mod throttle;
mod timestamp;

pub use catalog::{CatalogDocument, CatalogRecord};
pub use config::{DEFAULT_MAX_MESSAGES_PER_CODE, LoggerConfig, UNLIMITED_SENTINEL};
pub use entry::Entry;
pub use error::LogError;
pub use gate::EmissionGate;
pub use logger::Logger;
pub use message::{FormatArgs, FormatError, MessageTemplate, Severity, Value};
pub use registry::MessageRegistry;
pub use summary::{CodeSummary, Summary};
pub use throttle::{CodeState, ThrottleDecision, ThrottleTracker, cap_reached, cap_warning_line};
pub use timestamp::{Clock, format as format_timestamp, now as timestamp_now};
