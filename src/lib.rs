#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `codelog` is code-based templated logging. Applications register every
//! message they can print under a unique code, log by code, and get
//! consistent lines, per-code volume control and an end-of-run summary.
//!
//! This crate re-exports the public API of the workspace members:
//!
//! - [`message`] for severities, typed arguments and templates;
//! - [`logging`] for the logger, its configuration and summaries;
//! - [`logging_sink`] for the line-oriented writers behind the logger.
//!
//! # Examples
//!
//! ```
//! use codelog::{Logger, LoggerConfig, Severity, log_code};
//!
//! let mut logger = Logger::with_writer(LoggerConfig::new("build"), Vec::<u8>::new())?;
//! logger.add_message("BLD-001", "Build step finished.", Severity::Info, 0, "{step} took {secs:.2f}s")?;
//!
//! log_code!(logger, "BLD-001"; step = "compile", secs = 1.5)?;
//!
//! assert_eq!(
//!     logger.entries()[0].output(),
//!     "INFO: compile took 1.50s (BLD-001)"
//! );
//! # Ok::<(), codelog::LogError>(())
//! ```

pub use logging::{
    CatalogDocument, CatalogRecord, Clock, CodeState, CodeSummary, DEFAULT_MAX_MESSAGES_PER_CODE,
    EmissionGate, Entry, LogError, Logger, LoggerConfig, MessageRegistry, Summary,
    ThrottleDecision, ThrottleTracker, UNLIMITED_SENTINEL, log_code,
};
pub use logging_sink::{FileSink, MessageSink};
pub use message::{
    FormatArgs, FormatError, FormatTemplate, MessageTemplate, ParseSeverityError, Severity, Value,
};

pub use logging;
pub use logging_sink;
pub use message;
