//! crates/logging/src/error.rs
//! Error type shared by every fallible logger operation.

use std::io;
use std::path::PathBuf;

use message::FormatError;
use thiserror::Error;

/// Errors surfaced by [`Logger`](crate::Logger) operations.
///
/// Gate ineligibility and throttled suppression are not errors; a call that
/// is filtered out returns `Ok(())`.
#[derive(Debug, Error)]
pub enum LogError {
    /// The code was never registered with this logger.
    #[error("logging code '{code}' is missing.")]
    MissingCode {
        /// The unknown code.
        code: String,
    },
    /// A template with the same code is already registered.
    #[error("logging code '{code}' is already registered.")]
    DuplicateCode {
        /// The conflicting code.
        code: String,
    },
    /// The call's arguments do not satisfy the template's placeholders.
    #[error("cannot format message '{code}': {source}")]
    Format {
        /// Code of the message being rendered.
        code: String,
        /// What went wrong while rendering.
        source: FormatError,
    },
    /// A template's format string is malformed.
    #[error("invalid format template for '{code}': {source}")]
    InvalidTemplate {
        /// Code of the rejected template.
        code: String,
        /// What went wrong while parsing.
        source: FormatError,
    },
    /// The log file could not be created.
    #[error("cannot open log file '{}': {source}", .path.display())]
    OpenSink {
        /// Requested log file path.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// Writing or flushing a sink failed.
    #[error("cannot write log line: {0}")]
    Sink(#[source] io::Error),
    /// A message catalog or configuration document could not be (de)serialized.
    #[error("invalid message catalog: {0}")]
    Catalog(#[from] serde_json::Error),
}

impl LogError {
    /// The message code the error refers to, when there is one.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::MissingCode { code }
            | Self::DuplicateCode { code }
            | Self::Format { code, .. }
            | Self::InvalidTemplate { code, .. } => Some(code.as_str()),
            Self::OpenSink { .. } | Self::Sink(_) | Self::Catalog(_) => None,
        }
    }

    pub(crate) fn missing(code: &str) -> Self {
        Self::MissingCode {
            code: code.to_owned(),
        }
    }
}
