//! crates/message/src/severity.rs
//! Ordered severity levels attached to every registered message.

use std::fmt;
use std::str::FromStr;

/// Severity of a registered message.
///
/// Variants are declared in rank order so the derived [`Ord`] implementation
/// compares by importance: `Debug < Info < Warning < Error < Critical`. Every
/// threshold check in the workspace relies on this ordering.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Severity {
    /// Diagnostic detail useful while developing.
    Debug,
    /// Informational message.
    #[default]
    Info,
    /// Warning message.
    Warning,
    /// Error message.
    Error,
    /// Critical failure.
    Critical,
}

impl Severity {
    /// All severities in ascending rank order.
    ///
    /// Summaries iterate this table so that every level is reported, including
    /// the ones with zero entries.
    pub const ALL: [Self; 5] = [
        Self::Debug,
        Self::Info,
        Self::Warning,
        Self::Error,
        Self::Critical,
    ];

    /// Returns the uppercase label used when rendering the severity.
    ///
    /// # Examples
    ///
    /// ```
    /// use message::Severity;
    ///
    /// assert_eq!(Severity::Info.as_str(), "INFO");
    /// assert_eq!(Severity::Critical.as_str(), "CRITICAL");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    /// Returns the numeric rank of the severity.
    ///
    /// Ranks are spaced by ten so external integrations can map their own
    /// levels in between without renumbering.
    ///
    /// ```
    /// use message::Severity;
    ///
    /// assert!(Severity::Warning.rank() > Severity::Info.rank());
    /// assert_eq!(Severity::Debug.rank(), 10);
    /// ```
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Debug => 10,
            Self::Info => 20,
            Self::Warning => 30,
            Self::Error => 40,
            Self::Critical => 50,
        }
    }

    /// Returns the canonical prefix rendered at the start of a log line.
    ///
    /// ```
    /// use message::Severity;
    ///
    /// assert_eq!(Severity::Error.prefix(), "ERROR: ");
    /// ```
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG: ",
            Self::Info => "INFO: ",
            Self::Warning => "WARNING: ",
            Self::Error => "ERROR: ",
            Self::Critical => "CRITICAL: ",
        }
    }

    /// Reports whether a message of this severity passes `threshold`.
    #[must_use]
    pub fn at_least(self, threshold: Self) -> bool {
        self >= threshold
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Severity`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSeverityError {
    _private: (),
}

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognised message severity")
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(input))
            .ok_or(ParseSeverityError { _private: () })
    }
}
