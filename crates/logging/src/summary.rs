//! crates/logging/src/summary.rs
//! Aggregated counts over a logger's history.

use std::collections::HashMap;
use std::fmt;

use message::Severity;

use crate::entry::Entry;

/// Number of entries recorded for one code.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CodeSummary {
    /// The message code.
    pub code: String,
    /// Raw format template of the first entry seen for the code.
    pub format: String,
    /// Entries recorded for the code.
    pub count: usize,
}

/// Per-severity and per-code counts for a logger's history.
///
/// The [`Display`](fmt::Display) implementation produces the run report:
///
/// ```text
/// Message summary:
///   DEBUG = 0
///   INFO = 2
///   WARNING = 0
///   ERROR = 0
///   CRITICAL = 0
///
/// Message codes:
///   TEST-001: Test message: {} = 2
/// ```
///
/// The report has no trailing newline.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    severities: [usize; Severity::ALL.len()],
    codes: Vec<CodeSummary>,
}

impl Summary {
    /// Aggregates `entries` in order.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Self {
        let mut summary = Self::default();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for entry in entries {
            summary.severities[severity_slot(entry.severity())] += 1;
            match positions.get(entry.code()) {
                Some(&position) => summary.codes[position].count += 1,
                None => {
                    positions.insert(entry.code(), summary.codes.len());
                    summary.codes.push(CodeSummary {
                        code: entry.code().to_owned(),
                        format: entry.template().format().as_str().to_owned(),
                        count: 1,
                    });
                }
            }
        }

        summary
    }

    /// Entries recorded at `severity`.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.severities[severity_slot(severity)]
    }

    /// Counts for every severity, lowest first, zeros included.
    pub fn severity_counts(&self) -> impl ExactSizeIterator<Item = (Severity, usize)> + '_ {
        Severity::ALL.into_iter().zip(self.severities.iter().copied())
    }

    /// Per-code counts in first-encountered order.
    #[must_use]
    pub fn codes(&self) -> &[CodeSummary] {
        &self.codes
    }

    /// Total number of entries.
    #[must_use]
    pub fn total(&self) -> usize {
        self.severities.iter().sum()
    }
}

fn severity_slot(severity: Severity) -> usize {
    Severity::ALL
        .iter()
        .position(|candidate| *candidate == severity)
        .unwrap_or_default()
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Message summary:")?;
        for (severity, count) in self.severity_counts() {
            write!(f, "\n  {severity} = {count}")?;
        }
        f.write_str("\n\nMessage codes:")?;
        for code in &self.codes {
            write!(f, "\n  {}: {} = {}", code.code, code.format, code.count)?;
        }
        Ok(())
    }
}
