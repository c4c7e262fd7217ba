//! crates/logging/src/entry.rs
//! History records kept for every call that passes the thresholds.

use std::sync::Arc;

use message::{MessageTemplate, Severity};

/// One accepted call in a logger's history.
///
/// The output is always the canonical line of the call, even when the
/// throttle replaced it with the cap warning or suppressed it entirely.
#[derive(Clone, Debug)]
pub struct Entry {
    output: String,
    template: Arc<MessageTemplate>,
    timestamp: String,
}

impl Entry {
    pub(crate) fn new(output: String, template: Arc<MessageTemplate>, timestamp: String) -> Self {
        Self {
            output,
            template,
            timestamp,
        }
    }

    /// The canonical line the call rendered.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// The template that produced the entry.
    #[must_use]
    pub fn template(&self) -> &MessageTemplate {
        &self.template
    }

    /// Code of the producing template.
    #[must_use]
    pub fn code(&self) -> &str {
        self.template.code()
    }

    /// Severity of the producing template.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.template.severity()
    }

    /// When the call was made.
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}
