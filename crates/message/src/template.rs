//! crates/message/src/template.rs
//! Immutable message registrations.

use std::fmt;

use crate::error::FormatError;
use crate::format::FormatTemplate;
use crate::severity::Severity;
use crate::value::FormatArgs;

/// A message registered under a unique code.
///
/// Templates are immutable once built. The code identifies the message in
/// every rendered line and in run summaries; the minimum verbosity decides how
/// talkative a logger must be configured before the message is emitted.
///
/// ```
/// use message::{FormatArgs, MessageTemplate, Severity};
///
/// let template = MessageTemplate::new(
///     "TEST-001",
///     "A test message.",
///     Severity::Info,
///     1,
///     "Test message: {}",
/// )?;
///
/// assert_eq!(template.code(), "TEST-001");
/// assert_eq!(template.min_verbosity(), 1);
/// assert_eq!(
///     template.render(&FormatArgs::new().with("Hello"))?,
///     "Test message: Hello"
/// );
/// # Ok::<(), message::FormatError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MessageTemplate {
    code: String,
    description: String,
    severity: Severity,
    min_verbosity: u32,
    format: FormatTemplate,
}

impl MessageTemplate {
    /// Builds a template, parsing `format` eagerly.
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
        min_verbosity: u32,
        format: &str,
    ) -> Result<Self, FormatError> {
        Ok(Self::with_format(
            code,
            description,
            severity,
            min_verbosity,
            FormatTemplate::parse(format)?,
        ))
    }

    /// Builds a template from an already parsed format.
    pub fn with_format(
        code: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
        min_verbosity: u32,
        format: FormatTemplate,
    ) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            severity,
            min_verbosity,
            format,
        }
    }

    /// Builds a template that echoes its first argument at verbosity 0.
    pub fn simple(code: impl Into<String>, description: impl Into<String>, severity: Severity) -> Self {
        Self::with_format(code, description, severity, 0, FormatTemplate::default())
    }

    /// Unique code of the message.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable description for catalogues.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Severity of the message.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Minimum logger verbosity required to emit the message.
    #[must_use]
    pub const fn min_verbosity(&self) -> u32 {
        self.min_verbosity
    }

    /// The parsed format template.
    #[must_use]
    pub const fn format(&self) -> &FormatTemplate {
        &self.format
    }

    /// Renders the message body with `args`.
    pub fn render(&self, args: &FormatArgs) -> Result<String, FormatError> {
        self.format.render(args)
    }

    /// Builds the canonical line for an already rendered body.
    ///
    /// ```
    /// use message::{MessageTemplate, Severity};
    ///
    /// let template = MessageTemplate::simple("X", "", Severity::Warning);
    /// assert_eq!(template.line("disk low", None), "WARNING: disk low (X)");
    /// assert_eq!(
    ///     template.line("disk low", Some("2024-01-01T00:00:00+0000")),
    ///     "2024-01-01T00:00:00+0000 - WARNING: disk low (X)"
    /// );
    /// ```
    #[must_use]
    pub fn line(&self, body: &str, timestamp: Option<&str>) -> String {
        let mut line = String::with_capacity(
            timestamp.map_or(0, |stamp| stamp.len() + 3)
                + self.severity.prefix().len()
                + body.len()
                + self.code.len()
                + 3,
        );
        if let Some(stamp) = timestamp {
            line.push_str(stamp);
            line.push_str(" - ");
        }
        line.push_str(self.severity.prefix());
        line.push_str(body);
        line.push_str(" (");
        line.push_str(&self.code);
        line.push(')');
        line
    }
}

impl fmt::Display for MessageTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}, verbosity {}]: {}",
            self.code, self.severity, self.min_verbosity, self.format
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> MessageTemplate {
        MessageTemplate::new(
            "TEST-001",
            "This is a test message.",
            Severity::Info,
            1,
            "Test message: {}",
        )
        .expect("valid template")
    }

    #[test]
    fn accessors_return_registration_fields() {
        let template = template();
        assert_eq!(template.code(), "TEST-001");
        assert_eq!(template.description(), "This is a test message.");
        assert_eq!(template.severity(), Severity::Info);
        assert_eq!(template.min_verbosity(), 1);
        assert_eq!(template.format().as_str(), "Test message: {}");
    }

    #[test]
    fn renders_canonical_line() {
        let template = template();
        let body = template
            .render(&FormatArgs::new().with("Hello, World!"))
            .expect("render");
        assert_eq!(
            template.line(&body, None),
            "INFO: Test message: Hello, World! (TEST-001)"
        );
    }

    #[test]
    fn invalid_format_is_rejected() {
        let result = MessageTemplate::new("BAD", "", Severity::Error, 0, "{oops");
        assert!(matches!(result, Err(FormatError::UnbalancedBrace { .. })));
    }

    #[test]
    fn simple_template_uses_defaults() {
        let template = MessageTemplate::simple("X", "echo", Severity::Debug);
        assert_eq!(template.min_verbosity(), 0);
        assert_eq!(template.format().as_str(), "{}");
        assert_eq!(template.to_string(), "X [DEBUG, verbosity 0]: {}");
    }
}
