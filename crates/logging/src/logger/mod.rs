//! crates/logging/src/logger/mod.rs
//! The code-based logger: registry, gate, throttle, sinks and history.

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use logging_sink::{FileSink, MessageSink};
use message::{FormatArgs, MessageTemplate, Severity};

use crate::catalog::CatalogDocument;
use crate::config::LoggerConfig;
use crate::entry::Entry;
use crate::error::LogError;
use crate::gate::EmissionGate;
use crate::registry::MessageRegistry;
use crate::summary::Summary;
use crate::throttle::{CodeState, ThrottleDecision, ThrottleTracker, cap_warning_line};
use crate::timestamp::{self, Clock};


/// A logger that only emits messages registered under a code.
///
/// Every call names a code. The logger looks the template up, filters it
/// through the severity and verbosity thresholds, renders it, applies the
/// per-code cap and writes the resulting line to the console and to the log
/// file when one is configured. Each call that passes the thresholds is kept
/// in the history so a [`Summary`] can be produced at the end of a run.
///
/// The console writer defaults to standard output; [`Logger::with_writer`]
/// accepts any [`Write`] implementor.
///
/// ```
/// use logging::{FormatArgs, Logger, LoggerConfig, Severity};
///
/// let config = LoggerConfig::new("build").with_verbosity_threshold(1);
/// let mut logger = Logger::with_writer(config, Vec::<u8>::new())?;
/// logger.add_message("TEST-001", "A test message.", Severity::Info, 1, "Test message: {}")?;
/// logger.log("TEST-001", &FormatArgs::new().with("Hello, World!"))?;
///
/// assert_eq!(
///     logger.entries()[0].output(),
///     "INFO: Test message: Hello, World! (TEST-001)"
/// );
/// # Ok::<(), logging::LogError>(())
/// ```
pub struct Logger<W = io::Stdout> {
    config: LoggerConfig,
    registry: MessageRegistry,
    gate: EmissionGate,
    throttle: ThrottleTracker,
    console: Option<MessageSink<W>>,
    file: Option<FileSink>,
    entries: Vec<Entry>,
    clock: Clock,
}

impl Logger<io::Stdout> {
    /// Creates a logger that prints to standard output.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::OpenSink`] when the configured log file cannot be
    /// created.
    pub fn new(config: LoggerConfig) -> Result<Self, LogError> {
        Self::with_writer(config, io::stdout())
    }
}

impl<W> Logger<W> {
    /// Creates a logger whose console output goes to `writer`.
    ///
    /// The writer is dropped immediately when the console is disabled. A
    /// configured log file is created, or truncated, before this returns.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::OpenSink`] when the log file cannot be created.
    pub fn with_writer(config: LoggerConfig, writer: W) -> Result<Self, LogError> {
        let file = match &config.file_path {
            Some(path) => {
                let sink = FileSink::create(path).map_err(|source| LogError::OpenSink {
                    path: path.clone(),
                    source,
                })?;
                trace_sink!(debug, logger = %config.name, path = %path.display(), "opened log file");
                Some(sink)
            }
            None => None,
        };

        Ok(Self {
            gate: EmissionGate::new(config.severity_threshold, config.verbosity_threshold),
            console: config.enable_console.then(|| MessageSink::new(writer)),
            file,
            registry: MessageRegistry::new(),
            throttle: ThrottleTracker::new(),
            entries: Vec::new(),
            clock: timestamp::now,
            config,
        })
    }

    /// Logger identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Configuration the logger currently runs with.
    #[must_use]
    pub const fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Current severity threshold.
    #[must_use]
    pub const fn severity_threshold(&self) -> Severity {
        self.gate.severity_threshold()
    }

    /// Current verbosity threshold.
    #[must_use]
    pub const fn verbosity_threshold(&self) -> u32 {
        self.gate.verbosity_threshold()
    }

    /// Changes the severity threshold for later calls.
    pub fn set_severity_threshold(&mut self, severity: Severity) {
        self.gate.set_severity_threshold(severity);
        self.config.severity_threshold = severity;
    }

    /// Changes the verbosity threshold for later calls.
    pub fn set_verbosity_threshold(&mut self, verbosity: u32) {
        self.gate.set_verbosity_threshold(verbosity);
        self.config.verbosity_threshold = verbosity;
    }

    /// Changes the per-code cap for later calls.
    ///
    /// Codes that already announced their cap stay announced.
    pub fn set_max_messages_per_code(&mut self, cap: i64) {
        self.config.max_messages_per_code = cap;
    }

    /// Replaces the source of call timestamps.
    pub fn set_clock(&mut self, clock: Clock) {
        self.clock = clock;
    }

    /// Registers a message built from its parts.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::DuplicateCode`] when `code` is taken and
    /// [`LogError::InvalidTemplate`] when `format` is malformed.
    pub fn add_message(
        &mut self,
        code: &str,
        description: &str,
        severity: Severity,
        verbosity: u32,
        format: &str,
    ) -> Result<(), LogError> {
        if self.registry.contains(code) {
            return Err(LogError::DuplicateCode {
                code: code.to_owned(),
            });
        }
        let template = MessageTemplate::new(code, description, severity, verbosity, format)
            .map_err(|source| LogError::InvalidTemplate {
                code: code.to_owned(),
                source,
            })?;
        self.add_template(template)
    }

    /// Registers an already built template.
    pub fn add_template(&mut self, template: MessageTemplate) -> Result<(), LogError> {
        self.registry.register(template).map(|_| ())
    }

    /// Registers templates in order, stopping at the first duplicate.
    ///
    /// Templates registered before the failure stay registered.
    pub fn add_messages<I>(&mut self, templates: I) -> Result<(), LogError>
    where
        I: IntoIterator<Item = MessageTemplate>,
    {
        templates
            .into_iter()
            .try_for_each(|template| self.add_template(template))
    }

    /// Registers every message of a JSON catalogue.
    ///
    /// All formats are validated before anything is registered; registration
    /// then follows [`add_messages`](Self::add_messages).
    pub fn add_messages_from_json(&mut self, json: &str) -> Result<(), LogError> {
        let templates = CatalogDocument::from_json(json)?.into_templates()?;
        trace_registry!(debug, logger = %self.config.name, count = templates.len(), "importing message catalogue");
        self.add_messages(templates)
    }

    /// Registered templates in registration order.
    pub fn messages(&self) -> impl ExactSizeIterator<Item = &MessageTemplate> {
        self.registry.iter()
    }

    /// The template registered under `code`, if any.
    #[must_use]
    pub fn message(&self, code: &str) -> Option<&MessageTemplate> {
        self.registry.get(code)
    }

    /// The registered catalogue as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, LogError> {
        CatalogDocument::new(&self.config.name, self.registry.iter()).to_json()
    }

    /// Every call that passed the thresholds, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Throttle counters for `code`.
    #[must_use]
    pub fn throttle_state(&self, code: &str) -> CodeState {
        self.throttle.state(code)
    }

    /// Aggregated counts over the history.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::from_entries(&self.entries)
    }

    /// The run report produced by [`Summary`]'s `Display` implementation.
    #[must_use]
    pub fn summary_report(&self) -> String {
        self.summary().to_string()
    }

    /// Flushes and closes the log file.
    ///
    /// Dropping the logger closes the file as well, but discards errors.
    pub fn close(mut self) -> Result<(), LogError> {
        self.close_file()
    }

    fn close_file(&mut self) -> Result<(), LogError> {
        match self.file.take() {
            Some(file) => {
                trace_sink!(debug, logger = %self.config.name, lines = file.lines_written(), "closing log file");
                file.close().map_err(LogError::Sink)
            }
            None => Ok(()),
        }
    }
}

impl<W: Write> Logger<W> {
    /// Emits the message registered under `code`.
    ///
    /// A call filtered by the thresholds returns `Ok(())` and leaves no trace.
    /// Otherwise the call is recorded in the history, whether the throttle
    /// let its line through, replaced it with the cap warning or silenced it.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::MissingCode`] for an unregistered code,
    /// [`LogError::Format`] when `args` do not fit the template and
    /// [`LogError::Sink`] when a line cannot be written. The logger state is
    /// unchanged after any error.
    pub fn log(&mut self, code: &str, args: &FormatArgs) -> Result<(), LogError> {
        let template = Arc::clone(self.registry.lookup(code)?);
        if !self.gate.is_eligible(&template) {
            return Ok(());
        }

        let body = template.render(args).map_err(|source| LogError::Format {
            code: code.to_owned(),
            source,
        })?;
        let timestamp = (self.clock)();
        let stamp = self.config.include_timestamp.then_some(timestamp.as_str());
        let output = template.line(&body, stamp);

        let cap = self.config.max_messages_per_code;
        let decision = self.throttle.decide(code, cap);
        match decision {
            ThrottleDecision::Emit => self.dispatch(&output)?,
            ThrottleDecision::Announce => self.dispatch(&cap_warning_line(code, cap, stamp))?,
            ThrottleDecision::Suppress => {}
        }
        self.throttle.commit(code, decision);

        self.entries.push(Entry::new(output, template, timestamp));
        Ok(())
    }

    /// Writes `line` to every configured sink, then reports the first failure.
    fn dispatch(&mut self, line: &str) -> Result<(), LogError> {
        let console = self.console.as_mut().map(|sink| sink.write_line(line));
        let file = self.file.as_mut().map(|sink| sink.write_line(line));
        for result in [console, file].into_iter().flatten() {
            result.map_err(|error| {
                trace_sink!(warn, %error, "failed to write log line");
                LogError::Sink(error)
            })?;
        }
        Ok(())
    }
}

impl<W> Drop for Logger<W> {
    fn drop(&mut self) {
        if let Err(error) = self.close_file() {
            trace_sink!(warn, %error, "failed to close log file");
        }
    }
}

impl<W> fmt::Debug for Logger<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("messages", &self.registry.len())
            .field("entries", &self.entries.len())
            .field("console", &self.console.is_some())
            .field("file", &self.file.is_some())
            .finish_non_exhaustive()
    }
}
