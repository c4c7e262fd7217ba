//! crates/logging/src/config.rs
//! Construction options for a [`Logger`](crate::Logger).

use std::path::{Path, PathBuf};

use message::Severity;
use serde::{Deserialize, Serialize};

use crate::error::LogError;

/// Per-code cap applied when none is configured.
pub const DEFAULT_MAX_MESSAGES_PER_CODE: i64 = 100;

/// Cap value documented as "unlimited".
///
/// The throttle treats this sentinel as a cap that is always reached: no call
/// for the code ever renders normally. The first call renders the cap warning
/// (`Maximum number of messages (-1) reached for code ...`) and every later
/// call is silent, though all of them are still recorded in the history.
pub const UNLIMITED_SENTINEL: i64 = -1;

/// Options recognised when building a logger.
///
/// Only `name` is required; every other field has a default, both when the
/// value is built with [`LoggerConfig::new`] and when it is deserialized.
///
/// ```
/// use logging::LoggerConfig;
/// use message::Severity;
///
/// let config = LoggerConfig::new("build")
///     .with_verbosity_threshold(2)
///     .with_severity_threshold(Severity::Warning)
///     .with_max_messages_per_code(10);
///
/// assert_eq!(config.name, "build");
/// assert!(config.enable_console);
/// assert!(config.file_path.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Logger identifier.
    pub name: String,
    /// Messages below this severity are never emitted.
    #[serde(default)]
    pub severity_threshold: Severity,
    /// Messages whose minimum verbosity exceeds this value are never emitted.
    #[serde(default)]
    pub verbosity_threshold: u32,
    /// Optional log file, created (or truncated) at construction.
    #[serde(default)]
    pub file_path: Option<PathBuf>,
    /// Whether lines are written to the console.
    #[serde(default = "default_enable_console")]
    pub enable_console: bool,
    /// Whether lines are prefixed with the call's timestamp.
    #[serde(default)]
    pub include_timestamp: bool,
    /// Number of normally rendered lines per code; see [`UNLIMITED_SENTINEL`].
    #[serde(default = "default_max_messages_per_code")]
    pub max_messages_per_code: i64,
}

const fn default_enable_console() -> bool {
    true
}

const fn default_max_messages_per_code() -> i64 {
    DEFAULT_MAX_MESSAGES_PER_CODE
}

impl LoggerConfig {
    /// Creates a configuration with default options for the logger `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            severity_threshold: Severity::Info,
            verbosity_threshold: 0,
            file_path: None,
            enable_console: default_enable_console(),
            include_timestamp: false,
            max_messages_per_code: DEFAULT_MAX_MESSAGES_PER_CODE,
        }
    }

    /// Parses a configuration from JSON.
    ///
    /// ```
    /// use logging::LoggerConfig;
    ///
    /// let config = LoggerConfig::from_json(r#"{"name": "ci", "include_timestamp": true}"#)?;
    /// assert_eq!(config.name, "ci");
    /// assert!(config.include_timestamp);
    /// assert_eq!(config.max_messages_per_code, 100);
    /// # Ok::<(), logging::LogError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self, LogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the severity threshold.
    pub fn with_severity_threshold(mut self, severity: Severity) -> Self {
        self.severity_threshold = severity;
        self
    }

    /// Sets the verbosity threshold.
    pub fn with_verbosity_threshold(mut self, verbosity: u32) -> Self {
        self.verbosity_threshold = verbosity;
        self
    }

    /// Routes lines to `path` in addition to the console.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.file_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Enables or disables console output.
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.enable_console = enabled;
        self
    }

    /// Enables or disables timestamp prefixes.
    pub fn with_timestamp(mut self, enabled: bool) -> Self {
        self.include_timestamp = enabled;
        self
    }

    /// Sets the per-code cap.
    pub fn with_max_messages_per_code(mut self, cap: i64) -> Self {
        self.max_messages_per_code = cap;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_applies_documented_defaults() {
        let config = LoggerConfig::new("TestLogger");
        assert_eq!(config.severity_threshold, Severity::Info);
        assert_eq!(config.verbosity_threshold, 0);
        assert_eq!(config.file_path, None);
        assert!(config.enable_console);
        assert!(!config.include_timestamp);
        assert_eq!(config.max_messages_per_code, 100);
    }

    #[test]
    fn deserialized_defaults_match_new() {
        let parsed = LoggerConfig::from_json(r#"{"name": "TestLogger"}"#).expect("parse");
        assert_eq!(parsed, LoggerConfig::new("TestLogger"));
    }

    #[test]
    fn json_overrides_every_field() {
        let parsed = LoggerConfig::from_json(
            r#"{
                "name": "full",
                "severity_threshold": "ERROR",
                "verbosity_threshold": 3,
                "file_path": "/tmp/full.log",
                "enable_console": false,
                "include_timestamp": true,
                "max_messages_per_code": -1
            }"#,
        )
        .expect("parse");

        let expected = LoggerConfig::new("full")
            .with_severity_threshold(Severity::Error)
            .with_verbosity_threshold(3)
            .with_file("/tmp/full.log")
            .with_console(false)
            .with_timestamp(true)
            .with_max_messages_per_code(UNLIMITED_SENTINEL);
        assert_eq!(parsed, expected);
    }

    #[test]
    fn name_is_required() {
        assert!(matches!(
            LoggerConfig::from_json("{}"),
            Err(LogError::Catalog(_))
        ));
    }

    #[test]
    fn round_trips_through_json() {
        let config = LoggerConfig::new("rt").with_timestamp(true);
        let json = serde_json::to_string(&config).expect("serialize");
        assert_eq!(LoggerConfig::from_json(&json).expect("parse"), config);
    }
}
