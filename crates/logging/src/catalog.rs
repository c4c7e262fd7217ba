//! crates/logging/src/catalog.rs
//! JSON import and export of registered message templates.
//!
//! A catalogue is the complete list of messages a logger can produce:
//!
//! ```json
//! {
//!   "name": "build",
//!   "messages": [
//!     {
//!       "code": "TEST-001",
//!       "description": "A test message.",
//!       "level": "INFO",
//!       "verbosity": 1,
//!       "format": "Test message: {}"
//!     }
//!   ]
//! }
//! ```

use message::{FormatTemplate, MessageTemplate, Severity};
use serde::{Deserialize, Serialize};

use crate::error::LogError;

/// One message in a catalogue document.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    /// Unique message code.
    pub code: String,
    /// Human readable purpose of the message.
    #[serde(default)]
    pub description: String,
    /// Severity of the message.
    #[serde(default)]
    pub level: Severity,
    /// Minimum verbosity required for emission.
    #[serde(default)]
    pub verbosity: u32,
    /// Raw format template.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    FormatTemplate::default().as_str().to_owned()
}

impl CatalogRecord {
    /// Captures a registered template.
    #[must_use]
    pub fn from_template(template: &MessageTemplate) -> Self {
        Self {
            code: template.code().to_owned(),
            description: template.description().to_owned(),
            level: template.severity(),
            verbosity: template.min_verbosity(),
            format: template.format().as_str().to_owned(),
        }
    }

    /// Builds the template described by the record.
    pub fn into_template(self) -> Result<MessageTemplate, LogError> {
        MessageTemplate::new(
            self.code.as_str(),
            self.description,
            self.level,
            self.verbosity,
            &self.format,
        )
        .map_err(|source| LogError::InvalidTemplate {
            code: self.code,
            source,
        })
    }
}

/// A named list of message records.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Name of the logger the catalogue was exported from.
    #[serde(default)]
    pub name: String,
    /// Records in registration order.
    #[serde(default)]
    pub messages: Vec<CatalogRecord>,
}

impl CatalogDocument {
    /// Captures `templates` under `name`.
    pub fn new<'a>(name: &str, templates: impl IntoIterator<Item = &'a MessageTemplate>) -> Self {
        Self {
            name: name.to_owned(),
            messages: templates
                .into_iter()
                .map(CatalogRecord::from_template)
                .collect(),
        }
    }

    /// Parses a document from JSON.
    pub fn from_json(json: &str) -> Result<Self, LogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pretty-printed JSON form of the document.
    pub fn to_json(&self) -> Result<String, LogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds every template, failing on the first malformed format.
    ///
    /// Nothing is returned unless all records are valid.
    pub fn into_templates(self) -> Result<Vec<MessageTemplate>, LogError> {
        self.messages
            .into_iter()
            .map(CatalogRecord::into_template)
            .collect()
    }
}
