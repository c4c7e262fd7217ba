//! crates/logging/src/registry.rs
//! Code-indexed storage for registered message templates.

use std::collections::HashMap;
use std::sync::Arc;

use message::MessageTemplate;

use crate::error::LogError;

/// The templates a logger knows about, keyed by code.
///
/// Templates are kept in registration order and shared through [`Arc`] so
/// that history entries can point at the template that produced them without
/// copying it.
#[derive(Clone, Debug, Default)]
pub struct MessageRegistry {
    templates: Vec<Arc<MessageTemplate>>,
    index: HashMap<String, usize>,
}

impl MessageRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `template`, rejecting a code that is already present.
    ///
    /// The registry is left untouched when registration fails.
    pub fn register(&mut self, template: MessageTemplate) -> Result<&Arc<MessageTemplate>, LogError> {
        if self.index.contains_key(template.code()) {
            return Err(LogError::DuplicateCode {
                code: template.code().to_owned(),
            });
        }

        trace_registry!(
            debug,
            code = template.code(),
            severity = %template.severity(),
            verbosity = template.min_verbosity(),
            "registered message template"
        );

        let position = self.templates.len();
        self.index.insert(template.code().to_owned(), position);
        self.templates.push(Arc::new(template));
        Ok(&self.templates[position])
    }

    /// Returns the template registered under `code`.
    pub fn lookup(&self, code: &str) -> Result<&Arc<MessageTemplate>, LogError> {
        self.index
            .get(code)
            .map(|&position| &self.templates[position])
            .ok_or_else(|| LogError::missing(code))
    }

    /// Returns the template registered under `code`, if any.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&MessageTemplate> {
        self.lookup(code).ok().map(|template| &**template)
    }

    /// Reports whether `code` is registered.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Number of registered templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Reports whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Iterates templates in registration order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &MessageTemplate> {
        self.templates.iter().map(|template| &**template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use message::Severity;

    fn template(code: &str, format: &str) -> MessageTemplate {
        MessageTemplate::new(code, "test", Severity::Info, 0, format).expect("template")
    }

    #[test]
    fn register_then_lookup() {
        let mut registry = MessageRegistry::new();
        registry.register(template("A-1", "{}")).expect("register");

        let found = registry.lookup("A-1").expect("lookup");
        assert_eq!(found.code(), "A-1");
        assert!(registry.contains("A-1"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_code_leaves_registry_unchanged() {
        let mut registry = MessageRegistry::new();
        registry.register(template("A-1", "original {}")).expect("register");

        let error = registry
            .register(template("A-1", "duplicate {}"))
            .expect_err("duplicate must fail");
        assert!(matches!(error, LogError::DuplicateCode { ref code } if code == "A-1"));
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("A-1").map(|t| t.format().as_str()),
            Some("original {}")
        );
    }

    #[test]
    fn lookup_of_unknown_code_fails() {
        let registry = MessageRegistry::new();
        assert!(registry.is_empty());
        assert!(matches!(
            registry.lookup("NOPE"),
            Err(LogError::MissingCode { ref code }) if code == "NOPE"
        ));
        assert!(registry.get("NOPE").is_none());
    }

    #[test]
    fn iteration_follows_registration_order() {
        let mut registry = MessageRegistry::new();
        for code in ["C", "A", "B"] {
            registry.register(template(code, "{}")).expect("register");
        }
        let codes: Vec<_> = registry.iter().map(MessageTemplate::code).collect();
        assert_eq!(codes, vec!["C", "A", "B"]);
    }
}
