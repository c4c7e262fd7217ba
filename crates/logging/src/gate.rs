//! crates/logging/src/gate.rs
//! Severity and verbosity eligibility check.

use message::{MessageTemplate, Severity};

/// Decides whether a template may be emitted at all.
///
/// A template passes when its severity is at least the severity threshold
/// and its minimum verbosity does not exceed the verbosity threshold. Failing
/// either condition silently filters the call; it is not an error.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct EmissionGate {
    severity_threshold: Severity,
    verbosity_threshold: u32,
}

impl EmissionGate {
    /// Creates a gate with the given thresholds.
    #[must_use]
    pub const fn new(severity_threshold: Severity, verbosity_threshold: u32) -> Self {
        Self {
            severity_threshold,
            verbosity_threshold,
        }
    }

    /// Reports whether `template` passes both thresholds.
    #[must_use]
    pub fn is_eligible(&self, template: &MessageTemplate) -> bool {
        template.severity().at_least(self.severity_threshold)
            && template.min_verbosity() <= self.verbosity_threshold
    }

    /// Current severity threshold.
    #[must_use]
    pub const fn severity_threshold(&self) -> Severity {
        self.severity_threshold
    }

    /// Current verbosity threshold.
    #[must_use]
    pub const fn verbosity_threshold(&self) -> u32 {
        self.verbosity_threshold
    }

    pub(crate) fn set_severity_threshold(&mut self, severity: Severity) {
        self.severity_threshold = severity;
    }

    pub(crate) fn set_verbosity_threshold(&mut self, verbosity: u32) {
        self.verbosity_threshold = verbosity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(severity: Severity, verbosity: u32) -> MessageTemplate {
        MessageTemplate::new("G", "", severity, verbosity, "{}").expect("template")
    }

    #[test]
    fn passes_when_both_thresholds_met() {
        let gate = EmissionGate::new(Severity::Info, 1);
        assert!(gate.is_eligible(&template(Severity::Info, 1)));
        assert!(gate.is_eligible(&template(Severity::Critical, 0)));
    }

    #[test]
    fn rejects_low_severity() {
        let gate = EmissionGate::new(Severity::Info, 1);
        assert!(!gate.is_eligible(&template(Severity::Debug, 1)));
    }

    #[test]
    fn rejects_high_verbosity() {
        let gate = EmissionGate::new(Severity::Info, 1);
        assert!(!gate.is_eligible(&template(Severity::Error, 2)));
    }

    #[test]
    fn every_combination_matches_the_rule() {
        for threshold in Severity::ALL {
            for severity in Severity::ALL {
                for verbosity in 0..4 {
                    let gate = EmissionGate::new(threshold, 2);
                    let expected = severity >= threshold && verbosity <= 2;
                    assert_eq!(gate.is_eligible(&template(severity, verbosity)), expected);
                }
            }
        }
    }

    #[test]
    fn default_gate_uses_info_and_zero() {
        let gate = EmissionGate::default();
        assert_eq!(gate.severity_threshold(), Severity::Info);
        assert_eq!(gate.verbosity_threshold(), 0);
    }
}
