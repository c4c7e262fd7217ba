//! crates/logging/src/throttle.rs
//! Per-code volume control.
//!
//! Every code that passes the emission gate is counted. While the count of
//! earlier calls is below the cap the message renders normally. The first
//! call at or past the cap renders a one-time warning instead, and every call
//! after that is silent. Silent calls are still counted and still recorded in
//! the logger's history so summaries reflect the true call volume.

use std::collections::HashMap;

use message::Severity;

use crate::config::UNLIMITED_SENTINEL;

/// Outcome of the throttle check for one call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ThrottleDecision {
    /// Render the formatted message.
    Emit,
    /// Render the cap warning in place of the message.
    Announce,
    /// Produce no visible output.
    Suppress,
}

impl ThrottleDecision {
    /// Reports whether the call produces a visible line.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::Suppress)
    }
}

/// Counter state tracked for a single code.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CodeState {
    /// Accepted calls so far, visible or not.
    pub emitted_count: u64,
    /// Whether the cap warning has been rendered. Never resets.
    pub threshold_announced: bool,
}

/// Tracks call counts per code and decides what each call renders.
#[derive(Clone, Debug, Default)]
pub struct ThrottleTracker {
    states: HashMap<String, CodeState>,
}

impl ThrottleTracker {
    /// Creates a tracker with no recorded calls.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decides the outcome of the next call for `code` without recording it.
    #[must_use]
    pub fn decide(&self, code: &str, cap: i64) -> ThrottleDecision {
        let state = self.state(code);
        if !cap_reached(state.emitted_count, cap) {
            ThrottleDecision::Emit
        } else if state.threshold_announced {
            ThrottleDecision::Suppress
        } else {
            ThrottleDecision::Announce
        }
    }

    /// Records a call for `code` with the outcome returned by [`decide`](Self::decide).
    pub fn commit(&mut self, code: &str, decision: ThrottleDecision) {
        let state = self.states.entry(code.to_owned()).or_default();
        state.emitted_count += 1;
        match decision {
            ThrottleDecision::Announce => {
                state.threshold_announced = true;
                trace_throttle!(debug, code, count = state.emitted_count, "message cap reached");
            }
            ThrottleDecision::Suppress => {
                trace_throttle!(trace, code, count = state.emitted_count, "message suppressed");
            }
            ThrottleDecision::Emit => {}
        }
    }

    /// Decides and records a call in one step.
    pub fn record(&mut self, code: &str, cap: i64) -> ThrottleDecision {
        let decision = self.decide(code, cap);
        self.commit(code, decision);
        decision
    }

    /// Current state for `code`; unseen codes report the zero state.
    #[must_use]
    pub fn state(&self, code: &str) -> CodeState {
        self.states.get(code).copied().unwrap_or_default()
    }

    /// Codes that have reached their cap, in no particular order.
    pub fn capped_codes(&self) -> impl Iterator<Item = &str> {
        self.states
            .iter()
            .filter(|(_, state)| state.threshold_announced)
            .map(|(code, _)| code.as_str())
    }
}

/// Reports whether `count` earlier calls exhaust `cap`.
///
/// [`UNLIMITED_SENTINEL`] counts as always reached.
#[must_use]
pub fn cap_reached(count: u64, cap: i64) -> bool {
    cap == UNLIMITED_SENTINEL || i64::try_from(count).map_or(true, |count| count >= cap)
}

/// Builds the one-time warning line announcing that `code` hit its cap.
///
/// ```
/// use logging::cap_warning_line;
///
/// assert_eq!(
///     cap_warning_line("TEST-001", 2, None),
///     "WARNING: Maximum number of messages (2) reached for code TEST-001."
/// );
/// ```
#[must_use]
pub fn cap_warning_line(code: &str, cap: i64, timestamp: Option<&str>) -> String {
    let prefix = Severity::Warning.prefix();
    match timestamp {
        Some(stamp) => {
            format!("{stamp} - {prefix}Maximum number of messages ({cap}) reached for code {code}.")
        }
        None => format!("{prefix}Maximum number of messages ({cap}) reached for code {code}."),
    }
}
