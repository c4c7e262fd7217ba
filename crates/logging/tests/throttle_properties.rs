//! Property tests for per-code throttling.

use logging::{FormatArgs, Logger, LoggerConfig, Severity, ThrottleDecision, ThrottleTracker};
use proptest::prelude::*;
use test_support::SharedBuffer;

proptest! {
    #[test]
    fn visible_lines_never_exceed_cap_plus_warning(cap in 0i64..8, calls in 0usize..32) {
        let mut tracker = ThrottleTracker::new();
        let decisions: Vec<_> = (0..calls).map(|_| tracker.record("P", cap)).collect();

        let emitted = decisions.iter().filter(|d| **d == ThrottleDecision::Emit).count();
        let announced = decisions.iter().filter(|d| **d == ThrottleDecision::Announce).count();
        let expected_emitted = calls.min(cap as usize);

        prop_assert_eq!(emitted, expected_emitted);
        prop_assert_eq!(announced, usize::from(calls > expected_emitted));
        prop_assert_eq!(tracker.state("P").emitted_count, calls as u64);
    }

    #[test]
    fn announce_precedes_every_suppression(cap in -1i64..6, calls in 1usize..24) {
        let mut tracker = ThrottleTracker::new();
        let decisions: Vec<_> = (0..calls).map(|_| tracker.record("P", cap)).collect();

        if let Some(first_hidden) = decisions.iter().position(|d| !matches!(d, ThrottleDecision::Emit)) {
            prop_assert_eq!(decisions[first_hidden], ThrottleDecision::Announce);
            prop_assert!(decisions[first_hidden + 1..]
                .iter()
                .all(|d| *d == ThrottleDecision::Suppress));
        }
    }

    #[test]
    fn logger_records_every_eligible_call(cap in 0i64..5, calls in 0usize..16) {
        let console = SharedBuffer::new();
        let config = LoggerConfig::new("prop").with_max_messages_per_code(cap);
        let mut logger = Logger::with_writer(config, console.clone()).expect("logger");
        logger.add_message("P", "", Severity::Info, 0, "{}").expect("register");

        for i in 0..calls {
            logger.log("P", &FormatArgs::new().with(i)).expect("log");
        }

        let visible = console.lines().len();
        let expected = calls.min(cap as usize) + usize::from(calls > cap as usize);
        prop_assert_eq!(visible, expected);
        prop_assert_eq!(logger.entries().len(), calls);
        prop_assert_eq!(logger.summary().total(), calls);
    }
}
