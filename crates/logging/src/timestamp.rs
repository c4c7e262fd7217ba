//! crates/logging/src/timestamp.rs
//! Call timestamps in `YYYY-MM-DDTHH:MM:SS±HHMM` form.

use time::OffsetDateTime;
use time::macros::format_description;

/// Source of call timestamps.
pub type Clock = fn() -> String;

/// Current local time, falling back to UTC when the local offset is unknown.
///
/// The local offset cannot be determined in every environment (some
/// platforms refuse to read it once several threads are running), so the
/// offset printed may be `+0000`.
pub fn now() -> String {
    format(OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc()))
}

/// Formats `moment` with the timestamp layout used in log lines.
pub fn format(moment: OffsetDateTime) -> String {
    moment
        .format(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory][offset_minute]"
        ))
        .unwrap_or_else(|_| moment.unix_timestamp().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn formats_with_offset() {
        assert_eq!(
            format(datetime!(2024-03-09 07:05:01 +02:00)),
            "2024-03-09T07:05:01+0200"
        );
        assert_eq!(
            format(datetime!(1999-12-31 23:59:59 -05:30)),
            "1999-12-31T23:59:59-0530"
        );
    }

    #[test]
    fn now_has_expected_shape() {
        let stamp = now();
        assert_eq!(stamp.len(), "2024-03-09T07:05:01+0200".len());
        assert_eq!(&stamp[10..11], "T");
        assert!(matches!(&stamp[19..20], "+" | "-"));
    }
}
