// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time handling.

use chrono::{DateTime, Datelike, FixedOffset, Local, SecondsFormat, SubsecRound};

/// Month names indexed by zero-based month number.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Source of creation timestamps for new workouts.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock in the user's local offset, at millisecond precision (the
/// precision timestamps are stored with).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset().trunc_subsecs(3)
    }
}

/// Format a timestamp as "<Month> <day>" in its own offset, e.g. "October 18".
pub fn month_day_label(date: &DateTime<FixedOffset>) -> String {
    format!("{} {}", MONTHS[date.month0() as usize], date.day())
}

/// Format a timestamp as RFC3339, keeping its offset.
pub fn format_rfc3339(date: &DateTime<FixedOffset>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serde adapter storing timestamps as RFC3339 strings with millisecond precision.
pub mod rfc3339 {
    use chrono::{DateTime, FixedOffset};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        date: &DateTime<FixedOffset>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_rfc3339(date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<FixedOffset>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn test_month_day_label() {
        assert_eq!(month_day_label(&parse("2024-01-05T10:00:00Z")), "January 5");
        assert_eq!(
            month_day_label(&parse("2024-12-31T23:59:00+01:00")),
            "December 31"
        );
    }

    #[test]
    fn test_month_day_label_uses_own_offset() {
        // 23:30 UTC on Jan 31 is already Feb 1 in Berlin.
        let berlin = parse("2024-02-01T00:30:00+01:00");
        assert_eq!(month_day_label(&berlin), "February 1");
    }

    #[test]
    fn test_system_clock_has_millisecond_precision() {
        let now = SystemClock.now();
        assert_eq!(now.timestamp_subsec_nanos() % 1_000_000, 0);
    }

    #[test]
    fn test_format_rfc3339_keeps_offset() {
        let date = parse("2024-06-15T08:15:30+02:00");
        assert_eq!(format_rfc3339(&date), "2024-06-15T08:15:30.000+02:00");
    }
}
