use chrono::{DateTime, Offset, TimeZone, Utc};

use super::timezone::TimeZoneLabel;

/// Source of the current instant used to resolve zone offsets.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Seconds east of UTC for `zone` at `at`.
pub fn utc_offset(zone: TimeZoneLabel, at: DateTime<Utc>) -> i32 {
    zone.tz()
        .offset_from_utc_datetime(&at.naive_utc())
        .fix()
        .local_minus_utc()
}

/// Whole hours to add to a wall clock in `source` to read it in `target`.
///
/// Offsets are taken at `now`, not at the instant being converted, so a
/// schedule on the other side of a DST change is shifted by today's offset.
pub fn hour_offset(target: TimeZoneLabel, source: TimeZoneLabel, now: DateTime<Utc>) -> i64 {
    let seconds = utc_offset(target, now) - utc_offset(source, now);
    i64::from(seconds / 3600)
}
