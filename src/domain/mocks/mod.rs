use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::entities::ScheduleRecord;
use super::offset::Clock;

pub use ports::*;

pub mod ports;

pub fn wall(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

/// Winter instant: Eastern is UTC-5 and Pacific is UTC-8.
pub fn mock_now() -> DateTime<Utc> {
    wall(2024, 3, 1, 12, 0).and_utc()
}

pub fn mock_record_without_timezone() -> ScheduleRecord {
    ScheduleRecord::new("2024-03-01T10:00:00", None)
}

pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn new() -> Self {
        Self(mock_now())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
