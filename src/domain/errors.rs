use std::fmt::Display;

use super::timezone::UnknownTimezone;

#[derive(Debug, PartialEq, Clone)]
pub enum ScheduleError {
    InvalidDate(String),
    UnknownTimezone(String),
}

impl Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::InvalidDate(date) => write!(f, "invalid schedule date: {}", date),
            ScheduleError::UnknownTimezone(zone) => write!(f, "unknown timezone: {}", zone),
        }
    }
}

impl From<UnknownTimezone> for ScheduleError {
    fn from(value: UnknownTimezone) -> Self {
        ScheduleError::UnknownTimezone(value.0)
    }
}
