use std::collections::HashMap;
use std::fmt::Display;

use chrono_tz::{America, Pacific, Tz};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Zone used when a schedule record carries no timezone.
pub const DEFAULT_TIMEZONE: TimeZoneLabel = TimeZoneLabel::Eastern;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum TimeZoneLabel {
    Eastern,
    Central,
    Mountain,
    Arizona,
    Pacific,
    Alaska,
    Hawaii,
    Utc,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct TimeZoneOption {
    label: String,
    value: String,
}

static LABELS: Lazy<HashMap<&'static str, TimeZoneLabel>> = Lazy::new(|| {
    let mut labels = HashMap::new();
    for zone in TimeZoneLabel::all() {
        labels.insert(zone.as_str(), zone);
        labels.insert(zone.tz().name(), zone);
    }
    labels
});

impl TimeZoneLabel {
    pub fn all() -> [TimeZoneLabel; 8] {
        [
            TimeZoneLabel::Eastern,
            TimeZoneLabel::Central,
            TimeZoneLabel::Mountain,
            TimeZoneLabel::Arizona,
            TimeZoneLabel::Pacific,
            TimeZoneLabel::Alaska,
            TimeZoneLabel::Hawaii,
            TimeZoneLabel::Utc,
        ]
    }

    pub fn options() -> [TimeZoneOption; 8] {
        TimeZoneLabel::all().map(TimeZoneLabel::option)
    }

    pub fn option(self) -> TimeZoneOption {
        TimeZoneOption {
            label: self.to_string(),
            value: self.into(),
        }
    }

    pub fn tz(&self) -> Tz {
        match self {
            TimeZoneLabel::Eastern => America::New_York,
            TimeZoneLabel::Central => America::Chicago,
            TimeZoneLabel::Mountain => America::Denver,
            TimeZoneLabel::Arizona => America::Phoenix,
            TimeZoneLabel::Pacific => America::Los_Angeles,
            TimeZoneLabel::Alaska => America::Anchorage,
            TimeZoneLabel::Hawaii => Pacific::Honolulu,
            TimeZoneLabel::Utc => Tz::UTC,
        }
    }

    /// Wire label of the zone, as stored in `ScheduleRecord::timezone`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeZoneLabel::Eastern => "Eastern",
            TimeZoneLabel::Central => "Central",
            TimeZoneLabel::Mountain => "Mountain",
            TimeZoneLabel::Arizona => "Arizona",
            TimeZoneLabel::Pacific => "Pacific",
            TimeZoneLabel::Alaska => "Alaska",
            TimeZoneLabel::Hawaii => "Hawaii",
            TimeZoneLabel::Utc => "UTC",
        }
    }

    /// Accepts both the wire label and the IANA identifier of the zone.
    pub fn parse(value: &str) -> Option<TimeZoneLabel> {
        LABELS.get(value.trim()).copied()
    }
}

impl Default for TimeZoneLabel {
    fn default() -> Self {
        DEFAULT_TIMEZONE
    }
}

impl Display for TimeZoneLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let description = match self {
            TimeZoneLabel::Eastern => "Eastern Time (New York)",
            TimeZoneLabel::Central => "Central Time (Chicago)",
            TimeZoneLabel::Mountain => "Mountain Time (Denver)",
            TimeZoneLabel::Arizona => "Mountain Time, no DST (Phoenix)",
            TimeZoneLabel::Pacific => "Pacific Time (Los Angeles)",
            TimeZoneLabel::Alaska => "Alaska Time (Anchorage)",
            TimeZoneLabel::Hawaii => "Hawaii Time (Honolulu)",
            TimeZoneLabel::Utc => "Coordinated Universal Time (UTC)",
        };
        write!(f, "{}", description)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct UnknownTimezone(pub String);

impl Display for UnknownTimezone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown timezone: {}", self.0)
    }
}

impl TryFrom<String> for TimeZoneLabel {
    type Error = UnknownTimezone;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TimeZoneLabel::parse(&value).ok_or(UnknownTimezone(value))
    }
}

impl TryFrom<&str> for TimeZoneLabel {
    type Error = UnknownTimezone;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        TimeZoneLabel::parse(value).ok_or_else(|| UnknownTimezone(value.to_string()))
    }
}

impl From<TimeZoneLabel> for String {
    fn from(value: TimeZoneLabel) -> Self {
        value.as_str().to_string()
    }
}
