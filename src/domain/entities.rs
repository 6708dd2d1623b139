use std::fmt::Display;

use chrono::{DateTime, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use serde_trim::string_trim;

use crate::helpers::date::format_naive;

use super::timezone::TimeZoneLabel;

/// Schedule as exchanged with the remote data source.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ScheduleRecord {
    #[serde(rename = "Date", deserialize_with = "string_trim")]
    pub date: String,
    #[serde(rename = "Timezone", default)]
    pub timezone: Option<String>,
}

impl ScheduleRecord {
    pub fn new(date: impl Into<String>, timezone: Option<TimeZoneLabel>) -> Self {
        Self {
            date: date.into(),
            timezone: timezone.map(String::from),
        }
    }
}

/// Wall-clock timestamp bound to the zone it is displayed in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalSchedule {
    pub wall: NaiveDateTime,
    pub zone: TimeZoneLabel,
}

impl LocalSchedule {
    pub fn new(wall: NaiveDateTime, zone: TimeZoneLabel) -> Self {
        Self { wall, zone }
    }

    /// Resolves the wall clock in its zone. Ambiguous times take the earlier
    /// instant; times skipped by a DST jump do not resolve.
    pub fn to_datetime(&self) -> Option<DateTime<Tz>> {
        self.zone.tz().from_local_datetime(&self.wall).earliest()
    }

    /// ISO-like rendering with the zone offset, e.g. `2024-03-01T07:00:00-08:00`.
    pub fn format(&self) -> String {
        match self.to_datetime() {
            Some(datetime) => datetime.format("%Y-%m-%dT%H:%M:%S%:z").to_string(),
            None => format_naive(&self.wall),
        }
    }
}

impl Display for LocalSchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", format_naive(&self.wall), self.zone.as_str())
    }
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Es,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
        }
    }
}

impl TryFrom<String> for Lang {
    type Error = ();

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "en" => Ok(Lang::En),
            "es" => Ok(Lang::Es),
            _ => Err(()),
        }
    }
}

/// Body of the submit mutation, minus the language which travels in the path.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SchedulesPayload {
    pub position_id: u32,
    pub candidate_id: u32,
    pub schedules: Vec<ScheduleRecord>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AddSchedules {
    pub lang: Lang,
    pub data: SchedulesPayload,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn it_should_read_wire_records_with_null_and_missing_timezone() {
        let records: Vec<ScheduleRecord> = serde_json::from_str(
            r#"[
                {"Date": " 2024-03-01T10:00:00Z ", "Timezone": null},
                {"Date": "2024-03-02T11:00:00"},
                {"Date": "2024-03-03T12:00:00", "Timezone": "Pacific"}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            records,
            vec![
                ScheduleRecord::new("2024-03-01T10:00:00Z", None),
                ScheduleRecord::new("2024-03-02T11:00:00", None),
                ScheduleRecord::new("2024-03-03T12:00:00", Some(TimeZoneLabel::Pacific)),
            ]
        );
    }

    #[test]
    fn it_should_write_the_payload_in_camel_case() {
        let payload = SchedulesPayload {
            position_id: 7,
            candidate_id: 42,
            schedules: vec![ScheduleRecord::new(
                "2024-03-01T07:00:00Z",
                Some(TimeZoneLabel::Pacific),
            )],
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({
                "positionId": 7,
                "candidateId": 42,
                "schedules": [{"Date": "2024-03-01T07:00:00Z", "Timezone": "Pacific"}]
            })
        );
    }

    #[test]
    fn it_should_format_local_schedules_with_the_zone_offset() {
        let wall = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(7, 0, 0)
            .unwrap();

        let local = LocalSchedule::new(wall, TimeZoneLabel::Pacific);

        assert_eq!(local.format(), "2024-03-01T07:00:00-08:00");
        assert_eq!(local.to_string(), "2024-03-01T07:00:00 (Pacific)");
    }

    #[test]
    fn it_should_fall_back_to_the_wall_clock_inside_a_dst_gap() {
        let wall = NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(2, 30, 0)
            .unwrap();

        let local = LocalSchedule::new(wall, TimeZoneLabel::Eastern);

        assert_eq!(local.to_datetime(), None);
        assert_eq!(local.format(), "2024-03-10T02:30:00");
    }
}
