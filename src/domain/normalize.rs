use chrono::{DateTime, Duration, Utc};

use crate::helpers::date::parse_naive;

use super::entities::{LocalSchedule, ScheduleRecord};
use super::errors::ScheduleError;
use super::offset::hour_offset;
use super::timezone::{TimeZoneLabel, DEFAULT_TIMEZONE};

/// Zone the record was stored in, falling back to the default zone.
pub fn source_zone(record: &ScheduleRecord) -> Result<TimeZoneLabel, ScheduleError> {
    match record.timezone.as_deref() {
        None => Ok(DEFAULT_TIMEZONE),
        Some(label) => Ok(TimeZoneLabel::try_from(label)?),
    }
}

/// Shifts the record by the offset between its source zone and `display`,
/// then relabels the resulting wall clock as `display` time.
pub fn normalize_record(
    record: &ScheduleRecord,
    display: TimeZoneLabel,
    now: DateTime<Utc>,
) -> Result<LocalSchedule, ScheduleError> {
    let source = source_zone(record)?;
    let wall = parse_naive(&record.date)
        .ok_or_else(|| ScheduleError::InvalidDate(record.date.clone()))?;
    let difference = hour_offset(display, source, now);
    let shifted = wall
        .checked_add_signed(Duration::hours(difference))
        .ok_or_else(|| ScheduleError::InvalidDate(record.date.clone()))?;

    Ok(LocalSchedule::new(shifted, display))
}

pub fn execute(
    records: &[ScheduleRecord],
    display: TimeZoneLabel,
    now: DateTime<Utc>,
) -> Result<Vec<LocalSchedule>, ScheduleError> {
    let schedules = records
        .iter()
        .map(|record| normalize_record(record, display, now))
        .collect::<Result<Vec<LocalSchedule>, ScheduleError>>()?;
    log::trace!(
        "normalized {} schedules into {}",
        schedules.len(),
        display.as_str()
    );
    Ok(schedules)
}
