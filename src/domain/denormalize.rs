use crate::helpers::date::strip_utc_offset;

use super::entities::{LocalSchedule, ScheduleRecord};
use super::timezone::TimeZoneLabel;

/// Relabels the wall clock as UTC-marked text and tags it with `display`.
pub fn denormalize_schedule(schedule: &LocalSchedule, display: TimeZoneLabel) -> ScheduleRecord {
    let formatted = schedule.format();
    ScheduleRecord {
        date: format!("{}Z", strip_utc_offset(&formatted)),
        timezone: Some(display.into()),
    }
}

pub fn execute(schedules: &[LocalSchedule], display: TimeZoneLabel) -> Vec<ScheduleRecord> {
    schedules
        .iter()
        .map(|schedule| denormalize_schedule(schedule, display))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{mocks, normalize};

    #[test]
    fn it_should_mark_the_wall_clock_as_utc_and_attach_the_display_zone() {
        let schedules = vec![LocalSchedule::new(
            mocks::wall(2024, 3, 1, 7, 0),
            TimeZoneLabel::Pacific,
        )];

        let result = execute(&schedules, TimeZoneLabel::Pacific);

        assert_eq!(
            result,
            vec![ScheduleRecord::new(
                "2024-03-01T07:00:00Z",
                Some(TimeZoneLabel::Pacific)
            )]
        );
    }

    #[test]
    fn it_should_keep_digits_of_times_inside_a_dst_gap() {
        let schedules = vec![LocalSchedule::new(
            mocks::wall(2024, 3, 10, 2, 30),
            TimeZoneLabel::Eastern,
        )];

        let result = execute(&schedules, TimeZoneLabel::Eastern);

        assert_eq!(result[0].date, "2024-03-10T02:30:00Z");
    }

    #[test]
    fn it_should_reproduce_the_original_digits_for_records_in_the_display_zone() {
        let records = vec![
            ScheduleRecord::new("2024-03-01T07:00:00Z", Some(TimeZoneLabel::Pacific)),
            ScheduleRecord::new("2024-03-04T16:30:00Z", Some(TimeZoneLabel::Pacific)),
        ];

        let local = normalize::execute(&records, TimeZoneLabel::Pacific, mocks::mock_now()).unwrap();
        let result = execute(&local, TimeZoneLabel::Pacific);

        assert_eq!(result, records);
    }

    #[test]
    fn it_should_round_trip_to_the_same_local_schedules_under_a_fixed_zone() {
        let records = vec![
            mocks::mock_record_without_timezone(),
            ScheduleRecord::new("2024-03-02T18:15:00", Some(TimeZoneLabel::Utc)),
            ScheduleRecord::new("2024-03-03T08:00:00Z", Some(TimeZoneLabel::Mountain)),
        ];

        for display in TimeZoneLabel::all() {
            let local = normalize::execute(&records, display, mocks::mock_now()).unwrap();
            let wire = execute(&local, display);
            let again = normalize::execute(&wire, display, mocks::mock_now()).unwrap();
            assert_eq!(again, local, "round trip through {}", display.as_str());
        }
    }
}
