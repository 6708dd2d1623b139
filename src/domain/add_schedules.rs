use std::sync::Arc;

use serde::Serialize;

use crate::domain::entities::{Lang, ScheduleRecord, SchedulesPayload};
use crate::domain::errors::ScheduleError;
use crate::domain::normalize::source_zone;
use crate::helpers::date::parse_naive;
use crate::repository::errors::InsertError;
use crate::repository::schedule::{CandidatePosition, Repository};

#[derive(Clone, Debug)]
pub struct Request {
    pub lang: Lang,
    pub data: SchedulesPayload,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct Response {
    pub count: usize,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    BadRequest(ScheduleError),
    Unknown,
}

impl From<ScheduleError> for Error {
    fn from(value: ScheduleError) -> Self {
        Error::BadRequest(value)
    }
}

fn validate(record: &ScheduleRecord) -> Result<(), ScheduleError> {
    source_zone(record)?;
    match parse_naive(&record.date) {
        Some(..) => Ok(()),
        None => Err(ScheduleError::InvalidDate(record.date.clone())),
    }
}

pub async fn execute(repo: Arc<dyn Repository>, req: Request) -> Result<Response, Error> {
    for record in req.data.schedules.iter() {
        validate(record)?;
    }

    let key = CandidatePosition {
        candidate_id: req.data.candidate_id,
        position_id: req.data.position_id,
    };
    log::debug!(
        "storing {} schedules for candidate {} ({})",
        req.data.schedules.len(),
        key.candidate_id,
        req.lang.as_str()
    );

    match repo.replace_schedules(key, req.data.schedules).await {
        Ok(count) => Ok(Response { count }),
        Err(InsertError::Unknown) => Err(Error::Unknown),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::timezone::TimeZoneLabel;
    use crate::repository::schedule::InMemoryRepository;

    fn request(schedules: Vec<ScheduleRecord>) -> Request {
        Request {
            lang: Lang::En,
            data: SchedulesPayload {
                position_id: 7,
                candidate_id: 42,
                schedules,
            },
        }
    }

    #[tokio::test]
    async fn it_should_store_the_submitted_schedules() {
        let repo = Arc::new(InMemoryRepository::new());
        let schedules = vec![
            ScheduleRecord::new("2024-03-01T07:00:00Z", Some(TimeZoneLabel::Pacific)),
            ScheduleRecord::new("2024-03-01T08:00:00Z", Some(TimeZoneLabel::Pacific)),
        ];

        let result = execute(repo.clone(), request(schedules.clone())).await;

        assert_eq!(result, Ok(Response { count: 2 }));
        let key = CandidatePosition {
            candidate_id: 42,
            position_id: 7,
        };
        assert_eq!(repo.find_schedules(key).await, Ok(schedules));
    }

    #[tokio::test]
    async fn it_should_reject_malformed_dates_without_storing_anything() {
        let repo = Arc::new(InMemoryRepository::new());
        let schedules = vec![
            ScheduleRecord::new("2024-03-01T07:00:00Z", None),
            ScheduleRecord::new("2024-02-30T07:00:00Z", None),
        ];

        let result = execute(repo.clone(), request(schedules)).await;

        assert_eq!(
            result,
            Err(Error::BadRequest(ScheduleError::InvalidDate(
                "2024-02-30T07:00:00Z".to_string()
            )))
        );
        let key = CandidatePosition {
            candidate_id: 42,
            position_id: 7,
        };
        assert!(repo.find_schedules(key).await.is_err());
    }

    #[tokio::test]
    async fn it_should_reject_unknown_timezones() {
        let repo = Arc::new(InMemoryRepository::new());
        let schedules = vec![ScheduleRecord {
            date: "2024-03-01T07:00:00Z".to_string(),
            timezone: Some("Moon".to_string()),
        }];

        let result = execute(repo, request(schedules)).await;

        assert_eq!(
            result,
            Err(Error::BadRequest(ScheduleError::UnknownTimezone(
                "Moon".to_string()
            )))
        );
    }
}
