use std::sync::Arc;

use serde::Deserialize;

use crate::domain::entities::ScheduleRecord;
use crate::repository::errors::FindError;
use crate::repository::schedule::{CandidatePosition, Repository};

#[derive(Deserialize, Clone, Copy, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub candidate_id: u32,
    pub position_id: u32,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    Unknown,
}

/// Lists the stored schedules of a candidate for a position. A pair that was
/// never scheduled has no schedules.
pub async fn execute(repo: Arc<dyn Repository>, req: Request) -> Result<Vec<ScheduleRecord>, Error> {
    let key = CandidatePosition {
        candidate_id: req.candidate_id,
        position_id: req.position_id,
    };
    match repo.find_schedules(key).await {
        Ok(schedules) => Ok(schedules),
        Err(FindError::NotFound) => Ok(vec![]),
        Err(FindError::Unknown) => Err(Error::Unknown),
    }
}
