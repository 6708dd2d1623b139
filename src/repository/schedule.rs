use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::entities::ScheduleRecord;

use super::errors::{FindError, InsertError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CandidatePosition {
    pub candidate_id: u32,
    pub position_id: u32,
}

#[async_trait]
pub trait Repository: Send + Sync {
    async fn find_schedules(&self, key: CandidatePosition) -> Result<Vec<ScheduleRecord>, FindError>;

    /// Replaces every schedule of the pair and returns how many were stored.
    async fn replace_schedules(
        &self,
        key: CandidatePosition,
        schedules: Vec<ScheduleRecord>,
    ) -> Result<usize, InsertError>;
}

pub struct InMemoryRepository {
    schedules: Mutex<HashMap<CandidatePosition, Vec<ScheduleRecord>>>,
}

impl InMemoryRepository {
    pub fn new() -> InMemoryRepository {
        InMemoryRepository {
            schedules: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn find_schedules(&self, key: CandidatePosition) -> Result<Vec<ScheduleRecord>, FindError> {
        let lock = self.schedules.lock()?;
        match lock.get(&key) {
            Some(schedules) => Ok(schedules.clone()),
            None => Err(FindError::NotFound),
        }
    }

    async fn replace_schedules(
        &self,
        key: CandidatePosition,
        schedules: Vec<ScheduleRecord>,
    ) -> Result<usize, InsertError> {
        let mut lock = self.schedules.lock()?;
        let count = schedules.len();
        lock.insert(key, schedules);
        Ok(count)
    }
}
