use std::fmt::Display;

use async_trait::async_trait;

use crate::domain::entities::{AddSchedules, ScheduleRecord};

/// Tag whose views list candidate positions and must refetch after a submit.
pub const POSITIONS_LIST_TAG: &str = "PositionsList";

#[derive(Debug, PartialEq, Clone)]
pub enum ApiError {
    Unavailable(String),
    Rejected(String),
}

impl Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Unavailable(message) => write!(f, "schedule service unavailable: {}", message),
            ApiError::Rejected(message) => write!(f, "schedule service rejected the request: {}", message),
        }
    }
}

#[async_trait]
pub trait ScheduleApi: Send + Sync {
    async fn get_schedules(
        &self,
        candidate_id: u32,
        position_id: u32,
    ) -> Result<Vec<ScheduleRecord>, ApiError>;

    async fn add_schedules(&self, request: AddSchedules) -> Result<(), ApiError>;
}

pub trait TagInvalidator: Send + Sync {
    fn invalidate_tags(&self, tags: &[&'static str]);
}

/// Callbacks into whatever owns the dialog.
pub trait Host: Send + Sync {
    fn set_is_open(&self, open: bool);
    fn set_switching_id(&self, candidate_id: u32);
}

/// Invalidator for hosts without a shared cache; it only records the intent.
pub struct LogInvalidator;

impl TagInvalidator for LogInvalidator {
    fn invalidate_tags(&self, tags: &[&'static str]) {
        log::info!("invalidated cache tags {:?}", tags);
    }
}
