use std::fmt::Display;

use crate::domain::entities::{LocalSchedule, ScheduleRecord};
use crate::domain::errors::ScheduleError;
use crate::domain::timezone::TimeZoneLabel;

use super::ports::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Editing,
    Submitting,
    Success,
    Failed,
    Closed,
}

#[derive(Debug, PartialEq, Clone)]
pub enum DialogError {
    Fetch(ApiError),
    Submit(ApiError),
    Schedule(ScheduleError),
}

impl Display for DialogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DialogError::Fetch(err) => write!(f, "could not load schedules: {}", err),
            DialogError::Submit(err) => write!(f, "could not save schedules: {}", err),
            DialogError::Schedule(err) => write!(f, "{}", err),
        }
    }
}

impl From<ScheduleError> for DialogError {
    fn from(value: ScheduleError) -> Self {
        DialogError::Schedule(value)
    }
}

/// Entry of the editable list. `source` is the wire form every display zone
/// is derived from; `local` is its rendering in the current zone.
#[derive(Clone, Debug, PartialEq)]
pub struct EditableSchedule {
    pub source: ScheduleRecord,
    pub local: LocalSchedule,
}

/// Snapshot published to renderers after every transition.
#[derive(Clone, Debug, PartialEq)]
pub struct DialogView {
    pub phase: Phase,
    pub timezone: TimeZoneLabel,
    pub schedules: Vec<LocalSchedule>,
    pub done: bool,
    pub error: Option<DialogError>,
}

impl DialogView {
    pub fn loading(timezone: TimeZoneLabel) -> Self {
        Self {
            phase: Phase::Loading,
            timezone,
            schedules: vec![],
            done: false,
            error: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.phase != Phase::Closed
    }
}
