use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

use crate::dialog::ports::{ApiError, Host, ScheduleApi, TagInvalidator};
use crate::domain::entities::{AddSchedules, ScheduleRecord};

pub struct MockScheduleApi {
    records: Vec<ScheduleRecord>,
    fetch_error: Option<ApiError>,
    latency: Duration,
    fail_submits: AtomicBool,
    submissions: Mutex<Vec<AddSchedules>>,
}

impl MockScheduleApi {
    pub fn new(records: Vec<ScheduleRecord>) -> Self {
        Self {
            records,
            fetch_error: None,
            latency: Duration::ZERO,
            fail_submits: AtomicBool::new(false),
            submissions: Mutex::new(vec![]),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn failing_fetch(mut self, error: ApiError) -> Self {
        self.fetch_error = Some(error);
        self
    }

    pub fn fail_submits(&self, fail: bool) {
        self.fail_submits.store(fail, Ordering::SeqCst);
    }

    pub fn submissions(&self) -> Vec<AddSchedules> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScheduleApi for MockScheduleApi {
    async fn get_schedules(
        &self,
        _candidate_id: u32,
        _position_id: u32,
    ) -> Result<Vec<ScheduleRecord>, ApiError> {
        tokio::time::sleep(self.latency).await;
        match &self.fetch_error {
            Some(error) => Err(error.clone()),
            None => Ok(self.records.clone()),
        }
    }

    async fn add_schedules(&self, request: AddSchedules) -> Result<(), ApiError> {
        self.submissions.lock().unwrap().push(request);
        tokio::time::sleep(self.latency).await;
        if self.fail_submits.load(Ordering::SeqCst) {
            return Err(ApiError::Rejected("schedules could not be stored".to_string()));
        }
        Ok(())
    }
}

pub struct RecordingInvalidator {
    calls: Mutex<Vec<(Instant, Vec<&'static str>)>>,
}

impl RecordingInvalidator {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(vec![]),
        }
    }

    pub fn calls(&self) -> Vec<(Instant, Vec<&'static str>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl TagInvalidator for RecordingInvalidator {
    fn invalidate_tags(&self, tags: &[&'static str]) {
        self.calls
            .lock()
            .unwrap()
            .push((Instant::now(), tags.to_vec()));
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum HostCall {
    SetIsOpen(bool),
    SetSwitchingId(u32),
}

pub struct RecordingHost {
    calls: Mutex<Vec<(Instant, HostCall)>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(vec![]),
        }
    }

    pub fn calls(&self) -> Vec<(Instant, HostCall)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Host for RecordingHost {
    fn set_is_open(&self, open: bool) {
        self.calls
            .lock()
            .unwrap()
            .push((Instant::now(), HostCall::SetIsOpen(open)));
    }

    fn set_switching_id(&self, candidate_id: u32) {
        self.calls
            .lock()
            .unwrap()
            .push((Instant::now(), HostCall::SetSwitchingId(candidate_id)));
    }
}
