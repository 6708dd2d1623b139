use async_trait::async_trait;
use serde::Serialize;

use crate::dialog::ports::{ApiError, ScheduleApi};
use crate::domain::entities::{AddSchedules, ScheduleRecord};

use super::core::{Client, Error, Response};

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ClientQuery {
    candidate_id: u32,
    position_id: u32,
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError::Unavailable(err.message)
    }
}

/// Schedule API served over HTTP by `crate::http`.
pub struct HttpScheduleApi {
    base_url: String,
    client: Client,
}

impl HttpScheduleApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    async fn check(res: Response) -> Result<Response, ApiError> {
        if res.is_success() {
            return Ok(res);
        }
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        Err(ApiError::Rejected(format!("status {}: {}", status, body)))
    }
}

#[async_trait]
impl ScheduleApi for HttpScheduleApi {
    async fn get_schedules(
        &self,
        candidate_id: u32,
        position_id: u32,
    ) -> Result<Vec<ScheduleRecord>, ApiError> {
        let url = format!("{}/api/candidate-schedules", self.base_url);
        let query = ClientQuery {
            candidate_id,
            position_id,
        };
        let res = Self::check(self.client.get(&url, Some(&query)).await?).await?;
        res.json()
            .await
            .map_err(|err| ApiError::Rejected(format!("malformed schedules: {}", err.message)))
    }

    async fn add_schedules(&self, request: AddSchedules) -> Result<(), ApiError> {
        let url = format!(
            "{}/api/{}/candidate-schedules",
            self.base_url,
            request.lang.as_str()
        );
        Self::check(self.client.post_json(&url, &request.data).await?).await?;
        Ok(())
    }
}
