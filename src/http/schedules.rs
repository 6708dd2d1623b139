use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::domain::entities::{Lang, ScheduleRecord, SchedulesPayload};
use crate::domain::timezone::{TimeZoneLabel, TimeZoneOption};
use crate::domain::{add_schedules, find_schedules};

use super::core::ApiError;
use super::AppState;

pub async fn find(
    State(state): State<Arc<AppState>>,
    Query(req): Query<find_schedules::Request>,
) -> Result<Json<Vec<ScheduleRecord>>, ApiError> {
    let schedules = find_schedules::execute(state.repo.clone(), req).await?;
    Ok(Json(schedules))
}

pub async fn add(
    State(state): State<Arc<AppState>>,
    Path(lang): Path<String>,
    Json(data): Json<SchedulesPayload>,
) -> Result<(StatusCode, Json<add_schedules::Response>), ApiError> {
    let lang = Lang::try_from(lang.clone())
        .map_err(|_| ApiError::BadRequest(format!("unsupported language: {}", lang)))?;
    let res = add_schedules::execute(state.repo.clone(), add_schedules::Request { lang, data }).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn timezones() -> Json<[TimeZoneOption; 8]> {
    Json(TimeZoneLabel::options())
}
