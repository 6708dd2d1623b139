use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::domain::{add_schedules, find_schedules};

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::InternalServerError(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        let body = Json(json!({
            "error": error_message,
        }));
        (status, body).into_response()
    }
}

impl From<find_schedules::Error> for ApiError {
    fn from(err: find_schedules::Error) -> Self {
        match err {
            find_schedules::Error::Unknown => {
                ApiError::InternalServerError("could not read schedules".to_string())
            }
        }
    }
}

impl From<add_schedules::Error> for ApiError {
    fn from(err: add_schedules::Error) -> Self {
        match err {
            add_schedules::Error::BadRequest(err) => ApiError::BadRequest(err.to_string()),
            add_schedules::Error::Unknown => {
                ApiError::InternalServerError("could not store schedules".to_string())
            }
        }
    }
}
