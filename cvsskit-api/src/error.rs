// ---------------------------------------------------------------------------
// API error types
// ---------------------------------------------------------------------------

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
    pub message: String,
}

#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request — a required metric is absent.
    BadRequest(String),
    /// 422 Unprocessable Entity — valid JSON but a code outside its axis
    /// domain.
    UnknownMetric(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_key, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::UnknownMetric(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "unknown_metric", msg)
            }
        };

        (
            status,
            Json(ApiErrorBody {
                error: error_key.into(),
                message,
            }),
        )
            .into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "bad request: {msg}"),
            ApiError::UnknownMetric(msg) => write!(f, "unknown metric: {msg}"),
        }
    }
}
