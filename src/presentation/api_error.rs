// API error type mapped to HTTP status codes
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("WA must be 0 padded, 5 character numeric string")]
    InvalidWa,
    #[error("Units must be 'metric' or 'field'")]
    InvalidUnits,
    #[error("WA not found")]
    WaNotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::InvalidWa | ApiError::InvalidUnits => StatusCode::BAD_REQUEST,
            ApiError::WaNotFound => StatusCode::NOT_FOUND,
        };
        let body = serde_json::json!({ "detail": self.to_string() });
        (status, Json(body)).into_response()
    }
}
