/// Unified error handling module
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Unified error response format
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("External API error: {0}")]
    ExternalApi(#[from] reqwest::Error),
    #[error("Response missing data: {0}")]
    MissingData(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::ExternalApi(e) => (
                StatusCode::BAD_GATEWAY,
                match e.status().map(|s| s.as_u16()) {
                    Some(403) => "UPSTREAM_403",
                    Some(404) => "UPSTREAM_404",
                    Some(429) => "UPSTREAM_429",
                    Some(500..=599) => "UPSTREAM_5XX",
                    _ => "UPSTREAM_ERROR",
                },
            ),
            ApiError::MissingData(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_DATA"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        };

        let error_response = ErrorResponse {
            ok: false,
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(error_response)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
