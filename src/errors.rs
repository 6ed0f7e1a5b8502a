use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid lookback period: {0}")]
    InvalidPeriod(String),
    #[error("Unsupported or malformed upload: {0}")]
    UnsupportedUpload(String),
    #[error("Rate limited by external provider")]
    RateLimited,
    #[error("External error: {0}")]
    External(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppError::InvalidPeriod(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            // Detail stays in the logs; clients get a generic message.
            AppError::UnsupportedUpload(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "There was an error processing this file.",
            )
                .into_response(),
            AppError::RateLimited => {
                let mut headers = HeaderMap::new();
                headers.insert("Retry-After", HeaderValue::from_static("60"));
                (StatusCode::TOO_MANY_REQUESTS, headers, "Rate limited").into_response()
            }
            AppError::External(msg) => (StatusCode::BAD_GATEWAY, msg).into_response(),
        }
    }
}
