//! API error handling
//!
//! Every failure a request can hit is converted into a JSON body of the shape
//! `{"success": false, "error": <message>}` with an HTTP status. Nothing here
//! is fatal to the process; the serve loop keeps handling later requests.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::utils::error::YtgrabError;

/// API error response body.
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub error: String,
}

/// API error type that can be converted to HTTP responses.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Create a 400 Bad Request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Create a 404 Not Found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Create a 500 Internal Server Error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorResponse {
            success: false,
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<YtgrabError> for ApiError {
    fn from(err: YtgrabError) -> Self {
        match &err {
            YtgrabError::MissingUrl => ApiError::bad_request(err.to_string()),
            YtgrabError::FileNotFound => ApiError::not_found(err.to_string()),
            YtgrabError::IoError(e) => {
                tracing::error!("IO error: {}", e);
                ApiError::internal(err.to_string())
            }
            _ => ApiError::internal(err.to_string()),
        }
    }
}

/// Convenience alias for handler return types.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_url_maps_to_400() {
        let api: ApiError = YtgrabError::MissingUrl.into();
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert_eq!(api.message, "No URL provided");
    }

    #[test]
    fn test_file_not_found_maps_to_404() {
        let api: ApiError = YtgrabError::FileNotFound.into();
        assert_eq!(api.status, StatusCode::NOT_FOUND);
        assert_eq!(api.message, "File not found.");
    }

    #[test]
    fn test_extraction_failures_map_to_500() {
        for err in [
            YtgrabError::ExtractionError("x".into()),
            YtgrabError::DownloadError("x".into()),
            YtgrabError::AuthRequired("x".into()),
            YtgrabError::PostconditionError("x".into()),
        ] {
            let api: ApiError = err.into();
            assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
