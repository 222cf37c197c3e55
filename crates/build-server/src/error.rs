//! Conversion of build failures into HTTP responses
//!
//! Client-caused failures return their specific message. Server-side
//! failures are logged in full and the caller only sees the generic message
//! from [`BuildError::client_message`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use build_core::BuildError;
use build_types::ErrorBody;
use log::{error, warn};

/// A failed build request, tagged with its request id for logging
#[derive(Debug)]
pub struct ApiError {
    pub request_id: String,
    pub error: BuildError,
}

impl ApiError {
    pub fn new(request_id: impl Into<String>, error: BuildError) -> Self {
        Self {
            request_id: request_id.into(),
            error,
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.error.status_code()).unwrap_or(StatusCode::BAD_GATEWAY)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self.error {
            BuildError::UpstreamFailed { .. } | BuildError::ServiceMisconfigured(_) => {
                // Already logged with detail where it was detected
                warn!("[{}] Request failed with {}: {}", self.request_id, status, self.error);
            }
            e if e.is_client_error() => {
                warn!("[{}] Rejected request: {}", self.request_id, e);
            }
            e => {
                error!("[{}] Error in /api/build: {:?}", self.request_id, e);
            }
        }

        (status, Json(ErrorBody::new(self.error.client_message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status_becomes_response_status() {
        let err = ApiError::new("r", BuildError::UpstreamFailed { status: 429, body: String::new() });
        assert_eq!(err.into_response().status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_invalid_upstream_status_falls_back_to_bad_gateway() {
        let err = ApiError::new("r", BuildError::UpstreamFailed { status: 42, body: String::new() });
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_internal_error_is_500() {
        let err = ApiError::new("r", BuildError::Internal("boom".to_string()));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
