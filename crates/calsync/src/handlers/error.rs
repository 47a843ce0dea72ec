use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use calsync_core::calendar::CalendarError;
use calsync_core::storage::{repository_error_to_status_code, RepositoryError};

/// Errors a calendar handler can end with.
///
/// The client only ever sees the canonical reason phrase of the status; the
/// detailed message goes to the log.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body could not be decoded.
    #[error("Invalid request payload: {0}")]
    InvalidPayload(String),
    /// Request body decoded but failed validation.
    #[error(transparent)]
    Validation(#[from] CalendarError),
    /// Path did not carry a usable calendar id.
    #[error("Invalid calendar id: {0}")]
    InvalidId(String),
    /// Storage operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    /// Response body could not be serialized.
    #[error("Failed to encode response: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidPayload(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidId(_) => StatusCode::NOT_FOUND,
            ApiError::Repository(err) => StatusCode::from_u16(repository_error_to_status_code(err))
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            ApiError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = %status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::warn!(status = %status.as_u16(), error = %self, "Request rejected");
        }

        (status, status.canonical_reason().unwrap_or_default()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidPayload("eof".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Validation(CalendarError::EmptyName).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidId("abc".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Repository(RepositoryError::calendar_not_found(1)).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Repository(RepositoryError::QueryFailed("down".to_string())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_body_hides_error_details() {
        let error = ApiError::Repository(RepositoryError::QueryFailed("secret dsn".to_string()));

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"Internal Server Error");
    }
}
