// Rust guideline compliant 2026-10-19

//! HTTP error responses.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ticketflow_app::{AppError, ErrorCode, ErrorEnvelope};

/// Application error rendered as an [`ErrorEnvelope`] response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

/// Maps a stable error code to its HTTP status.
#[must_use]
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InvalidTransition | ErrorCode::ValidationError | ErrorCode::InvalidInput => {
            StatusCode::BAD_REQUEST
        }
        ErrorCode::ReadOnly => StatusCode::FORBIDDEN,
        ErrorCode::IoError
        | ErrorCode::JsonError
        | ErrorCode::ConfigError
        | ErrorCode::NotInitialized => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(AppError::InvalidInput(rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self(AppError::InvalidInput(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(AppError::InvalidInput(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(self.0.code());
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        (status, Json(ErrorEnvelope::from_error(&self.0))).into_response()
    }
}
