// Rust guideline compliant 2026-10-19

//! Error handling for Ticketflow application services.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;
use ticketflow_core::Error as CoreError;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for API and CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The referenced ticket does not exist.
    NotFound,
    /// The requested state change was rejected.
    InvalidTransition,
    /// Ticket fields failed validation.
    ValidationError,
    /// The request included invalid inputs.
    InvalidInput,
    /// Mutations are disabled.
    ReadOnly,
    /// IO failure while reading or writing ticket data.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
    /// Configuration could not be loaded.
    ConfigError,
    /// The data directory has not been initialized.
    NotInitialized,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Data directory is missing.
    #[error("Ticketflow data directory not found at {path}. Run 'tflow init' first.")]
    NotInitialized {
        /// Path where `.ticketflow` was expected.
        path: PathBuf,
    },

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A mutation was attempted in read-only mode.
    #[error("Ticketflow is running in read-only mode")]
    ReadOnly,

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::NotInitialized { .. } => ErrorCode::NotInitialized,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::ReadOnly => ErrorCode::ReadOnly,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::NotFound(_) => ErrorCode::NotFound,
                CoreError::InvalidTransition(_) => ErrorCode::InvalidTransition,
                CoreError::InvalidTicket(_) => ErrorCode::ValidationError,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
                CoreError::Config(_) => ErrorCode::ConfigError,
            },
        }
    }

    /// Returns true if the caller, not the system, is at fault.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self.code(),
            ErrorCode::NotFound
                | ErrorCode::InvalidTransition
                | ErrorCode::ValidationError
                | ErrorCode::InvalidInput
                | ErrorCode::ReadOnly
        )
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::NotInitialized { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::Core(CoreError::NotFound(id)) => Some(serde_json::json!({
                "id": id,
            })),
            AppError::Core(CoreError::InvalidTransition(denial)) => Some(serde_json::json!({
                "reason": denial.code(),
            })),
            _ => None,
        }
    }
}
