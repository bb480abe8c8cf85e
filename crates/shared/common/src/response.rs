//! Command result envelope.
//!
//! A command either fulfils with `{status, data}` or rejects with
//! `{status, message}`; the two shapes are separate types so a result can
//! never carry both.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::AppError;

/// Successful command outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse<T> {
    pub status: u16,
    pub data: T,
}

impl<T> CommandResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            data,
        }
    }

    pub fn created(data: T) -> Self {
        Self {
            status: StatusCode::CREATED.as_u16(),
            data,
        }
    }
}

/// Failed command outcome.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{status}: {message}")]
pub struct CommandError {
    pub status: u16,
    pub message: String,
}

impl CommandError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
        }
    }

    /// 422, used for rejected input
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    /// Normalize an application error, substituting `fallback` when the
    /// error has no message a client may see.
    pub fn from_app_error(err: &AppError, fallback: impl FnOnce() -> String) -> Self {
        let message = err.exposed_message().unwrap_or_else(fallback);
        Self::new(err.status(), message)
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// Result type returned by commands
pub type CommandResult<T> = Result<CommandResponse<T>, CommandError>;

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl<T: Serialize> IntoResponse for CommandResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}

impl IntoResponse for CommandError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(self)).into_response()
    }
}
