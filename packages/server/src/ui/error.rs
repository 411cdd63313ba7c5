//! HTTP error responses.
//!
//! Use case errors convert into [`ApiError`] so handlers can use `?`.
//! Store failures are logged here and answered with a generic 500.

use std::fmt::Display;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    domain::{RepositoryError, ValueObjectError},
    usecase::{
        DeleteMessageError, EditMessageError, HeartbeatError, JoinError, SendMessageError,
    },
};

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    /// Field-level validation details
    pub details: Vec<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: Vec::new(),
        }
    }

    pub fn validation(details: Vec<String>) -> Self {
        Self {
            details,
            ..Self::new(StatusCode::UNPROCESSABLE_ENTITY, "validation failed")
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Log `err` and hide it from the caller
    pub fn internal(err: impl Display) -> Self {
        tracing::error!(error = %err, "store failure");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut error = json!({
            "code": self.status.as_u16(),
            "message": self.message,
        });
        if !self.details.is_empty() {
            error["details"] = json!(self.details);
        }
        (self.status, Json(json!({ "error": error }))).into_response()
    }
}

/// Collects field-level validation failures of a request body.
#[derive(Debug, Default)]
pub struct FieldErrors(Vec<String>);

impl FieldErrors {
    /// Parse a required field, recording a detail when it is missing or invalid.
    pub fn field<T>(
        &mut self,
        field: &str,
        value: Option<String>,
        parse: impl FnOnce(String) -> Result<T, ValueObjectError>,
    ) -> Option<T> {
        let Some(value) = value else {
            self.0.push(format!("{field} is required"));
            return None;
        };
        parse(value)
            .map_err(|e| self.0.push(format!("{field}: {e}")))
            .ok()
    }
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        Self::validation(errors.0)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation(vec![rejection.body_text()])
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        Self::internal(err)
    }
}

impl From<JoinError> for ApiError {
    fn from(err: JoinError) -> Self {
        match err {
            JoinError::DuplicateName(_) => Self::conflict(err.to_string()),
            JoinError::Repository(e) => Self::internal(e),
        }
    }
}

impl From<HeartbeatError> for ApiError {
    fn from(err: HeartbeatError) -> Self {
        match err {
            HeartbeatError::ParticipantNotFound(_) => Self::not_found(err.to_string()),
            HeartbeatError::Repository(e) => Self::internal(e),
        }
    }
}

impl From<SendMessageError> for ApiError {
    fn from(err: SendMessageError) -> Self {
        match err {
            SendMessageError::SenderNotActive(_) | SendMessageError::KindNotSendable(_) => {
                Self::validation(vec![err.to_string()])
            }
            SendMessageError::Repository(e) => Self::internal(e),
        }
    }
}

impl From<EditMessageError> for ApiError {
    fn from(err: EditMessageError) -> Self {
        match err {
            EditMessageError::MessageNotFound(_) => Self::not_found(err.to_string()),
            EditMessageError::Forbidden { .. } => Self::forbidden(err.to_string()),
            EditMessageError::Repository(e) => Self::internal(e),
        }
    }
}

impl From<DeleteMessageError> for ApiError {
    fn from(err: DeleteMessageError) -> Self {
        match err {
            DeleteMessageError::MessageNotFound(_) => Self::not_found(err.to_string()),
            DeleteMessageError::Forbidden { .. } => Self::forbidden(err.to_string()),
            DeleteMessageError::Repository(e) => Self::internal(e),
        }
    }
}
