//! Handler modules for the HTTP endpoints.

pub mod health;
pub mod message;
pub mod participant;

use axum::http::HeaderMap;

use crate::domain::ParticipantName;

pub use health::health_check;
pub use message::{delete_message, edit_message, list_messages, send_message};
pub use participant::{heartbeat, join, list_participants};

/// Header carrying the caller's participant name
pub const USER_HEADER: &str = "user";

/// Raw value of the identity header, if present and valid UTF-8
pub(crate) fn caller_identity(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(USER_HEADER)
        .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
}

/// Identity header sanitized into a participant name
pub(crate) fn caller_name(headers: &HeaderMap) -> Option<ParticipantName> {
    caller_identity(headers).and_then(|raw| ParticipantName::new(raw.to_string()).ok())
}
