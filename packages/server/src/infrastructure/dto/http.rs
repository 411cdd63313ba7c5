//! HTTP API request/response DTOs for the chat application.
//!
//! Request fields are optional so that missing fields can be reported
//! per field instead of as a generic deserialization error.

use std::num::NonZeroUsize;

use batepapo_shared::time::{timestamp_to_clock_time, timestamp_to_rfc3339};
use serde::{Deserialize, Serialize};

use crate::domain::{Message, Participant};

/// Body of `POST /participants`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JoinRequest {
    pub name: Option<String>,
}

/// Body of `POST /messages`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SendMessageRequest {
    pub to: Option<String>,
    pub text: Option<String>,
    #[serde(alias = "kind")]
    pub r#type: Option<String>,
}

/// Body of `PUT /messages/{id}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditMessageRequest {
    pub text: Option<String>,
}

/// Query of `GET /messages`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMessagesQuery {
    /// Kept as a string: non-numeric values mean "no limit" instead of a 400
    pub limit: Option<String>,
}

impl ListMessagesQuery {
    /// Positive `limit`, or `None` when absent, non-numeric or not positive
    pub fn limit(&self) -> Option<NonZeroUsize> {
        let limit = self.limit.as_deref()?.trim().parse::<i64>().ok()?;
        usize::try_from(limit).ok().and_then(NonZeroUsize::new)
    }
}

/// Participant in `GET /participants`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub name: String,
    /// Unix timestamp (milliseconds) of the latest heartbeat
    pub last_status: i64,
    pub last_seen_at: String, // ISO 8601
}

impl ParticipantDto {
    pub fn from_domain(participant: &Participant, utc_offset_minutes: i32) -> Self {
        let last_status = participant.last_status.value();
        Self {
            name: participant.name.as_str().to_string(),
            last_status,
            last_seen_at: timestamp_to_rfc3339(last_status, utc_offset_minutes),
        }
    }
}

/// Message in `GET /messages` and in send/edit responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDto {
    pub id: String,
    pub from: String,
    pub to: String,
    pub text: String,
    pub r#type: String,
    /// Wall-clock time `HH:MM:SS`
    pub time: String,
    /// Unix timestamp (milliseconds)
    pub timestamp: i64,
}

impl MessageDto {
    pub fn from_domain(message: &Message, utc_offset_minutes: i32) -> Self {
        let timestamp = message.time.value();
        Self {
            id: message.id.to_string(),
            from: message.from.as_str().to_string(),
            to: message.to.as_str().to_string(),
            text: message.text.as_str().to_string(),
            r#type: message.kind.as_str().to_string(),
            time: timestamp_to_clock_time(timestamp, utc_offset_minutes),
            timestamp,
        }
    }
}
