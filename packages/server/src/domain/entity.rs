//! Core domain models for the chat application.

use std::time::Duration;

use super::{
    factory::MessageIdFactory,
    value_object::{MessageId, MessageKind, MessageText, ParticipantName, Recipient, Timestamp},
};

/// Text of the system-status message appended when a participant joins
pub const JOIN_TEXT: &str = "entra na sala...";

/// Text of the system-status message appended when a participant is evicted
pub const DEPARTURE_TEXT: &str = "sai da sala...";

/// Represents a participant currently present in the chat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// Unique participant name
    pub name: ParticipantName,
    /// Timestamp of the join or of the latest heartbeat
    pub last_status: Timestamp,
}

impl Participant {
    /// Create a new participant
    pub fn new(name: ParticipantName, last_status: Timestamp) -> Self {
        Self { name, last_status }
    }

    /// Whether more than `timeout` has elapsed between the last heartbeat and `now`
    pub fn is_inactive(&self, now: Timestamp, timeout: Duration) -> bool {
        let timeout_ms = i64::try_from(timeout.as_millis()).unwrap_or(i64::MAX);
        now.millis_since(self.last_status) > timeout_ms
    }
}

/// Represents a stored message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    /// Author; never changes after creation
    pub from: ParticipantName,
    pub to: Recipient,
    pub text: MessageText,
    pub kind: MessageKind,
    /// Creation time, refreshed on edit
    pub time: Timestamp,
}

impl Message {
    /// Create a new message with a freshly generated id
    pub fn new(
        from: ParticipantName,
        to: Recipient,
        text: MessageText,
        kind: MessageKind,
        time: Timestamp,
    ) -> Self {
        Self {
            id: MessageIdFactory::generate(),
            from,
            to,
            text,
            kind,
            time,
        }
    }

    /// System-status message announcing that `name` joined
    pub fn joined(name: ParticipantName, at: Timestamp) -> Self {
        Self::status(name, JOIN_TEXT, at)
    }

    /// System-status message announcing that `name` left
    pub fn departed(name: ParticipantName, at: Timestamp) -> Self {
        Self::status(name, DEPARTURE_TEXT, at)
    }

    fn status(name: ParticipantName, text: &'static str, at: Timestamp) -> Self {
        Self::new(
            name,
            Recipient::Everyone,
            MessageText::system(text),
            MessageKind::SystemStatus,
            at,
        )
    }

    /// Visibility rule for message listing.
    ///
    /// A viewer sees broadcasts, messages addressed to them and messages they
    /// sent. Without a viewer only broadcasts are visible.
    pub fn is_visible_to(&self, viewer: Option<&ParticipantName>) -> bool {
        match viewer {
            Some(viewer) => self.to.includes(viewer) || &self.from == viewer,
            None => self.to == Recipient::Everyone,
        }
    }

    pub fn is_authored_by(&self, name: &ParticipantName) -> bool {
        &self.from == name
    }

    /// System-status messages are immutable
    pub fn is_editable(&self) -> bool {
        self.kind != MessageKind::SystemStatus
    }

    /// Replace the text and refresh the time
    pub fn edit(&mut self, text: MessageText, at: Timestamp) {
        self.text = text;
        self.time = at;
    }
}
