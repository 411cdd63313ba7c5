//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity. Every constructor that
//! accepts user input sanitizes it first, so comparisons between value objects
//! are always made on sanitized text.

use std::fmt;

use uuid::Uuid;

use super::{error::ValueObjectError, sanitize::sanitize};

/// Reserved recipient meaning "every participant"
pub const BROADCAST_TARGET: &str = "Todos";

const PARTICIPANT_NAME_MAX_LEN: usize = 100;
const MESSAGE_TEXT_MAX_LEN: usize = 10000;

/// Participant name value object.
///
/// Unique identifier of a participant in the chat.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParticipantName(String);

impl ParticipantName {
    /// Create a new ParticipantName.
    ///
    /// # Arguments
    ///
    /// * `name` - The raw name as supplied by the client
    ///
    /// # Returns
    ///
    /// A Result containing the sanitized ParticipantName or an error if validation fails
    pub fn new(name: String) -> Result<Self, ValueObjectError> {
        let name = sanitize(&name);
        if name.is_empty() {
            return Err(ValueObjectError::ParticipantNameEmpty);
        }
        let len = name.chars().count();
        if len > PARTICIPANT_NAME_MAX_LEN {
            return Err(ValueObjectError::ParticipantNameTooLong {
                max: PARTICIPANT_NAME_MAX_LEN,
                actual: len,
            });
        }
        if name == BROADCAST_TARGET {
            return Err(ValueObjectError::ParticipantNameReserved(name));
        }
        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ParticipantName {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ParticipantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Addressee of a message: everyone, or a single participant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Recipient {
    Everyone,
    Participant(ParticipantName),
}

impl Recipient {
    /// Parse a raw `to` field. The broadcast target maps to [`Recipient::Everyone`].
    pub fn new(to: String) -> Result<Self, ValueObjectError> {
        let to = sanitize(&to);
        if to.is_empty() {
            return Err(ValueObjectError::RecipientEmpty);
        }
        if to == BROADCAST_TARGET {
            return Ok(Self::Everyone);
        }
        ParticipantName::new(to).map(Self::Participant)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Everyone => BROADCAST_TARGET,
            Self::Participant(name) => name.as_str(),
        }
    }

    /// Whether a message addressed here must be shown to `name`.
    pub fn includes(&self, name: &ParticipantName) -> bool {
        match self {
            Self::Everyone => true,
            Self::Participant(target) => target == name,
        }
    }
}

impl TryFrom<String> for Recipient {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message text value object.
///
/// Represents the text of a chat message with validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageText(String);

impl MessageText {
    /// Create a new MessageText from client input.
    ///
    /// # Arguments
    ///
    /// * `text` - The raw message text
    ///
    /// # Returns
    ///
    /// A Result containing the sanitized MessageText or an error if validation fails
    pub fn new(text: String) -> Result<Self, ValueObjectError> {
        let text = sanitize(&text);
        if text.is_empty() {
            return Err(ValueObjectError::MessageTextEmpty);
        }
        let len = text.chars().count();
        if len > MESSAGE_TEXT_MAX_LEN {
            return Err(ValueObjectError::MessageTextTooLong {
                max: MESSAGE_TEXT_MAX_LEN,
                actual: len,
            });
        }
        Ok(Self(text))
    }

    /// Text generated by the server itself; never user input.
    pub(crate) fn system(text: &'static str) -> Self {
        Self(text.to_string())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MessageText {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for MessageText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of a stored message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// Regular message, addressed to everyone or to a participant
    Chat,
    /// Private message between two participants
    PrivateChat,
    /// Join/departure notice generated by the server
    SystemStatus,
}

impl MessageKind {
    /// Parse a kind sent by a client. Only [`Chat`](Self::Chat) and
    /// [`PrivateChat`](Self::PrivateChat) can be sent.
    pub fn from_client(kind: &str) -> Result<Self, ValueObjectError> {
        match sanitize(kind).as_str() {
            "message" | "chat" => Ok(Self::Chat),
            "private_message" | "private-chat" => Ok(Self::PrivateChat),
            other => Err(ValueObjectError::MessageKindInvalid(other.to_string())),
        }
    }

    /// Wire name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chat => "message",
            Self::PrivateChat => "private_message",
            Self::SystemStatus => "status",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message identifier value object (UUID v4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId(Uuid);

impl MessageId {
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse a message id received from a client.
    pub fn parse(id: &str) -> Result<Self, ValueObjectError> {
        Uuid::parse_str(id.trim())
            .map(Self)
            .map_err(|_| ValueObjectError::MessageIdInvalidFormat(id.to_string()))
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp.
    ///
    /// # Arguments
    ///
    /// * `value` - Unix timestamp in milliseconds
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Milliseconds elapsed from `earlier` to `self` (negative if `earlier` is later).
    pub fn millis_since(&self, earlier: Timestamp) -> i64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
