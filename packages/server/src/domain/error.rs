//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// ParticipantName validation error
    #[error("name cannot be empty")]
    ParticipantNameEmpty,

    /// ParticipantName too long error
    #[error("name cannot exceed {max} characters (got {actual})")]
    ParticipantNameTooLong { max: usize, actual: usize },

    /// ParticipantName collides with the broadcast target
    #[error("name '{0}' is reserved")]
    ParticipantNameReserved(String),

    /// Recipient validation error
    #[error("to cannot be empty")]
    RecipientEmpty,

    /// MessageText validation error
    #[error("text cannot be empty")]
    MessageTextEmpty,

    /// MessageText too long error
    #[error("text cannot exceed {max} characters (got {actual})")]
    MessageTextTooLong { max: usize, actual: usize },

    /// MessageKind not one of the sendable kinds
    #[error("type must be one of 'message' or 'private_message' (got: {0})")]
    MessageKindInvalid(String),

    /// MessageId invalid format error (not a valid UUID format)
    #[error("message id must be a valid UUID format (got: {0})")]
    MessageIdInvalidFormat(String),
}

/// Errors raised by a [`ChatRepository`](super::ChatRepository) implementation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A participant with the same name is already stored
    #[error("participant '{0}' already exists")]
    DuplicateParticipant(String),

    /// The store has been shut down
    #[error("store is closed")]
    Closed,

    /// Any other failure of the underlying store
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
