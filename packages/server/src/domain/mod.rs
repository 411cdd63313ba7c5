//! Domain layer for the chat application.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod clock;
pub mod entity;
pub mod error;
pub mod factory;
pub mod repository;
pub mod sanitize;
pub mod value_object;

pub use clock::Clock;
pub use entity::{DEPARTURE_TEXT, JOIN_TEXT, Message, Participant};
pub use error::{RepositoryError, ValueObjectError};
pub use factory::MessageIdFactory;
pub use repository::ChatRepository;
#[cfg(test)]
pub use repository::MockChatRepository;
pub use value_object::{
    BROADCAST_TARGET, MessageId, MessageKind, MessageText, ParticipantName, Recipient, Timestamp,
};
