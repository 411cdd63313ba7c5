//! Repository port for participants and messages.
//!
//! Each method is atomic with respect to the store. Methods that touch both
//! collections (`register_participant`, `evict_participant`) apply both writes
//! or neither.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::{
    Message, MessageId, MessageText, Participant, ParticipantName, RepositoryError, Timestamp,
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ChatRepository: Send + Sync {
    async fn find_participant(
        &self,
        name: &ParticipantName,
    ) -> Result<Option<Participant>, RepositoryError>;

    /// All participants in insertion order
    async fn list_participants(&self) -> Result<Vec<Participant>, RepositoryError>;

    /// Insert `participant` together with its join `announcement`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DuplicateParticipant` if the name is taken;
    /// nothing is written in that case.
    async fn register_participant(
        &self,
        participant: Participant,
        announcement: Message,
    ) -> Result<(), RepositoryError>;

    /// Set `last_status` of a participant. Returns `false` if it does not exist.
    async fn touch_participant(
        &self,
        name: &ParticipantName,
        at: Timestamp,
    ) -> Result<bool, RepositoryError>;

    /// Remove a participant whose `last_status` still equals `last_seen` and
    /// append `farewell`.
    ///
    /// Returns `false` and writes nothing when the participant is already gone
    /// or sent a heartbeat since `last_seen` was read.
    async fn evict_participant(
        &self,
        name: &ParticipantName,
        last_seen: Timestamp,
        farewell: Message,
    ) -> Result<bool, RepositoryError>;

    async fn insert_message(&self, message: Message) -> Result<(), RepositoryError>;

    async fn find_message(&self, id: &MessageId) -> Result<Option<Message>, RepositoryError>;

    /// Messages visible to `viewer`, in creation order
    async fn list_messages_visible_to(
        &self,
        viewer: Option<ParticipantName>,
    ) -> Result<Vec<Message>, RepositoryError>;

    /// Returns `false` if the message does not exist.
    async fn update_message_text(
        &self,
        id: &MessageId,
        text: MessageText,
        at: Timestamp,
    ) -> Result<bool, RepositoryError>;

    /// Returns `false` if the message does not exist.
    async fn delete_message(&self, id: &MessageId) -> Result<bool, RepositoryError>;

    /// Shut the store down. Later calls fail with `RepositoryError::Closed`.
    async fn close(&self);
}
