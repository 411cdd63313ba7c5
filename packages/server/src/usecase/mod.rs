//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層（HTTP ハンドラ、Sweeper）から呼び出され、Domain 層を操作します。

pub mod delete_message;
pub mod edit_message;
pub mod error;
pub mod evict_inactive_participants;
pub mod heartbeat;
pub mod join_participant;
pub mod list_messages;
pub mod list_participants;
pub mod send_message;

pub use delete_message::DeleteMessageUseCase;
pub use edit_message::EditMessageUseCase;
pub use error::{
    DeleteMessageError, EditMessageError, EvictError, HeartbeatError, JoinError,
    SendMessageError,
};
pub use evict_inactive_participants::EvictInactiveParticipantsUseCase;
pub use heartbeat::HeartbeatUseCase;
pub use join_participant::JoinParticipantUseCase;
pub use list_messages::ListMessagesUseCase;
pub use list_participants::ListParticipantsUseCase;
pub use send_message::SendMessageUseCase;
