//! InMemory Chat Repository 実装
//!
//! ドメイン層が定義する ChatRepository trait の具体的な実装。
//! Vec をインメモリ DB として使用します。
//!
//! ## コネクション
//!
//! 各操作は開始時にコネクション（Semaphore の許可）を取得し、続けて状態ロックを取得します。
//! どちらもガードとして保持されるため、成功・失敗どちらの経路でもスコープ終了時に解放されます。
//! `close()` 後は Semaphore が閉じられ、以降の操作は `RepositoryError::Closed` になります。
//!
//! ## 技術的負債
//!
//! 参加者名の一意性はこの実装が書き込みロック下で保証しています。
//! PostgreSQL などの DBMS を実装する際は、name に UNIQUE 制約を付けて
//! 同じ `RepositoryError::DuplicateParticipant` に変換する必要があります。

use async_trait::async_trait;
use tokio::sync::{RwLock, Semaphore, SemaphorePermit};

use crate::domain::{
    ChatRepository, Message, MessageId, MessageText, Participant, ParticipantName,
    RepositoryError, Timestamp,
};

/// 参加者とメッセージの 2 つのコレクション
#[derive(Debug, Default)]
struct ChatState {
    /// 参加者（登録順）
    participants: Vec<Participant>,
    /// メッセージ（作成順）
    messages: Vec<Message>,
}

/// インメモリ Chat Repository 実装
///
/// ドメイン層の ChatRepository trait を実装します（依存性の逆転）。
pub struct InMemoryChatRepository {
    state: RwLock<ChatState>,
    /// 同時に利用できるコネクション数
    connections: Semaphore,
}

impl InMemoryChatRepository {
    /// ストアを開く
    ///
    /// # Arguments
    ///
    /// * `max_connections` - 同時に実行できる操作数（0 は 1 として扱う）
    pub fn open(max_connections: usize) -> Self {
        let max_connections = max_connections.max(1);
        tracing::debug!(max_connections, "in-memory chat store opened");
        Self {
            state: RwLock::new(ChatState::default()),
            connections: Semaphore::new(max_connections),
        }
    }

    async fn connect(&self) -> Result<SemaphorePermit<'_>, RepositoryError> {
        self.connections
            .acquire()
            .await
            .map_err(|_| RepositoryError::Closed)
    }
}

#[async_trait]
impl ChatRepository for InMemoryChatRepository {
    async fn find_participant(
        &self,
        name: &ParticipantName,
    ) -> Result<Option<Participant>, RepositoryError> {
        let _conn = self.connect().await?;
        let state = self.state.read().await;
        Ok(state
            .participants
            .iter()
            .find(|p| &p.name == name)
            .cloned())
    }

    async fn list_participants(&self) -> Result<Vec<Participant>, RepositoryError> {
        let _conn = self.connect().await?;
        let state = self.state.read().await;
        Ok(state.participants.clone())
    }

    async fn register_participant(
        &self,
        participant: Participant,
        announcement: Message,
    ) -> Result<(), RepositoryError> {
        let _conn = self.connect().await?;
        let mut state = self.state.write().await;

        // 一意制約: 同名の参加者が存在する場合は何も書き込まない
        if state.participants.iter().any(|p| p.name == participant.name) {
            return Err(RepositoryError::DuplicateParticipant(
                participant.name.into_string(),
            ));
        }

        state.participants.push(participant);
        state.messages.push(announcement);
        Ok(())
    }

    async fn touch_participant(
        &self,
        name: &ParticipantName,
        at: Timestamp,
    ) -> Result<bool, RepositoryError> {
        let _conn = self.connect().await?;
        let mut state = self.state.write().await;
        match state.participants.iter_mut().find(|p| &p.name == name) {
            Some(participant) => {
                participant.last_status = at;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn evict_participant(
        &self,
        name: &ParticipantName,
        last_seen: Timestamp,
        farewell: Message,
    ) -> Result<bool, RepositoryError> {
        let _conn = self.connect().await?;
        let mut state = self.state.write().await;

        // 走査後に削除・更新された参加者は対象外（no-op）
        let Some(index) = state
            .participants
            .iter()
            .position(|p| &p.name == name && p.last_status == last_seen)
        else {
            return Ok(false);
        };

        state.participants.remove(index);
        state.messages.push(farewell);
        Ok(true)
    }

    async fn insert_message(&self, message: Message) -> Result<(), RepositoryError> {
        let _conn = self.connect().await?;
        let mut state = self.state.write().await;
        state.messages.push(message);
        Ok(())
    }

    async fn find_message(&self, id: &MessageId) -> Result<Option<Message>, RepositoryError> {
        let _conn = self.connect().await?;
        let state = self.state.read().await;
        Ok(state.messages.iter().find(|m| &m.id == id).cloned())
    }

    async fn list_messages_visible_to(
        &self,
        viewer: Option<ParticipantName>,
    ) -> Result<Vec<Message>, RepositoryError> {
        let _conn = self.connect().await?;
        let state = self.state.read().await;
        Ok(state
            .messages
            .iter()
            .filter(|m| m.is_visible_to(viewer.as_ref()))
            .cloned()
            .collect())
    }

    async fn update_message_text(
        &self,
        id: &MessageId,
        text: MessageText,
        at: Timestamp,
    ) -> Result<bool, RepositoryError> {
        let _conn = self.connect().await?;
        let mut state = self.state.write().await;
        match state.messages.iter_mut().find(|m| &m.id == id) {
            Some(message) => {
                message.edit(text, at);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_message(&self, id: &MessageId) -> Result<bool, RepositoryError> {
        let _conn = self.connect().await?;
        let mut state = self.state.write().await;
        let before = state.messages.len();
        state.messages.retain(|m| &m.id != id);
        Ok(state.messages.len() < before)
    }

    async fn close(&self) {
        self.connections.close();
        tracing::info!("in-memory chat store closed");
    }
}
