//! UseCase: メッセージ編集処理
//!
//! 作成者本人のみが自分の通常メッセージ・個別メッセージを編集できます。
//! 変更されるのは本文と時刻のみで、送信者は変わりません。

use std::sync::Arc;

use crate::domain::{ChatRepository, Clock, Message, MessageId, MessageText, ParticipantName};

use super::error::EditMessageError;

/// メッセージ編集のユースケース
pub struct EditMessageUseCase {
    repository: Arc<dyn ChatRepository>,
    clock: Arc<dyn Clock>,
}

impl EditMessageUseCase {
    pub fn new(repository: Arc<dyn ChatRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// メッセージ編集を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Message)` - 編集後のメッセージ
    /// * `Err(EditMessageError::MessageNotFound)` - ID が存在しない（並行削除を含む）
    /// * `Err(EditMessageError::Forbidden)` - 作成者ではない、またはシステムメッセージ
    pub async fn execute(
        &self,
        id: MessageId,
        requester: &ParticipantName,
        text: MessageText,
    ) -> Result<Message, EditMessageError> {
        let Some(mut message) = self.repository.find_message(&id).await? else {
            return Err(EditMessageError::MessageNotFound(id.to_string()));
        };

        if !message.is_authored_by(requester) || !message.is_editable() {
            tracing::warn!(%id, requester = %requester, "edit rejected");
            return Err(EditMessageError::Forbidden {
                id: id.to_string(),
                requester: requester.to_string(),
            });
        }

        let now = self.clock.now();
        if !self
            .repository
            .update_message_text(&id, text.clone(), now)
            .await?
        {
            return Err(EditMessageError::MessageNotFound(id.to_string()));
        }

        message.edit(text, now);
        Ok(message)
    }
}
