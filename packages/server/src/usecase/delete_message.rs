//! UseCase: メッセージ削除処理

use std::sync::Arc;

use crate::domain::{ChatRepository, MessageId, ParticipantName};

use super::error::DeleteMessageError;

/// メッセージ削除のユースケース
pub struct DeleteMessageUseCase {
    repository: Arc<dyn ChatRepository>,
}

impl DeleteMessageUseCase {
    pub fn new(repository: Arc<dyn ChatRepository>) -> Self {
        Self { repository }
    }

    /// メッセージを完全に削除する
    ///
    /// 権限は編集と同じ：作成者本人の通常メッセージ・個別メッセージのみ削除できる。
    pub async fn execute(
        &self,
        id: MessageId,
        requester: &ParticipantName,
    ) -> Result<(), DeleteMessageError> {
        let Some(message) = self.repository.find_message(&id).await? else {
            return Err(DeleteMessageError::MessageNotFound(id.to_string()));
        };

        if !message.is_authored_by(requester) || !message.is_editable() {
            tracing::warn!(%id, requester = %requester, "delete rejected");
            return Err(DeleteMessageError::Forbidden {
                id: id.to_string(),
                requester: requester.to_string(),
            });
        }

        if !self.repository.delete_message(&id).await? {
            return Err(DeleteMessageError::MessageNotFound(id.to_string()));
        }

        tracing::debug!(%id, requester = %requester, "message deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{Message, MessageKind, MessageText, Recipient, Timestamp},
        infrastructure::InMemoryChatRepository,
    };

    fn name(value: &str) -> ParticipantName {
        ParticipantName::new(value.to_string()).unwrap()
    }

    async fn setup(kind: MessageKind) -> (Arc<InMemoryChatRepository>, MessageId) {
        let repository = Arc::new(InMemoryChatRepository::open(8));
        let message = Message::new(
            name("ana"),
            Recipient::Participant(name("bia")),
            MessageText::new("oi".to_string()).unwrap(),
            kind,
            Timestamp::new(0),
        );
        let id = message.id;
        repository.insert_message(message).await.unwrap();
        (repository, id)
    }

    #[tokio::test]
    async fn test_author_can_delete() {
        // テスト項目: 作成者はメッセージを削除できる
        // given (前提条件):
        let (repository, id) = setup(MessageKind::PrivateChat).await;
        let usecase = DeleteMessageUseCase::new(repository.clone());

        // when (操作):
        let result = usecase.execute(id, &name("ana")).await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert!(repository.find_message(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_recipient_cannot_delete() {
        // テスト項目: 宛先であっても作成者以外は削除できない
        // given (前提条件):
        let (repository, id) = setup(MessageKind::PrivateChat).await;
        let usecase = DeleteMessageUseCase::new(repository.clone());

        // when (操作):
        let result = usecase.execute(id, &name("bia")).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(DeleteMessageError::Forbidden {
                id: id.to_string(),
                requester: "bia".to_string(),
            })
        );
        assert!(repository.find_message(&id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_system_status_message_cannot_be_deleted() {
        // テスト項目: システムステータスメッセージは作成者名義でも削除できない
        // given (前提条件):
        let (repository, id) = setup(MessageKind::SystemStatus).await;
        let usecase = DeleteMessageUseCase::new(repository);

        // when (操作):
        let result = usecase.execute(id, &name("ana")).await;

        // then (期待する結果):
        assert!(matches!(result, Err(DeleteMessageError::Forbidden { .. })));
    }

    #[tokio::test]
    async fn test_deleting_twice_reports_not_found() {
        // テスト項目: 削除済みメッセージの再削除は NotFound になる
        // given (前提条件):
        let (repository, id) = setup(MessageKind::Chat).await;
        let usecase = DeleteMessageUseCase::new(repository);
        usecase.execute(id, &name("ana")).await.unwrap();

        // when (操作):
        let result = usecase.execute(id, &name("ana")).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(DeleteMessageError::MessageNotFound(id.to_string()))
        );
    }
}
