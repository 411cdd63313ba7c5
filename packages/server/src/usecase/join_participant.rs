//! UseCase: 参加者の入室処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinParticipantUseCase::execute() メソッド
//! - 参加者の入室処理（重複チェック、参加者と入室メッセージの登録）
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：同名の参加者は同時に 1 人しか存在できない
//! - 入室時に全員宛のシステムメッセージが 1 件だけ追加されることを保証
//! - 重複チェックをすり抜けた同時入室でも、Repository の一意制約で Conflict になることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規参加者の入室
//! - 異常系：同名での 2 回目の入室、同名での同時入室
//! - 異常系：ストア障害

use std::sync::Arc;

use crate::domain::{
    ChatRepository, Clock, Message, Participant, ParticipantName, RepositoryError,
};

use super::error::JoinError;

/// 参加者入室のユースケース
pub struct JoinParticipantUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ChatRepository>,
    clock: Arc<dyn Clock>,
}

impl JoinParticipantUseCase {
    /// 新しい JoinParticipantUseCase を作成
    pub fn new(repository: Arc<dyn ChatRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// 参加者入室を実行
    ///
    /// # Arguments
    ///
    /// * `name` - 入室する参加者名（サニタイズ済みの Domain Model）
    ///
    /// # Returns
    ///
    /// * `Ok(Participant)` - 登録された参加者
    /// * `Err(JoinError)` - 入室失敗
    pub async fn execute(&self, name: ParticipantName) -> Result<Participant, JoinError> {
        // 1. 重複チェック（高速パス。最終的な保証は Repository の一意制約）
        if self.repository.find_participant(&name).await?.is_some() {
            tracing::warn!(participant = %name, "join rejected: name already in use");
            return Err(JoinError::DuplicateName(name.into_string()));
        }

        // 2. 参加者と入室メッセージを 1 単位で登録
        let now = self.clock.now();
        let participant = Participant::new(name.clone(), now);
        let announcement = Message::joined(name, now);

        match self
            .repository
            .register_participant(participant.clone(), announcement)
            .await
        {
            Ok(()) => {
                tracing::info!(participant = %participant.name, "participant joined");
                Ok(participant)
            }
            Err(RepositoryError::DuplicateParticipant(name)) => {
                tracing::warn!(participant = %name, "join rejected: lost a concurrent join race");
                Err(JoinError::DuplicateName(name))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{JOIN_TEXT, MessageKind, MockChatRepository, Recipient, Timestamp},
        infrastructure::{InMemoryChatRepository, ManualClock},
    };

    const START: i64 = 1_700_000_000_000;

    fn create_test_repository() -> Arc<InMemoryChatRepository> {
        Arc::new(InMemoryChatRepository::open(8))
    }

    fn create_test_clock() -> Arc<ManualClock> {
        Arc::new(ManualClock::new(Timestamp::new(START)))
    }

    fn name(value: &str) -> ParticipantName {
        ParticipantName::new(value.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_join_participant_success() {
        // テスト項目: 新規参加者が入室でき、入室メッセージが全員宛に追加される
        // given (前提条件):
        let repository = create_test_repository();
        let usecase = JoinParticipantUseCase::new(repository.clone(), create_test_clock());

        // when (操作):
        let result = usecase.execute(name("ana")).await;

        // then (期待する結果):
        let participant = result.unwrap();
        assert_eq!(participant.name, name("ana"));
        assert_eq!(participant.last_status, Timestamp::new(START));

        let participants = repository.list_participants().await.unwrap();
        assert_eq!(participants, vec![participant]);

        let messages = repository.list_messages_visible_to(None).await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].from, name("ana"));
        assert_eq!(messages[0].to, Recipient::Everyone);
        assert_eq!(messages[0].kind, MessageKind::SystemStatus);
        assert_eq!(messages[0].text.as_str(), JOIN_TEXT);
        assert_eq!(messages[0].time, Timestamp::new(START));
    }

    #[tokio::test]
    async fn test_join_participant_duplicate_error() {
        // テスト項目: 同名での 2 回目の入室は Conflict になり、参加者は 1 人のまま
        // given (前提条件):
        let repository = create_test_repository();
        let usecase = JoinParticipantUseCase::new(repository.clone(), create_test_clock());
        usecase.execute(name("ana")).await.unwrap();

        // when (操作): サニタイズ後に同名となる名前で再度入室
        let result = usecase
            .execute(ParticipantName::new(" <b>ana</b> ".to_string()).unwrap())
            .await;

        // then (期待する結果):
        assert_eq!(result, Err(JoinError::DuplicateName("ana".to_string())));
        assert_eq!(repository.list_participants().await.unwrap().len(), 1);
        assert_eq!(
            repository.list_messages_visible_to(None).await.unwrap().len(),
            1
        );
    }

    #[tokio::test]
    async fn test_concurrent_joins_admit_exactly_one() {
        // テスト項目: 同名での同時入室は 1 件だけ成功する
        // given (前提条件):
        let repository = create_test_repository();
        let clock = create_test_clock();
        let first = JoinParticipantUseCase::new(repository.clone(), clock.clone());
        let second = JoinParticipantUseCase::new(repository.clone(), clock);

        // when (操作):
        let (a, b) = tokio::join!(first.execute(name("ana")), second.execute(name("ana")));

        // then (期待する結果):
        assert_eq!([a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count(), 1);
        assert_eq!(repository.list_participants().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_join_race_detected_by_store_constraint() {
        // テスト項目: 重複チェック通過後に一意制約違反となった場合も Conflict になる
        // given (前提条件): 存在チェックは空、登録時に一意制約違反となる Repository
        let mut repository = MockChatRepository::new();
        repository
            .expect_find_participant()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_register_participant()
            .times(1)
            .returning(|participant, _| {
                Err(RepositoryError::DuplicateParticipant(
                    participant.name.into_string(),
                ))
            });
        let usecase = JoinParticipantUseCase::new(Arc::new(repository), create_test_clock());

        // when (操作):
        let result = usecase.execute(name("ana")).await;

        // then (期待する結果):
        assert_eq!(result, Err(JoinError::DuplicateName("ana".to_string())));
    }

    #[tokio::test]
    async fn test_join_store_failure_is_reported() {
        // テスト項目: 登録時のストア障害は成功扱いにならずエラーとして返される
        // given (前提条件):
        let mut repository = MockChatRepository::new();
        repository
            .expect_find_participant()
            .returning(|_| Ok(None));
        repository
            .expect_register_participant()
            .returning(|_, _| Err(RepositoryError::Unavailable("disk full".to_string())));
        let usecase = JoinParticipantUseCase::new(Arc::new(repository), create_test_clock());

        // when (操作):
        let result = usecase.execute(name("ana")).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(JoinError::Repository(RepositoryError::Unavailable(
                "disk full".to_string()
            )))
        );
    }
}
