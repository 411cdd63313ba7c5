//! UseCase: 非アクティブ参加者の退室処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - EvictInactiveParticipantsUseCase::execute() メソッド
//! - タイムアウトを超えた参加者の削除と退室メッセージの追加
//!
//! ### なぜこのテストが必要か
//! - ハートビートが途絶えた参加者が次回の実行で必ず削除されることを保証
//! - 退室メッセージが参加者ごとにちょうど 1 件だけ追加されることを確認
//! - 走査と削除の間にハートビート・削除が割り込んでもエラーにならないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：タイムアウトした参加者のみ削除
//! - エッジケース：走査後のハートビート、2 回連続の実行
//! - 異常系：一覧取得・個別削除でのストア障害

use std::{sync::Arc, time::Duration};

use crate::domain::{ChatRepository, Clock, Message, ParticipantName};

use super::error::EvictError;

/// 非アクティブ参加者退室のユースケース
#[derive(Clone)]
pub struct EvictInactiveParticipantsUseCase {
    repository: Arc<dyn ChatRepository>,
    clock: Arc<dyn Clock>,
    /// 最終ハートビートからこの時間を超えると退室させる
    inactivity_timeout: Duration,
}

impl EvictInactiveParticipantsUseCase {
    pub fn new(
        repository: Arc<dyn ChatRepository>,
        clock: Arc<dyn Clock>,
        inactivity_timeout: Duration,
    ) -> Self {
        Self {
            repository,
            clock,
            inactivity_timeout,
        }
    }

    /// 1 回分の退室処理を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<ParticipantName>)` - この実行で実際に退室させた参加者
    /// * `Err(EvictError)` - 参加者一覧を取得できなかった
    ///
    /// 個別の削除に失敗した参加者はログに記録して次回の実行に回す。
    pub async fn execute(&self) -> Result<Vec<ParticipantName>, EvictError> {
        let now = self.clock.now();
        let participants = self.repository.list_participants().await?;

        let mut evicted = Vec::new();
        for participant in participants
            .into_iter()
            .filter(|p| p.is_inactive(now, self.inactivity_timeout))
        {
            let farewell = Message::departed(participant.name.clone(), now);
            match self
                .repository
                .evict_participant(&participant.name, participant.last_status, farewell)
                .await
            {
                Ok(true) => {
                    tracing::info!(participant = %participant.name, "participant evicted after inactivity");
                    evicted.push(participant.name);
                }
                Ok(false) => {
                    tracing::debug!(
                        participant = %participant.name,
                        "participant changed since scan; skipping eviction"
                    );
                }
                Err(e) => {
                    tracing::error!(participant = %participant.name, error = %e, "failed to evict participant");
                }
            }
        }
        Ok(evicted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            DEPARTURE_TEXT, MessageKind, MockChatRepository, Participant, Recipient,
            RepositoryError, Timestamp,
        },
        infrastructure::{InMemoryChatRepository, ManualClock},
        usecase::{HeartbeatUseCase, JoinParticipantUseCase, ListParticipantsUseCase},
    };

    const TIMEOUT: Duration = Duration::from_secs(10);

    fn name(value: &str) -> ParticipantName {
        ParticipantName::new(value.to_string()).unwrap()
    }

    fn create_test_env() -> (Arc<InMemoryChatRepository>, Arc<ManualClock>) {
        (
            Arc::new(InMemoryChatRepository::open(8)),
            Arc::new(ManualClock::new(Timestamp::new(1_000_000))),
        )
    }

    fn departures(messages: &[Message]) -> Vec<&Message> {
        messages
            .iter()
            .filter(|m| m.text.as_str() == DEPARTURE_TEXT)
            .collect()
    }

    #[tokio::test]
    async fn test_inactive_participant_is_evicted_once() {
        // テスト項目: 11 秒ハートビートが無い参加者は削除され、退室メッセージが 1 件追加される
        // given (前提条件):
        let (repository, clock) = create_test_env();
        JoinParticipantUseCase::new(repository.clone(), clock.clone())
            .execute(name("ana"))
            .await
            .unwrap();
        clock.advance(Duration::from_secs(11));
        let usecase =
            EvictInactiveParticipantsUseCase::new(repository.clone(), clock.clone(), TIMEOUT);

        // when (操作):
        let evicted = usecase.execute().await.unwrap();

        // then (期待する結果):
        assert_eq!(evicted, vec![name("ana")]);
        let participants = ListParticipantsUseCase::new(repository.clone())
            .execute()
            .await
            .unwrap();
        assert!(participants.is_empty());

        let messages = repository.list_messages_visible_to(None).await.unwrap();
        let farewells = departures(&messages);
        assert_eq!(farewells.len(), 1);
        assert_eq!(farewells[0].from, name("ana"));
        assert_eq!(farewells[0].to, Recipient::Everyone);
        assert_eq!(farewells[0].kind, MessageKind::SystemStatus);
        assert_eq!(farewells[0].time, clock.now());

        // 2 回目の実行では何も起きない
        assert!(usecase.execute().await.unwrap().is_empty());
        let messages = repository.list_messages_visible_to(None).await.unwrap();
        assert_eq!(departures(&messages).len(), 1);
    }

    #[tokio::test]
    async fn test_active_participant_is_kept() {
        // テスト項目: タイムアウト内にハートビートした参加者は削除されない
        // given (前提条件):
        let (repository, clock) = create_test_env();
        let join = JoinParticipantUseCase::new(repository.clone(), clock.clone());
        join.execute(name("ana")).await.unwrap();
        join.execute(name("bia")).await.unwrap();
        clock.advance(Duration::from_secs(6));
        HeartbeatUseCase::new(repository.clone(), clock.clone())
            .execute(&name("bia"))
            .await
            .unwrap();
        clock.advance(Duration::from_secs(6));
        let usecase = EvictInactiveParticipantsUseCase::new(repository.clone(), clock, TIMEOUT);

        // when (操作):
        let evicted = usecase.execute().await.unwrap();

        // then (期待する結果):
        assert_eq!(evicted, vec![name("ana")]);
        let remaining = repository.list_participants().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, name("bia"));
    }

    #[tokio::test]
    async fn test_timeout_boundary_is_exclusive() {
        // テスト項目: ちょうどタイムアウト時間の経過ではまだ削除されない
        // given (前提条件):
        let (repository, clock) = create_test_env();
        JoinParticipantUseCase::new(repository.clone(), clock.clone())
            .execute(name("ana"))
            .await
            .unwrap();
        clock.advance(TIMEOUT);
        let usecase = EvictInactiveParticipantsUseCase::new(repository.clone(), clock, TIMEOUT);

        // when (操作):
        let evicted = usecase.execute().await.unwrap();

        // then (期待する結果):
        assert!(evicted.is_empty());
        assert_eq!(repository.list_participants().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_modification_is_not_an_error() {
        // テスト項目: 走査後に変更された参加者の削除は no-op として扱われる
        // given (前提条件): 一覧には現れるが削除時には既に変更済みの Repository
        let mut repository = MockChatRepository::new();
        repository.expect_list_participants().returning(|| {
            Ok(vec![Participant::new(name("ana"), Timestamp::new(0))])
        });
        repository
            .expect_evict_participant()
            .times(1)
            .returning(|_, _, _| Ok(false));
        let clock = Arc::new(ManualClock::new(Timestamp::new(60_000)));
        let usecase = EvictInactiveParticipantsUseCase::new(Arc::new(repository), clock, TIMEOUT);

        // when (操作):
        let result = usecase.execute().await;

        // then (期待する結果):
        assert_eq!(result, Ok(vec![]));
    }

    #[tokio::test]
    async fn test_single_eviction_failure_does_not_stop_the_run() {
        // テスト項目: 1 人の削除に失敗しても他の参加者の退室処理は続行される
        // given (前提条件):
        let mut repository = MockChatRepository::new();
        repository.expect_list_participants().returning(|| {
            Ok(vec![
                Participant::new(name("ana"), Timestamp::new(0)),
                Participant::new(name("bia"), Timestamp::new(0)),
            ])
        });
        repository
            .expect_evict_participant()
            .times(2)
            .returning(|who, _, _| {
                if who.as_str() == "ana" {
                    Err(RepositoryError::Unavailable("timeout".to_string()))
                } else {
                    Ok(true)
                }
            });
        let clock = Arc::new(ManualClock::new(Timestamp::new(60_000)));
        let usecase = EvictInactiveParticipantsUseCase::new(Arc::new(repository), clock, TIMEOUT);

        // when (操作):
        let result = usecase.execute().await;

        // then (期待する結果):
        assert_eq!(result, Ok(vec![name("bia")]));
    }

    #[tokio::test]
    async fn test_listing_failure_is_reported() {
        // テスト項目: 参加者一覧の取得に失敗した場合はエラーが返される
        // given (前提条件):
        let mut repository = MockChatRepository::new();
        repository
            .expect_list_participants()
            .returning(|| Err(RepositoryError::Closed));
        let clock = Arc::new(ManualClock::new(Timestamp::new(0)));
        let usecase = EvictInactiveParticipantsUseCase::new(Arc::new(repository), clock, TIMEOUT);

        // when (操作):
        let result = usecase.execute().await;

        // then (期待する結果):
        assert_eq!(result, Err(EvictError::Repository(RepositoryError::Closed)));
    }
}
