//! UseCase: 参加者一覧の取得

use std::sync::Arc;

use crate::domain::{ChatRepository, Participant, RepositoryError};

/// 参加者一覧取得のユースケース
pub struct ListParticipantsUseCase {
    repository: Arc<dyn ChatRepository>,
}

impl ListParticipantsUseCase {
    pub fn new(repository: Arc<dyn ChatRepository>) -> Self {
        Self { repository }
    }

    /// 現在の全参加者を入室順で返す（フィルタリングなし）
    pub async fn execute(&self) -> Result<Vec<Participant>, RepositoryError> {
        self.repository.list_participants().await
    }
}
