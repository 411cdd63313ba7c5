//! UseCase: ハートビート（生存通知）処理
//!
//! 参加者をアクティブに保つ唯一の手段。退室 API は存在せず、
//! タイムアウト時間内にハートビートが無いことが退室の合図になります。

use std::sync::Arc;

use crate::domain::{ChatRepository, Clock, ParticipantName};

use super::error::HeartbeatError;

/// ハートビートのユースケース
pub struct HeartbeatUseCase {
    repository: Arc<dyn ChatRepository>,
    clock: Arc<dyn Clock>,
}

impl HeartbeatUseCase {
    pub fn new(repository: Arc<dyn ChatRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// 参加者の last_status を現在時刻に更新する
    ///
    /// 存在しない参加者に対しては `HeartbeatError::ParticipantNotFound` を返し、参加者を作成しない。
    pub async fn execute(&self, name: &ParticipantName) -> Result<(), HeartbeatError> {
        let touched = self
            .repository
            .touch_participant(name, self.clock.now())
            .await?;

        if !touched {
            tracing::debug!(participant = %name, "heartbeat from unknown participant");
            return Err(HeartbeatError::ParticipantNotFound(name.to_string()));
        }
        Ok(())
    }
}
