//! UseCase: メッセージ履歴の取得
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ListMessagesUseCase::execute() メソッド
//! - 可視性ルール（全員宛・自分宛・自分が送信）と limit による直近 N 件の切り出し
//!
//! ### なぜこのテストが必要か
//! - 他人同士の個別メッセージが第三者に漏れないことを保証
//! - limit は「最初の N 件」ではなく「最新の N 件」を時系列順で返すことを確認

use std::{num::NonZeroUsize, sync::Arc};

use crate::domain::{ChatRepository, Message, ParticipantName, RepositoryError};

/// メッセージ履歴取得のユースケース
pub struct ListMessagesUseCase {
    repository: Arc<dyn ChatRepository>,
}

impl ListMessagesUseCase {
    pub fn new(repository: Arc<dyn ChatRepository>) -> Self {
        Self { repository }
    }

    /// 閲覧者に見えるメッセージを作成順で返す
    ///
    /// # Arguments
    ///
    /// * `viewer` - 閲覧者（`None` の場合は全員宛のみ）
    /// * `limit` - 指定時は最新 `limit` 件のみ（時系列順のまま）
    pub async fn execute(
        &self,
        viewer: Option<ParticipantName>,
        limit: Option<NonZeroUsize>,
    ) -> Result<Vec<Message>, RepositoryError> {
        let mut messages = self.repository.list_messages_visible_to(viewer).await?;

        if let Some(limit) = limit {
            let skip = messages.len().saturating_sub(limit.get());
            messages.drain(..skip);
        }
        Ok(messages)
    }
}
