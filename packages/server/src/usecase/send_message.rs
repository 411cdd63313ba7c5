//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - メッセージ送信処理（送信者の在室確認、メッセージ履歴への追加）
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：参加中の参加者のみが送信できる
//! - 送信者はリクエストの識別子から決まり、なりすましできないことを確認
//! - システムメッセージ種別はクライアントから送信できないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：全員宛メッセージ、個別宛メッセージの送信
//! - 異常系：未参加の送信者、送信不可の種別

use std::sync::Arc;

use crate::domain::{
    ChatRepository, Clock, Message, MessageKind, MessageText, ParticipantName, Recipient,
};

use super::error::SendMessageError;

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ChatRepository>,
    clock: Arc<dyn Clock>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(repository: Arc<dyn ChatRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `from` - リクエストの識別子から得た送信者（Domain Model）
    /// * `to` - 宛先
    /// * `text` - 本文
    /// * `kind` - `Chat` または `PrivateChat`
    ///
    /// # Returns
    ///
    /// * `Ok(Message)` - 保存されたメッセージ
    /// * `Err(SendMessageError)` - 送信失敗
    pub async fn execute(
        &self,
        from: ParticipantName,
        to: Recipient,
        text: MessageText,
        kind: MessageKind,
    ) -> Result<Message, SendMessageError> {
        if kind == MessageKind::SystemStatus {
            return Err(SendMessageError::KindNotSendable(kind.to_string()));
        }

        // 1. 送信者が参加中か確認
        if self.repository.find_participant(&from).await?.is_none() {
            tracing::warn!(sender = %from, "message rejected: sender is not active");
            return Err(SendMessageError::SenderNotActive(from.into_string()));
        }

        // 2. Repository 経由でメッセージを保存
        let message = Message::new(from, to, text, kind, self.clock.now());
        self.repository.insert_message(message.clone()).await?;

        tracing::debug!(
            id = %message.id,
            sender = %message.from,
            to = %message.to,
            kind = %message.kind,
            "message stored"
        );
        Ok(message)
    }
}
