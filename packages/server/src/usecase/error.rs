//! UseCase 層のエラー定義
//!
//! Repository のエラーはすべてユースケースの境界でここに変換され、
//! インフラ層のエラーがそのまま UI 層へ伝播することはありません。

use thiserror::Error;

use crate::domain::RepositoryError;

/// 参加者の入室エラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JoinError {
    /// 同名の参加者が既に存在する
    #[error("participant '{0}' already exists")]
    DuplicateName(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// ハートビートのエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeartbeatError {
    #[error("participant '{0}' not found")]
    ParticipantNotFound(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// メッセージ送信のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SendMessageError {
    /// 送信者が参加中ではない
    #[error("sender '{0}' is not an active participant")]
    SenderNotActive(String),

    /// クライアントから送信できない種別
    #[error("messages of type '{0}' cannot be sent")]
    KindNotSendable(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// メッセージ編集のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditMessageError {
    #[error("message '{0}' not found")]
    MessageNotFound(String),

    /// 作成者以外、またはシステムメッセージへの編集
    #[error("'{requester}' cannot edit message '{id}'")]
    Forbidden { id: String, requester: String },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// メッセージ削除のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeleteMessageError {
    #[error("message '{0}' not found")]
    MessageNotFound(String),

    /// 作成者以外、またはシステムメッセージの削除
    #[error("'{requester}' cannot delete message '{id}'")]
    Forbidden { id: String, requester: String },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// 非アクティブ参加者の退室処理のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvictError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
