//! # 通知
//!
//! 通知メールと送信結果のドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **送信元は送信器側で保持**: [`EmailMessage`] は宛先と本文のみを持つ
//! - **失敗の 2 分類**: 提供元が送信を拒否した場合（[`NotificationError::Rejected`]）と
//!   送信処理そのものが失敗した場合（[`NotificationError::SendFailed`]）を区別する。
//!   前者は宛先や要求内容の問題であることが多く、HTTP 400 として扱う

use thiserror::Error;

/// 通知送信エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    /// 提供元が送信を拒否した（宛先不正、認証エラーなど）
    #[error("{0}")]
    Rejected(String),

    /// 送信処理に失敗した（ネットワーク障害など）
    #[error("{0}")]
    SendFailed(String),

    /// テンプレートレンダリングに失敗
    #[error("テンプレートレンダリングに失敗: {0}")]
    TemplateFailed(String),
}

/// メールメッセージ
///
/// テンプレートレンダリングの出力。`NotificationSender` に渡される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// 送信先メールアドレス
    pub to:        String,
    /// 件名
    pub subject:   String,
    /// HTML 本文
    pub html_body: String,
    /// プレーンテキスト本文
    pub text_body: String,
}

/// 送信受付結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendReceipt {
    /// 提供元が採番したメッセージ ID（提供元が返さない場合は `None`）
    pub id: Option<String>,
}
