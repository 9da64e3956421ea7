//! # 通知送信
//!
//! メール通知の送信を担当するインフラストラクチャモジュール。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: `NotificationSender` trait でメール送信を抽象化
//! - **3 つの実装**: Resend（本番用）、SMTP（Mailpit 開発用）、Noop（通知無効化用）
//! - **環境変数切替**: `NOTIFICATION_BACKEND` でランタイム選択
//! - **再送しない**: 失敗はそのまま呼び出し元へ返す

mod noop;
mod resend;
mod smtp;

use async_trait::async_trait;
pub use noop::NoopNotificationSender;
pub use resend::{DEFAULT_RESEND_API_URL, ResendNotificationSender};
pub use smtp::SmtpNotificationSender;
use zeel_domain::notification::{EmailMessage, NotificationError, SendReceipt};

/// メール送信トレイト
///
/// 通知基盤の中核。メール送信の具体的な方法を抽象化する。
///
/// # エラー
///
/// - 提供元が送信を拒否した場合は [`NotificationError::Rejected`]
/// - 通信障害など送信処理自体が失敗した場合は [`NotificationError::SendFailed`]
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// メールを送信する
    async fn send_email(&self, email: &EmailMessage) -> Result<SendReceipt, NotificationError>;

    /// ログ出力用のバックエンド名
    fn backend_name(&self) -> &'static str;
}
