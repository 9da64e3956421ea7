//! Noop 通知送信実装
//!
//! メールを実際に送信せず、ログ出力のみ行う。
//! 通知無効化時やローカル動作確認で使用する。

use async_trait::async_trait;
use zeel_domain::notification::{EmailMessage, NotificationError, SendReceipt};

use super::NotificationSender;

/// Noop 通知送信（ログ出力のみ）
#[derive(Debug, Clone)]
pub struct NoopNotificationSender;

#[async_trait]
impl NotificationSender for NoopNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<SendReceipt, NotificationError> {
        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            "Noop: メール送信をスキップ"
        );
        Ok(SendReceipt::default())
    }

    fn backend_name(&self) -> &'static str {
        "noop"
    }
}
