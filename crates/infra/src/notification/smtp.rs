//! SMTP 通知送信実装
//!
//! lettre の `AsyncSmtpTransport` を使用してメールを送信する。
//! 開発環境では Mailpit（ローカル SMTP サーバー）に接続する。
//!
//! 恒久エラー（5xx 応答）とアドレス不正は提供元による拒否として扱い、
//! それ以外は送信失敗として扱う。

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport,
    AsyncTransport,
    Tokio1Executor,
    message::{Message, MultiPart, SinglePart, header::ContentType},
};
use zeel_domain::notification::{EmailMessage, NotificationError, SendReceipt};

use super::NotificationSender;

/// SMTP 通知送信
///
/// `lettre::AsyncSmtpTransport<Tokio1Executor>` をラップする。
pub struct SmtpNotificationSender {
    transport:    AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl SmtpNotificationSender {
    /// 新しい SMTP 送信インスタンスを作成
    ///
    /// # 引数
    ///
    /// - `host`: SMTP サーバーのホスト名（例: "localhost"）
    /// - `port`: SMTP サーバーのポート番号（例: 1025 for Mailpit）
    /// - `from_address`: 送信元メールアドレス
    pub fn new(host: &str, port: u16, from_address: String) -> Self {
        // builder_dangerous: TLS なしで接続（Mailpit 等のローカル SMTP 向け）
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self {
            transport,
            from_address,
        }
    }

    fn build_message(&self, email: &EmailMessage) -> Result<Message, NotificationError> {
        Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|e| NotificationError::SendFailed(format!("送信元アドレス不正: {e}")))?,
            )
            .to(email
                .to
                .parse()
                .map_err(|e| NotificationError::Rejected(format!("宛先アドレス不正: {e}")))?)
            .subject(&email.subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(email.text_body.clone()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(email.html_body.clone()),
                    ),
            )
            .map_err(|e| NotificationError::SendFailed(format!("メッセージ構築失敗: {e}")))
    }
}

#[async_trait]
impl NotificationSender for SmtpNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<SendReceipt, NotificationError> {
        let message = self.build_message(email)?;

        match self.transport.send(message).await {
            Ok(_) => Ok(SendReceipt::default()),
            Err(e) if e.is_permanent() => Err(NotificationError::Rejected(format!(
                "SMTP サーバーが送信を拒否しました: {e}"
            ))),
            Err(e) => Err(NotificationError::SendFailed(format!("SMTP 送信失敗: {e}"))),
        }
    }

    fn backend_name(&self) -> &'static str {
        "smtp"
    }
}
