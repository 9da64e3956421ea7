//! Resend 通知送信実装
//!
//! Resend の HTTP API（`POST /emails`）でメールを送信する。本番環境で使用する。
//!
//! ## 結果の対応
//!
//! | 応答 | 結果 |
//! |------|------|
//! | 2xx | `SendReceipt { id }` |
//! | 2xx 以外 | `NotificationError::Rejected`（応答の `message`、無ければ `"Resend error"`） |
//! | 応答なし | `NotificationError::SendFailed` |

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use zeel_domain::notification::{EmailMessage, NotificationError, SendReceipt};

use super::NotificationSender;

/// Resend API のベース URL
pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";

/// 提供元がメッセージを返さなかった場合の拒否メッセージ
const FALLBACK_REJECTION_MESSAGE: &str = "Resend error";

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from:    &'a str,
    to:      [&'a str; 1],
    subject: &'a str,
    html:    &'a str,
    text:    &'a str,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResendErrorBody {
    message: Option<String>,
}

/// Resend 通知送信
///
/// `reqwest::Client` をラップする。API キーは `Authorization: Bearer` で渡す。
pub struct ResendNotificationSender {
    client:       reqwest::Client,
    base_url:     String,
    api_key:      SecretString,
    from_address: String,
}

impl ResendNotificationSender {
    /// 新しい Resend 送信インスタンスを作成
    ///
    /// # 引数
    ///
    /// - `base_url`: API のベース URL（通常は [`DEFAULT_RESEND_API_URL`]）
    /// - `api_key`: Resend の API キー
    /// - `from_address`: 送信元メールアドレス（Resend で検証済みのドメインであること）
    pub fn new(base_url: &str, api_key: SecretString, from_address: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            from_address,
        }
    }
}

#[async_trait]
impl NotificationSender for ResendNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<SendReceipt, NotificationError> {
        let url = format!("{}/emails", self.base_url);
        let request = SendEmailRequest {
            from:    &self.from_address,
            to:      [email.to.as_str()],
            subject: &email.subject,
            html:    &email.html_body,
            text:    &email.text_body,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| NotificationError::SendFailed(format!("Resend 送信失敗: {e}")))?;

        let status = response.status();
        if status.is_success() {
            let id = match response.json::<SendEmailResponse>().await {
                Ok(body) => body.id,
                Err(e) => {
                    tracing::warn!(error = %e, "Resend の応答ボディを解釈できませんでした");
                    None
                }
            };
            return Ok(SendReceipt { id });
        }

        let message = response
            .json::<ResendErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| FALLBACK_REJECTION_MESSAGE.to_string());

        tracing::warn!(status = %status, message = %message, "Resend が送信を拒否しました");
        Err(NotificationError::Rejected(message))
    }

    fn backend_name(&self) -> &'static str {
        "resend"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use wiremock::{
        Mock,
        MockServer,
        ResponseTemplate,
        matchers::{bearer_token, body_partial_json, method, path},
    };

    use super::*;

    fn make_email() -> EmailMessage {
        EmailMessage {
            to:        "central@company.mn".to_string(),
            subject:   "Зээлийн хүсэлт: Төв салбар - Дорж Бат".to_string(),
            html_body: "<p>html</p>".to_string(),
            text_body: "text".to_string(),
        }
    }

    fn make_sender(server: &MockServer) -> ResendNotificationSender {
        ResendNotificationSender::new(
            &server.uri(),
            SecretString::new("re_test_key".to_string()),
            "onboarding@resend.dev".to_string(),
        )
    }

    #[test]
    fn トレイトはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResendNotificationSender>();
    }

    #[tokio::test]
    async fn 送信成功時に提供元のidを返す() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .and(bearer_token("re_test_key"))
            .and(body_partial_json(serde_json::json!({
                "from": "onboarding@resend.dev",
                "to": ["central@company.mn"],
                "subject": "Зээлийн хүсэлт: Төв салбар - Дорж Бат",
                "html": "<p>html</p>",
                "text": "text"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let receipt = make_sender(&server).send_email(&make_email()).await.unwrap();

        assert_eq!(
            receipt.id.as_deref(),
            Some("49a3999c-0ce1-4ea6-ab68-afcd6dc2e794")
        );
    }

    #[tokio::test]
    async fn 拒否応答のmessageをrejectedで返す() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "statusCode": 422,
                "name": "validation_error",
                "message": "Invalid `to` field."
            })))
            .mount(&server)
            .await;

        let err = make_sender(&server)
            .send_email(&make_email())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            NotificationError::Rejected("Invalid `to` field.".to_string())
        );
    }

    #[tokio::test]
    async fn 拒否応答にmessageが無ければ既定文言を返す() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
            .mount(&server)
            .await;

        let err = make_sender(&server)
            .send_email(&make_email())
            .await
            .unwrap_err();

        assert_eq!(err, NotificationError::Rejected("Resend error".to_string()));
    }

    /// 何も待ち受けていないポートの URI
    fn closed_port_uri() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{port}")
    }

    #[tokio::test]
    async fn 接続できなければsend_failedを返す() {
        let uri = closed_port_uri();

        let sender = ResendNotificationSender::new(
            &uri,
            SecretString::new("re_test_key".to_string()),
            "onboarding@resend.dev".to_string(),
        );
        let err = sender.send_email(&make_email()).await.unwrap_err();

        assert!(matches!(err, NotificationError::SendFailed(_)));
    }
}
