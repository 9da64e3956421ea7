//! # テスト用モック
//!
//! ハンドラ・ユースケーステストで使用するインメモリのメール送信モック。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! zeel-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use zeel_domain::notification::{EmailMessage, NotificationError, SendReceipt};

use crate::notification::NotificationSender;

/// モックの応答
#[derive(Debug, Clone)]
enum MockOutcome {
    Accept { id: Option<String> },
    Fail(NotificationError),
}

/// 送信内容を記録するモック送信器
///
/// `Clone` しても記録先は共有される。
#[derive(Debug, Clone)]
pub struct MockNotificationSender {
    outcome: MockOutcome,
    sent:    Arc<Mutex<Vec<EmailMessage>>>,
}

impl Default for MockNotificationSender {
    fn default() -> Self {
        Self::new()
    }
}

impl MockNotificationSender {
    /// 常に成功し、ID `"mock-message-id"` を返す
    pub fn new() -> Self {
        Self::accepting(Some("mock-message-id".to_string()))
    }

    /// 常に成功し、指定の ID を返す
    pub fn accepting(id: Option<String>) -> Self {
        Self::with_outcome(MockOutcome::Accept { id })
    }

    /// 常に提供元の拒否を返す
    pub fn rejecting(message: impl Into<String>) -> Self {
        Self::with_outcome(MockOutcome::Fail(NotificationError::Rejected(message.into())))
    }

    /// 常に送信失敗を返す
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_outcome(MockOutcome::Fail(NotificationError::SendFailed(
            message.into(),
        )))
    }

    fn with_outcome(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// 送信が試みられたメールの一覧
    pub fn sent_emails(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSender for MockNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<SendReceipt, NotificationError> {
        self.sent.lock().unwrap().push(email.clone());
        match &self.outcome {
            MockOutcome::Accept { id } => Ok(SendReceipt { id: id.clone() }),
            MockOutcome::Fail(e) => Err(e.clone()),
        }
    }

    fn backend_name(&self) -> &'static str {
        "mock"
    }
}
