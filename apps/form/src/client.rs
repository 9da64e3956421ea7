//! # 送信クライアント
//!
//! 通知ハンドラの `POST /api/send-zeel` を呼び出す。
//!
//! ## 結果の区別
//!
//! | 状況 | 戻り値 |
//! |------|--------|
//! | 2xx | `Ok(SubmitOutcome::Accepted { id })` |
//! | 2xx 以外 | `Ok(SubmitOutcome::Failed { status, error })` |
//! | 応答なし | `Err(SubmitError::Network)` |
//!
//! 応答ボディが JSON として読めない場合は、`id` / `error` を `None` として扱う。

use async_trait::async_trait;
use thiserror::Error;
use zeel_domain::application::LoanApplicationPayload;
use zeel_shared::{ErrorResponse, SendResponse};

/// 送信エンドポイントのパス
pub const SEND_ZEEL_PATH: &str = "/api/send-zeel";

/// 通知ハンドラからの応答
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 受理された
    Accepted { id: Option<String> },
    /// 拒否された（`error` はサーバーが返したメッセージ）
    Failed { status: u16, error: Option<String> },
}

/// 送信クライアントエラー
#[derive(Debug, Clone, Error)]
pub enum SubmitError {
    /// 通知ハンドラに到達できなかった
    #[error("ネットワークエラー: {0}")]
    Network(String),
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        SubmitError::Network(err.to_string())
    }
}

/// 申込送信トレイト
#[async_trait]
pub trait SubmissionClient: Send + Sync {
    /// 申込を送信する
    async fn submit(&self, payload: &LoanApplicationPayload)
    -> Result<SubmitOutcome, SubmitError>;
}

/// reqwest による送信クライアント
#[derive(Clone)]
pub struct HttpSubmissionClient {
    base_url: String,
    client:   reqwest::Client,
}

impl HttpSubmissionClient {
    /// 新しいクライアントを作成する
    ///
    /// # 引数
    ///
    /// - `base_url`: 通知ハンドラのベース URL（例: `http://localhost:3000`）
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client:   reqwest::Client::new(),
        }
    }

    /// 送信先の URL
    pub fn endpoint(&self) -> String {
        format!("{}{SEND_ZEEL_PATH}", self.base_url)
    }
}

#[async_trait]
impl SubmissionClient for HttpSubmissionClient {
    async fn submit(
        &self,
        payload: &LoanApplicationPayload,
    ) -> Result<SubmitOutcome, SubmitError> {
        let response = self
            .client
            .post(self.endpoint())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!(error = %e, "応答ボディを読み取れませんでした");
                Default::default()
            }
        };

        if status.is_success() {
            let id = serde_json::from_slice::<SendResponse>(&body)
                .ok()
                .and_then(|body| body.id);
            return Ok(SubmitOutcome::Accepted { id });
        }

        let error = serde_json::from_slice::<ErrorResponse>(&body)
            .ok()
            .map(|body| body.error)
            .filter(|error| !error.is_empty());
        tracing::debug!(status = %status, error = ?error, "申込が拒否されました");

        Ok(SubmitOutcome::Failed {
            status: status.as_u16(),
            error,
        })
    }
}
