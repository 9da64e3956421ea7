//! # 通知ハンドラのエラー定義
//!
//! 通知ハンドラ固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! レスポンスボディは常に `{"error": "<メッセージ>"}` の形式。
//! メッセージはフォーム側がそのまま利用者に表示しうるため、英語の固定文言を使う。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use zeel_domain::{DomainError, notification::NotificationError};
use zeel_shared::ErrorResponse;

/// 宛先未設定時のメッセージ
pub const ROUTING_UNRESOLVED_MESSAGE: &str =
    "No email configured for this branch. Set RESEND_TO_EMAIL or BRANCH_EMAILS.";

/// 通知ハンドラで発生するエラー
#[derive(Debug, Error)]
pub enum NotifierError {
    /// POST / OPTIONS 以外のメソッド
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// API キー未設定
    #[error("RESEND_API_KEY is not configured")]
    NotConfigured,

    /// ボディが JSON として解釈できない
    #[error("Invalid JSON body")]
    InvalidJson,

    /// 必須項目の欠落など、申込内容の不備
    #[error(transparent)]
    InvalidApplication(#[from] DomainError),

    /// 支店の宛先を解決できない
    #[error("{}", ROUTING_UNRESOLVED_MESSAGE)]
    RoutingUnresolved { branch: String },

    /// 提供元が送信を拒否した
    #[error("{}", non_empty_or(.0, "Resend error"))]
    ProviderRejected(String),

    /// 送信処理自体が失敗した
    #[error("{}", non_empty_or(.0, "Failed to send email"))]
    DispatchFailed(String),

    /// メール本文の生成に失敗した
    #[error("Failed to render email")]
    Template(String),
}

fn non_empty_or<'a>(message: &'a str, fallback: &'a str) -> &'a str {
    if message.trim().is_empty() {
        fallback
    } else {
        message
    }
}

impl From<NotificationError> for NotifierError {
    fn from(e: NotificationError) -> Self {
        match e {
            NotificationError::Rejected(message) => Self::ProviderRejected(message),
            NotificationError::SendFailed(message) => Self::DispatchFailed(message),
            NotificationError::TemplateFailed(message) => Self::Template(message),
        }
    }
}

impl NotifierError {
    /// 対応する HTTP ステータス
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidJson | Self::InvalidApplication(_) | Self::ProviderRejected(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotConfigured
            | Self::RoutingUnresolved { .. }
            | Self::DispatchFailed(_)
            | Self::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for NotifierError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            Self::RoutingUnresolved { branch } => {
                tracing::error!(branch = %branch, "支店の宛先が設定されていません");
            }
            Self::Template(detail) => {
                tracing::error!(error = %detail, "通知テンプレートのレンダリングに失敗");
            }
            Self::NotConfigured => {
                tracing::error!("RESEND_API_KEY が設定されていません");
            }
            other if status.is_server_error() => {
                tracing::error!(error = %other, "通知リクエストの処理に失敗");
            }
            other => {
                tracing::debug!(error = %other, status = %status, "通知リクエストを拒否");
            }
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
