//! # アプリケーション構築
//!
//! DI（送信器・State）の初期化とルーター構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    http::{
        HeaderValue,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS,
            ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
    },
    routing::{get, post},
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use zeel_infra::notification::{
    NoopNotificationSender,
    NotificationSender,
    ResendNotificationSender,
    SmtpNotificationSender,
};

use crate::{
    config::{NotificationBackend, NotificationConfig, NotifierConfig},
    handler::{SendZeelState, health_check, method_not_allowed, preflight, send_zeel},
    usecase::{LoanNotificationUseCase, TemplateRenderer},
};

/// 送信エンドポイントのパス
pub const SEND_ZEEL_PATH: &str = "/api/send-zeel";

/// 設定に応じた送信器を構築する
///
/// Resend バックエンドで API キーが未設定の場合は `None` を返す。
/// この場合サーバーは起動し、送信リクエストはすべて 500 になる。
pub fn build_sender(config: &NotificationConfig) -> Option<Arc<dyn NotificationSender>> {
    match config.backend {
        NotificationBackend::Resend => {
            let api_key = config.resend_api_key.clone()?;
            Some(Arc::new(ResendNotificationSender::new(
                &config.resend_api_url,
                api_key,
                config.from_address.clone(),
            )))
        }
        NotificationBackend::Smtp => Some(Arc::new(SmtpNotificationSender::new(
            &config.smtp_host,
            config.smtp_port,
            config.from_address.clone(),
        ))),
        NotificationBackend::Noop => Some(Arc::new(NoopNotificationSender)),
    }
}

/// 設定から State を構築する
pub fn build_state(config: &NotifierConfig) -> anyhow::Result<Arc<SendZeelState>> {
    let sender = build_sender(&config.notification);
    match &sender {
        Some(sender) => tracing::info!(backend = sender.backend_name(), "通知バックエンドを構成しました"),
        None => tracing::warn!("RESEND_API_KEY が未設定です。送信リクエストはすべて失敗します"),
    }
    if config.routing.default_address().is_none() && config.routing.branch_entries() == 0 {
        tracing::warn!("RESEND_TO_EMAIL / BRANCH_EMAILS が未設定です。送信リクエストはすべて失敗します");
    }

    let template_renderer = TemplateRenderer::new()?;
    let usecase = LoanNotificationUseCase::new(sender, template_renderer, config.routing.clone());

    Ok(Arc::new(SendZeelState { usecase }))
}

/// ルーターを構築する
///
/// CORS ヘッダーはエラーや 404 を含むすべての応答に付与する。
pub fn build_router(state: Arc<SendZeelState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            SEND_ZEEL_PATH,
            post(send_zeel)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
}
