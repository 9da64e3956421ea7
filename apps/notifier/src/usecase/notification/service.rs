//! # 融資申込通知サービス
//!
//! 宛先解決 → テンプレートレンダリング → メール送信を統合する。
//!
//! ## 設計方針
//!
//! - **宛先が決まるまで送信しない**: ルーティング表で宛先を解決できなければ
//!   送信器を呼ばずにエラーを返す
//! - **再送しない**: 送信器の結果をそのまま呼び出し元へ返す
//! - **依存性注入**: `NotificationSender` は trait で抽象化

use std::sync::Arc;

use zeel_domain::{
    application::LoanApplication,
    notification::{NotificationError, SendReceipt},
    routing::RoutingTable,
};
use zeel_infra::notification::NotificationSender;

use super::TemplateRenderer;
use crate::error::NotifierError;

/// 融資申込通知サービス
///
/// 送信器が `None` の場合は API キー未設定として扱い、すべての送信を拒否する。
pub struct LoanNotificationUseCase {
    sender:            Option<Arc<dyn NotificationSender>>,
    template_renderer: TemplateRenderer,
    routing:           RoutingTable,
}

impl LoanNotificationUseCase {
    pub fn new(
        sender: Option<Arc<dyn NotificationSender>>,
        template_renderer: TemplateRenderer,
        routing: RoutingTable,
    ) -> Self {
        Self {
            sender,
            template_renderer,
            routing,
        }
    }

    /// 送信器が構成済みであることを確認する
    pub fn ensure_configured(&self) -> Result<&dyn NotificationSender, NotifierError> {
        self.sender.as_deref().ok_or(NotifierError::NotConfigured)
    }

    /// 申込を支店の担当者へ通知する
    ///
    /// # エラー
    ///
    /// - 送信器が未構成: [`NotifierError::NotConfigured`]
    /// - 宛先を解決できない: [`NotifierError::RoutingUnresolved`]
    /// - 提供元が拒否: [`NotifierError::ProviderRejected`]
    /// - 送信処理の失敗: [`NotifierError::DispatchFailed`]
    #[tracing::instrument(
        skip_all,
        fields(
            branch = %application.branch_code(),
            loan_type = application.loan_type_code().unwrap_or("-"),
        )
    )]
    pub async fn notify(&self, application: &LoanApplication) -> Result<SendReceipt, NotifierError> {
        let sender = self.ensure_configured()?;

        let to = self
            .routing
            .resolve(application.branch_code())
            .ok_or_else(|| NotifierError::RoutingUnresolved {
                branch: application.branch_code().to_string(),
            })?;

        if application.branch().is_none() {
            tracing::warn!(
                branch = %application.branch_code(),
                "未知の支店コードです。既定の宛先へ送信します"
            );
        }

        let email = self.template_renderer.render(application, to)?;

        match sender.send_email(&email).await {
            Ok(receipt) => {
                tracing::info!(
                    backend = sender.backend_name(),
                    recipient = %to,
                    id = receipt.id.as_deref().unwrap_or("-"),
                    "通知メール送信成功"
                );
                Ok(receipt)
            }
            Err(e) => {
                tracing::warn!(
                    backend = sender.backend_name(),
                    recipient = %to,
                    error = %e,
                    "通知メール送信失敗"
                );
                Err(e.into())
            }
        }
    }
}
