//! # 通知ハンドラ設定
//!
//! 環境変数から通知ハンドラの設定を読み込む。
//!
//! 値が空文字列の環境変数は未設定として扱う。
//! 支店別宛先（`BRANCH_EMAILS`）や送信元アドレスの形式不正は起動時にエラーとする。

use std::env;

use secrecy::SecretString;
use thiserror::Error;
use zeel_domain::{email::EmailAddress, routing::RoutingTable};
use zeel_infra::notification::DEFAULT_RESEND_API_URL;

/// 送信元アドレスの既定値
pub const DEFAULT_FROM_ADDRESS: &str = "onboarding@resend.dev";

/// 設定読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{variable} は有効なポート番号である必要があります: {value}")]
    InvalidPort { variable: &'static str, value: String },

    #[error("NOTIFICATION_BACKEND が不正です（resend / smtp / noop のいずれか）: {0}")]
    UnknownBackend(String),

    #[error("{variable} が不正です: {reason}")]
    InvalidValue { variable: &'static str, reason: String },
}

/// 通知ハンドラの設定
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// バインドアドレス
    pub host:         String,
    /// ポート番号
    pub port:         u16,
    /// メール送信設定
    pub notification: NotificationConfig,
    /// 支店 → 宛先のルーティング表
    pub routing:      RoutingTable,
}

/// メール送信バックエンド
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationBackend {
    /// Resend HTTP API（本番用）
    Resend,
    /// SMTP（Mailpit 開発用）
    Smtp,
    /// 送信しない
    Noop,
}

/// メール送信設定
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    pub backend:        NotificationBackend,
    /// Resend の API キー（`RESEND_API_KEY`）
    pub resend_api_key: Option<SecretString>,
    /// Resend API のベース URL（`RESEND_API_URL`）
    pub resend_api_url: String,
    /// 送信元アドレス（`RESEND_FROM`）
    pub from_address:   String,
    /// SMTP ホスト（`SMTP_HOST`）
    pub smtp_host:      String,
    /// SMTP ポート（`SMTP_PORT`）
    pub smtp_port:      u16,
}

impl NotifierConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// テストでは環境変数の代わりに固定のマップを渡す。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host = get("NOTIFIER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_port("NOTIFIER_PORT", get("NOTIFIER_PORT"), 3000)?;

        let backend = match get("NOTIFICATION_BACKEND").as_deref() {
            None | Some("resend") => NotificationBackend::Resend,
            Some("smtp") => NotificationBackend::Smtp,
            Some("noop") => NotificationBackend::Noop,
            Some(other) => return Err(ConfigError::UnknownBackend(other.to_string())),
        };

        let from_address = match get("RESEND_FROM") {
            Some(from) => EmailAddress::new(from)
                .map_err(|e| invalid_value("RESEND_FROM", e))?
                .to_string(),
            None => DEFAULT_FROM_ADDRESS.to_string(),
        };

        let notification = NotificationConfig {
            backend,
            resend_api_key: get("RESEND_API_KEY").map(SecretString::new),
            resend_api_url: get("RESEND_API_URL")
                .unwrap_or_else(|| DEFAULT_RESEND_API_URL.to_string()),
            from_address,
            smtp_host: get("SMTP_HOST").unwrap_or_else(|| "localhost".to_string()),
            smtp_port: parse_port("SMTP_PORT", get("SMTP_PORT"), 1025)?,
        };

        let default = get("RESEND_TO_EMAIL")
            .map(EmailAddress::new)
            .transpose()
            .map_err(|e| invalid_value("RESEND_TO_EMAIL", e))?;
        let per_branch = get("BRANCH_EMAILS")
            .map(|json| RoutingTable::parse_branch_emails(&json))
            .transpose()
            .map_err(|e| invalid_value("BRANCH_EMAILS", e))?
            .unwrap_or_default();

        Ok(Self {
            host,
            port,
            notification,
            routing: RoutingTable::new(default, per_branch),
        })
    }
}

fn parse_port(
    variable: &'static str,
    value: Option<String>,
    default: u16,
) -> Result<u16, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort { variable, value }),
    }
}

fn invalid_value(variable: &'static str, reason: impl ToString) -> ConfigError {
    ConfigError::InvalidValue {
        variable,
        reason: reason.to_string(),
    }
}
