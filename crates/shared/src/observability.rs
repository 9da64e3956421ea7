//! # ログ初期化
//!
//! 通知ハンドラとテストメール送信ツールのトレーシング購読者を組み立てる。
//!
//! - 出力形式は `LOG_FORMAT`（`json` / `pretty`）で選ぶ
//! - レベルは `RUST_LOG` で上書きでき、未設定なら [`DEFAULT_FILTER`]
//! - 初期化後のログはすべて `app` スパン（`service` フィールド付き）の内側に出る

/// `RUST_LOG` 未設定時のフィルタ
pub const DEFAULT_FILTER: &str = "info,zeel=debug";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumString, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogFormat {
    /// 1 行 1 イベントの JSON。ログ収集基盤向け
    Json,
    /// 端末向け
    #[default]
    Pretty,
}

impl LogFormat {
    /// `LOG_FORMAT` の値から出力形式を決める
    ///
    /// 未設定・空文字は既定の [`Pretty`](LogFormat::Pretty)。
    /// 解釈できない値は `Err` で元の値を返す。
    pub fn from_setting(value: Option<&str>) -> Result<Self, String> {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            None => Ok(Self::default()),
            Some(v) => v.parse().map_err(|_| v.to_string()),
        }
    }
}

/// トレーシングを初期化し、`app` スパンに入る
///
/// 戻り値のガードを `main` の終わりまで保持すること。
/// `LOG_FORMAT` が不正な場合は pretty で初期化したうえで警告を出す。
#[cfg(feature = "observability")]
pub fn init_tracing(service: &'static str) -> tracing::span::EnteredSpan {
    use tracing_subscriber::{EnvFilter, Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let setting = std::env::var("LOG_FORMAT").ok();
    let format = LogFormat::from_setting(setting.as_deref());

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let layer = tracing_subscriber::fmt::layer().with_target(true);
    let layer = match format.clone().unwrap_or_default() {
        LogFormat::Json => layer
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => layer.boxed(),
    };

    tracing_subscriber::registry().with(filter).with(layer).init();

    if let Err(value) = &format {
        tracing::warn!(log_format = %value, "LOG_FORMAT を解釈できないため pretty で出力します");
    }

    let span = tracing::info_span!("app", service).entered();
    tracing::debug!(
        format = <&'static str>::from(format.unwrap_or_default()),
        "トレーシングを初期化しました"
    );
    span
}
