//! # 通知ハンドラサーバー
//!
//! 融資申込を受け付けて支店の担当者へメールを送る。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `NOTIFIER_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `NOTIFIER_PORT` | No | ポート番号（デフォルト: `3000`） |
//! | `NOTIFICATION_BACKEND` | No | `resend` / `smtp` / `noop`（デフォルト: `resend`） |
//! | `RESEND_API_KEY` | **Yes**（resend） | Resend の API キー。未設定でも起動はする |
//! | `RESEND_API_URL` | No | Resend API のベース URL |
//! | `RESEND_FROM` | No | 送信元（デフォルト: `onboarding@resend.dev`） |
//! | `RESEND_TO_EMAIL` | ※ | 既定の宛先 |
//! | `BRANCH_EMAILS` | ※ | 支店別の宛先（JSON オブジェクト） |
//! | `SMTP_HOST` / `SMTP_PORT` | No | SMTP 接続先（デフォルト: `localhost:1025`） |
//! | `LOG_FORMAT` | No | `json` / `pretty` |
//!
//! ※ `RESEND_TO_EMAIL` と `BRANCH_EMAILS` のどちらも無い支店への送信は 500 になる。
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（Mailpit）
//! NOTIFICATION_BACKEND=smtp RESEND_TO_EMAIL=office@company.mn cargo run -p zeel-notifier
//!
//! # 本番環境
//! RESEND_API_KEY=re_... BRANCH_EMAILS='{"central":"office@company.mn"}' \
//!   cargo run -p zeel-notifier --release
//! ```

use std::net::SocketAddr;

use anyhow::Context as _;
use tokio::net::TcpListener;
use zeel_notifier::{
    app_builder::{build_router, build_state},
    config::NotifierConfig,
};
use zeel_shared::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let _tracing_guard = init_tracing("zeel-notifier");

    let config = NotifierConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "通知ハンドラを起動します: {}:{}",
        config.host,
        config.port
    );
    tracing::info!(
        default = config
            .routing
            .default_address()
            .map(|address| address.as_str())
            .unwrap_or("-"),
        branch_entries = config.routing.branch_entries(),
        "宛先ルーティングを読み込みました"
    );

    let state = build_state(&config)?;
    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("バインドアドレスが不正です")?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("{addr} にバインドできませんでした"))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
