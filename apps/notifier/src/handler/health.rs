//! # ヘルスチェックハンドラ
//!
//! 通知ハンドラの稼働状態を確認するためのエンドポイント。

use axum::Json;
use zeel_shared::HealthResponse;

/// ヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
