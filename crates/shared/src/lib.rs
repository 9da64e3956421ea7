//! # Zeel 共有ユーティリティ
//!
//! 通知ハンドラとフォームクライアントの双方で使う共通型を提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - レスポンスボディはサーバー（Serialize）とクライアント（Deserialize）で共有
//! - axum への依存は持たない（`IntoResponse` 変換は各サービスの責務）

pub mod api_response;
pub mod error_response;
pub mod health;
pub mod observability;

pub use api_response::SendResponse;
pub use error_response::ErrorResponse;
pub use health::HealthResponse;
