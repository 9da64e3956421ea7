//! # HTTP ハンドラ
//!
//! 通知ハンドラの HTTP エンドポイントを定義する。
//!
//! ## エンドポイント一覧
//!
//! | メソッド | パス | 説明 |
//! |---------|------|------|
//! | POST | `/api/send-zeel` | 融資申込の通知メール送信 |
//! | OPTIONS | `/api/send-zeel` | CORS プリフライト |
//! | GET | `/health` | ヘルスチェック |

pub mod health;
pub mod send_zeel;

pub use health::health_check;
pub use send_zeel::{SendZeelState, method_not_allowed, preflight, send_zeel};
