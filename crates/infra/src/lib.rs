//! # Zeel インフラ層
//!
//! 外部システムとの通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **メール送信**: トランザクションメール提供元（Resend）、SMTP、Noop の送信実装
//!
//! ## 依存関係
//!
//! ```text
//! notifier → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`notification`] - メール送信トレイトと実装
//! - `mock` - テスト用モック（`test-utils` feature）

pub mod notification;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
