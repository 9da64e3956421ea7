//! # ユースケース層
//!
//! 融資申込の通知処理を実装する。
//!
//! ## モジュール構成
//!
//! - [`notification`] - 宛先解決・メール生成・送信

pub mod notification;

pub use notification::{LoanNotificationUseCase, TemplateRenderer};
