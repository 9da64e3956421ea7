//! # 通知ユースケース
//!
//! 検証済みの融資申込から通知メールを組み立て、支店の担当者へ送信する。
//!
//! ## モジュール構成
//!
//! - [`template_renderer`] - tera テンプレートエンジンによるメール生成
//! - [`service`] - 宛先解決 + テンプレートレンダリング + 送信の統合

pub mod service;
pub mod template_renderer;

pub use service::LoanNotificationUseCase;
pub use template_renderer::{TemplateRenderer, escape_html};
