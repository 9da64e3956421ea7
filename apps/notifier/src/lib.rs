//! # Zeel 通知ハンドラ
//!
//! 融資申込フォームから送信された申込を受け付け、
//! 支店の担当者へ HTML メールで通知する HTTP サービス。
//!
//! ## 構成
//!
//! ```text
//! ┌──────────────┐  POST /api/send-zeel  ┌──────────────┐  HTTPS   ┌──────────────┐
//! │  zeel-form   │──────────────────────→│   Notifier   │─────────→│    Resend    │
//! └──────────────┘                       └──────────────┘          └──────────────┘
//! ```
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - 送信器・State の初期化とルーター構築
//! - [`config`] - 環境変数からの設定読み込み
//! - [`error`] - エラーと HTTP レスポンスへの変換
//! - [`handler`] - HTTP ハンドラ
//! - [`usecase`] - 宛先解決・メール生成・送信

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
