//! # Zeel 融資申込フォーム
//!
//! 融資申込フォームの状態管理と送信を担当するクライアントライブラリ。
//! 画面描画には依存せず、入力・検証・送信・結果表示の状態だけを扱う。
//!
//! ## 設計方針
//!
//! - **状態とメソッドのみ**: UI フレームワークに依存しない
//! - **選択肢はドメイン層から**: 融資種別・支店のコードとラベルは
//!   `zeel-domain` の列挙型を通じて通知ハンドラと共有する
//! - **送信は trait 越し**: [`client::SubmissionClient`] を差し替えてテストする
//!
//! ## モジュール構成
//!
//! - [`client`] - 通知ハンドラへの送信クライアント
//! - [`controller`] - フォームの下書き・検証・送信
//! - [`messages`] - 利用者に表示する文言
//! - [`select`] - 検索可能なドロップダウン

pub mod client;
pub mod controller;
pub mod messages;
pub mod select;

pub use client::{HttpSubmissionClient, SubmissionClient, SubmitError, SubmitOutcome};
pub use controller::{FormController, FormField, LoanDraft, MessageKind, SubmitMessage};
pub use select::SearchableSelect;
