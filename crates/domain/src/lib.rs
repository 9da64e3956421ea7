//! # Zeel ドメイン層
//!
//! 融資申込フォーム（クライアント）と通知ハンドラ（サーバー）の双方が
//! 参照する型を定義する。
//!
//! ## 設計方針
//!
//! - **選択肢の一元定義**: 融資種別・支店は列挙型として 1 箇所で定義し、
//!   フォームとハンドラでコードやラベルが食い違わないようにする
//! - **永続化なし**: 申込は 1 リクエストの間だけ存在する
//! - **インフラ非依存**: HTTP やメール送信の詳細には依存しない
//!
//! ## 依存関係の方向
//!
//! ```text
//! notifier / form → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`application`] - 申込ペイロードと検証済み申込
//! - [`email`] - メールアドレス値オブジェクト
//! - [`error`] - ドメイン層エラー
//! - [`loan`] - 融資種別・支店の選択肢
//! - [`notification`] - 送信メールと送信エラー
//! - [`routing`] - 支店別の宛先解決
//!
//! ## 使用例
//!
//! ```rust
//! use zeel_domain::loan::{Branch, ChoiceOption};
//!
//! let branch = Branch::from_code("central").unwrap();
//! assert_eq!(branch.label(), "Төв салбар");
//! ```

pub mod application;
pub mod email;
pub mod error;
pub mod loan;
pub mod notification;
pub mod routing;

pub use error::DomainError;
