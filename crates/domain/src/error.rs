//! # ドメイン層エラー定義
//!
//! 申込の検証や値オブジェクト生成で発生するエラー。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `MissingRequiredFields` | 400 Bad Request | 必須項目の欠落 |
//! | `Validation` | 起動時エラー / 400 | 値オブジェクトの形式不正 |

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// 必須項目が欠落している
    ///
    /// レスポンスには項目名を含めない。`fields` はログ出力専用。
    #[error("Missing required fields")]
    MissingRequiredFields {
        /// 欠落していた項目（ワイヤ上のフィールド名）
        fields: Vec<&'static str>,
    },

    /// バリデーションエラー
    ///
    /// メールアドレスの形式不正など、値そのものがルールに違反している場合。
    #[error("バリデーションエラー: {0}")]
    Validation(String),
}
