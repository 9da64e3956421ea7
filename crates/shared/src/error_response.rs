//! # エラーレスポンス
//!
//! 全失敗パスで共通のボディ `{ "error": "<message>" }` を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - HTTP ステータスとの対応は通知ハンドラ側のエラー型が持つ
//! - フォームはこの `error` をそのまま利用者に表示する

use serde::{Deserialize, Serialize};

/// エラーレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jsonシリアライズでerrorフィールドのみを持つ() {
        let json = serde_json::to_value(ErrorResponse::new("Method not allowed")).unwrap();

        assert_eq!(json, serde_json::json!({ "error": "Method not allowed" }));
    }

    #[test]
    fn test_jsonデシリアライズが正しく動作する() {
        let error: ErrorResponse =
            serde_json::from_str(r#"{"error":"Missing required fields"}"#).unwrap();

        assert_eq!(error.error, "Missing required fields");
    }
}
