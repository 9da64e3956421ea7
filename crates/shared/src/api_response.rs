//! # 送信成功レスポンス
//!
//! `POST /api/send-zeel` の成功時レスポンス `{ "success": true, "id": "..." }`。

use serde::{Deserialize, Serialize};

/// 送信成功レスポンス
///
/// `id` は提供元が採番したメッセージ ID。返されなかった場合はフィールドごと省略する。
///
/// ## 使用例
///
/// ```
/// use zeel_shared::SendResponse;
///
/// let response = SendResponse::sent(Some("msg-1".to_string()));
/// assert!(response.success);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id:      Option<String>,
}

impl SendResponse {
    /// 送信成功レスポンスを作成する
    pub fn sent(id: Option<String>) -> Self {
        Self { success: true, id }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_idありのserialize結果() {
        let json = serde_json::to_value(SendResponse::sent(Some("re_123".to_string()))).unwrap();

        assert_eq!(json, serde_json::json!({ "success": true, "id": "re_123" }));
    }

    #[test]
    fn test_idなしではidフィールドを省略する() {
        let json = serde_json::to_value(SendResponse::sent(None)).unwrap();

        assert_eq!(json, serde_json::json!({ "success": true }));
    }

    #[test]
    fn test_deserializeでidが無くても読める() {
        let response: SendResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();

        assert_eq!(response, SendResponse::sent(None));
    }
}
