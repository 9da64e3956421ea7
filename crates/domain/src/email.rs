//! # メールアドレス
//!
//! ルーティング表・送信元アドレスで使う値オブジェクト。

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// メールアドレス（値オブジェクト）
///
/// 生成時に最低限の構造検証を行う。`"名前 <addr@example.com>"` 形式の
/// 送信元表記もそのまま保持する。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// メールアドレスを作成する
    ///
    /// # バリデーション
    ///
    /// - 前後の空白を除いて空ではない
    /// - `local@domain` の形式である
    /// - 最大 255 文字
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return Err(DomainError::Validation(
                "メールアドレスは必須です".to_string(),
            ));
        }

        let Some((local, domain)) = value.rsplit_once('@') else {
            return Err(DomainError::Validation(format!(
                "メールアドレスの形式が不正です: {value}"
            )));
        };

        if local.is_empty() || domain.is_empty() {
            return Err(DomainError::Validation(format!(
                "メールアドレスの形式が不正です: {value}"
            )));
        }

        if value.len() > 255 {
            return Err(DomainError::Validation(
                "メールアドレスは255文字以内である必要があります".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("office@company.mn")]
    #[case("  central@company.mn  ")]
    #[case("Zeel <onboarding@resend.dev>")]
    fn test_正しい形式を受け付ける(#[case] input: &str) {
        let email = EmailAddress::new(input).unwrap();
        assert_eq!(email.as_str(), input.trim());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("no-at-mark")]
    #[case("@company.mn")]
    #[case("office@")]
    fn test_不正な形式を拒否する(#[case] input: &str) {
        assert!(EmailAddress::new(input).is_err());
    }

    #[test]
    fn test_255文字を超えると拒否する() {
        let long = format!("{}@company.mn", "a".repeat(250));
        assert!(EmailAddress::new(long).is_err());
    }

    #[test]
    fn test_jsonから検証付きでデシリアライズする() {
        let ok: Result<EmailAddress, _> = serde_json::from_str(r#""x@y.com""#);
        assert_eq!(ok.unwrap().as_str(), "x@y.com");

        let ng: Result<EmailAddress, _> = serde_json::from_str(r#""broken""#);
        assert!(ng.is_err());
    }
}
