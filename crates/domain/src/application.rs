//! # 融資申込
//!
//! フォームから通知ハンドラへ送られる申込データを定義する。
//!
//! | 型 | 役割 |
//! |---|------|
//! | [`LoanApplicationPayload`] | ワイヤ上の JSON 表現（全項目が任意） |
//! | [`LoanApplication`] | 必須項目を検証済みの申込 |
//!
//! ## ワイヤ形式
//!
//! ```json
//! {
//!   "surname": "Бат", "name": "Дорж", "phone": "99112233",
//!   "loanType": "car", "loanTypeLabel": "Автомашин зээл",
//!   "branch": "central", "branchLabel": "Төв салбар",
//!   "comment": ""
//! }
//! ```
//!
//! `loanType` は受け付けるが検証・ルーティングには使わない（ラベルのみ描画する）。

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{
    DomainError,
    loan::{Branch, ChoiceOption, LoanType},
};

/// 電話番号の国番号プレフィックス
pub const PHONE_PREFIX: &str = "+976";

/// 電話番号の最大桁数（国番号を除く）
pub const MAX_PHONE_DIGITS: usize = 8;

/// 入力された電話番号を数字のみ・最大 8 桁に整形する
///
/// 入力欄の表示制約であり、サーバー側の検証の代わりにはならない。
pub fn sanitize_phone_input(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(MAX_PHONE_DIGITS)
        .collect()
}

/// 国番号付きの表示用電話番号
pub fn format_phone(phone: &str) -> String {
    format!("{PHONE_PREFIX} {phone}")
}

/// 申込ペイロード（ワイヤ形式）
///
/// サーバーはどの項目も欠落しうる前提で受け取り、[`LoanApplication`] へ
/// 変換する際に必須項目を検証する。
///
/// 各項目は文字列以外の JSON 値も受け付ける（[`lenient_text`] を参照）。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplicationPayload {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub surname:         Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub name:            Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub phone:           Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub loan_type:       Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub loan_type_label: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub branch:          Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub branch_label:    Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub comment:         Option<String>,
}

impl LoanApplicationPayload {
    /// 選択肢からペイロードを組み立てる
    ///
    /// ラベルは選択肢から導出する。テキスト項目は前後の空白を除く。
    pub fn from_choices(
        surname: &str,
        name: &str,
        phone: &str,
        loan_type: LoanType,
        branch: Branch,
        comment: &str,
    ) -> Self {
        Self {
            surname:         Some(surname.trim().to_string()),
            name:            Some(name.trim().to_string()),
            phone:           Some(phone.trim().to_string()),
            loan_type:       Some(loan_type.code().to_string()),
            loan_type_label: Some(loan_type.label().to_string()),
            branch:          Some(branch.code().to_string()),
            branch_label:    Some(branch.label().to_string()),
            comment:         Some(comment.trim().to_string()),
        }
    }
}

/// 検証済みの融資申込
///
/// surname, name, phone, branch, branchLabel, loanTypeLabel が
/// 空でないことが保証されている。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanApplication {
    surname:         String,
    name:            String,
    phone:           String,
    loan_type:       Option<String>,
    loan_type_label: String,
    branch:          String,
    branch_label:    String,
    comment:         Option<String>,
}

impl LoanApplication {
    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// 国番号付きの電話番号（例: `+976 99112233`）
    pub fn phone_with_prefix(&self) -> String {
        format_phone(&self.phone)
    }

    /// 送信された融資種別コード（未検証）
    pub fn loan_type_code(&self) -> Option<&str> {
        self.loan_type.as_deref()
    }

    pub fn loan_type_label(&self) -> &str {
        &self.loan_type_label
    }

    /// 送信された支店コード（未検証）
    pub fn branch_code(&self) -> &str {
        &self.branch
    }

    /// 既知の支店であれば列挙値を返す
    pub fn branch(&self) -> Option<Branch> {
        Branch::from_code(&self.branch)
    }

    pub fn branch_label(&self) -> &str {
        &self.branch_label
    }

    /// 備考（空の場合は `None`）
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

impl TryFrom<LoanApplicationPayload> for LoanApplication {
    type Error = DomainError;

    fn try_from(payload: LoanApplicationPayload) -> Result<Self, Self::Error> {
        let mut missing = Vec::new();
        let mut required = |value: Option<String>, field: &'static str| -> String {
            match non_blank(value) {
                Some(v) => v,
                None => {
                    missing.push(field);
                    String::new()
                }
            }
        };

        let surname = required(payload.surname, "surname");
        let name = required(payload.name, "name");
        let phone = required(payload.phone, "phone");
        let branch = required(payload.branch, "branch");
        let branch_label = required(payload.branch_label, "branchLabel");
        let loan_type_label = required(payload.loan_type_label, "loanTypeLabel");

        if !missing.is_empty() {
            return Err(DomainError::MissingRequiredFields { fields: missing });
        }

        Ok(Self {
            surname,
            name,
            phone,
            loan_type: non_blank(payload.loan_type),
            loan_type_label,
            branch,
            branch_label,
            comment: non_blank(payload.comment),
        })
    }
}

/// 項目値を文字列として読む
///
/// 数値・真偽値は文字列表現にする。`null`、`false`、`0` は未入力として `None`。
/// 配列・オブジェクトは JSON 表現のまま保持する。
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }))
}

/// 前後の空白を除き、空であれば `None` にする
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn payload() -> LoanApplicationPayload {
        LoanApplicationPayload::from_choices(
            "Бат",
            "Дорж",
            "99112233",
            LoanType::Car,
            Branch::Central,
            "",
        )
    }

    #[rstest]
    #[case("99112233", "99112233")]
    #[case("9911-2233", "99112233")]
    #[case("+976 99 11 22 33", "97699112")]
    #[case("991122334455", "99112233")]
    #[case("abc", "")]
    #[case("１２３", "")]
    fn test_電話番号入力は数字8桁に整形される(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(sanitize_phone_input(raw), expected);
    }

    #[test]
    fn test_電話番号に国番号が付く() {
        assert_eq!(format_phone("99112233"), "+976 99112233");
    }

    #[rstest]
    fn test_選択肢からラベルが導出される(payload: LoanApplicationPayload) {
        assert_eq!(payload.loan_type.as_deref(), Some("car"));
        assert_eq!(payload.loan_type_label.as_deref(), Some("Автомашин зээл"));
        assert_eq!(payload.branch.as_deref(), Some("central"));
        assert_eq!(payload.branch_label.as_deref(), Some("Төв салбар"));
        assert_eq!(payload.comment.as_deref(), Some(""));
    }

    #[rstest]
    fn test_ワイヤ形式はcamelcaseになる(payload: LoanApplicationPayload) {
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "surname": "Бат",
                "name": "Дорж",
                "phone": "99112233",
                "loanType": "car",
                "loanTypeLabel": "Автомашин зээл",
                "branch": "central",
                "branchLabel": "Төв салбар",
                "comment": ""
            })
        );
    }

    #[rstest]
    fn test_必須項目が揃っていれば変換できる(payload: LoanApplicationPayload) {
        let application = LoanApplication::try_from(payload).unwrap();

        assert_eq!(application.surname(), "Бат");
        assert_eq!(application.name(), "Дорж");
        assert_eq!(application.phone_with_prefix(), "+976 99112233");
        assert_eq!(application.branch(), Some(Branch::Central));
        assert_eq!(application.loan_type_code(), Some("car"));
        assert_eq!(application.comment(), None);
    }

    #[rstest]
    #[case::surname("surname")]
    #[case::name("name")]
    #[case::phone("phone")]
    #[case::branch("branch")]
    #[case::branch_label("branchLabel")]
    #[case::loan_type_label("loanTypeLabel")]
    fn test_必須項目が欠けるとエラーになる(
        payload: LoanApplicationPayload,
        #[case] field: &'static str,
    ) {
        let mut json = serde_json::to_value(&payload).unwrap();
        json.as_object_mut().unwrap().remove(field);
        let payload: LoanApplicationPayload = serde_json::from_value(json).unwrap();

        let err = LoanApplication::try_from(payload).unwrap_err();

        assert_eq!(
            err,
            DomainError::MissingRequiredFields {
                fields: vec![field],
            }
        );
        assert_eq!(err.to_string(), "Missing required fields");
    }

    #[rstest]
    fn test_空白のみの項目は欠落として扱う(mut payload: LoanApplicationPayload) {
        payload.name = Some("   ".to_string());
        payload.loan_type_label = Some(String::new());

        let err = LoanApplication::try_from(payload).unwrap_err();

        assert_eq!(
            err,
            DomainError::MissingRequiredFields {
                fields: vec!["name", "loanTypeLabel"],
            }
        );
    }

    #[rstest]
    fn test_loan_typeが無くても受け付ける(mut payload: LoanApplicationPayload) {
        payload.loan_type = None;
        payload.comment = None;

        let application = LoanApplication::try_from(payload).unwrap();

        assert_eq!(application.loan_type_code(), None);
        assert_eq!(application.loan_type_label(), "Автомашин зээл");
    }

    #[rstest]
    fn test_未知の支店コードも受け付ける(mut payload: LoanApplicationPayload) {
        payload.branch = Some("gurvaljin".to_string());

        let application = LoanApplication::try_from(payload).unwrap();

        assert_eq!(application.branch_code(), "gurvaljin");
        assert_eq!(application.branch(), None);
    }

    #[rstest]
    fn test_備考があれば保持する(mut payload: LoanApplicationPayload) {
        payload.comment = Some("  Маргааш залгана уу  ".to_string());

        let application = LoanApplication::try_from(payload).unwrap();

        assert_eq!(application.comment(), Some("Маргааш залгана уу"));
    }

    #[rstest]
    #[case::number(serde_json::json!(99112233), Some("99112233"))]
    #[case::string(serde_json::json!("99112233"), Some("99112233"))]
    #[case::true_value(serde_json::json!(true), Some("true"))]
    #[case::false_value(serde_json::json!(false), None)]
    #[case::zero(serde_json::json!(0), None)]
    #[case::null(serde_json::Value::Null, None)]
    fn test_文字列以外の値も項目値として読む(
        #[case] phone: serde_json::Value,
        #[case] expected: Option<&str>,
    ) {
        let payload: LoanApplicationPayload =
            serde_json::from_value(serde_json::json!({ "phone": phone })).unwrap();

        assert_eq!(payload.phone.as_deref(), expected);
    }

    #[test]
    fn test_数値の電話番号でも変換できる() {
        let payload: LoanApplicationPayload = serde_json::from_value(serde_json::json!({
            "surname": "Бат",
            "name": "Дорж",
            "phone": 99112233,
            "loanTypeLabel": "Автомашин зээл",
            "branch": "central",
            "branchLabel": "Төв салбар"
        }))
        .unwrap();

        let application = LoanApplication::try_from(payload).unwrap();

        assert_eq!(application.phone_with_prefix(), "+976 99112233");
    }

    #[test]
    fn test_空のjsonオブジェクトは全項目欠落になる() {
        let payload: LoanApplicationPayload = serde_json::from_str("{}").unwrap();

        let err = LoanApplication::try_from(payload).unwrap_err();

        let DomainError::MissingRequiredFields { fields } = err else {
            panic!("expected MissingRequiredFields");
        };
        assert_eq!(fields.len(), 6);
    }
}
