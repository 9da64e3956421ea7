//! # フォームコントローラー
//!
//! 融資申込フォームの下書き・項目別エラー・送信中フラグ・結果メッセージを管理する。
//!
//! ## 送信の流れ
//!
//! ```text
//! submit()
//!   ├─ prepare_submission()  検証 → ペイロード組み立て → submitting = true
//!   ├─ SubmissionClient::submit()
//!   └─ finish_submission()   結果メッセージ → submitting = false
//! ```
//!
//! UI が送信を別タスクで行う場合は、`prepare_submission` と
//! `finish_submission` を直接呼び出す。

use std::collections::BTreeMap;

use zeel_domain::{
    application::{LoanApplicationPayload, sanitize_phone_input},
    loan::{Branch, ChoiceOption, LoanType},
};

use crate::{
    client::{SubmissionClient, SubmitError, SubmitOutcome},
    messages,
};

/// フォーム項目
///
/// `&'static str` への変換はペイロードの項目名（camelCase）になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum FormField {
    Surname,
    Name,
    Phone,
    LoanType,
    Branch,
    Comment,
}

/// フォームの下書き
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoanDraft {
    pub surname:   String,
    pub name:      String,
    /// 数字のみ、最大 8 桁
    pub phone:     String,
    pub loan_type: Option<LoanType>,
    pub branch:    Option<Branch>,
    pub comment:   String,
}

/// 結果メッセージの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// 送信結果メッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl SubmitMessage {
    fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }
}

/// フォームコントローラー
pub struct FormController<C> {
    client:     C,
    draft:      LoanDraft,
    errors:     BTreeMap<FormField, &'static str>,
    submitting: bool,
    result:     Option<SubmitMessage>,
}

impl<C: SubmissionClient> FormController<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            draft: LoanDraft::default(),
            errors: BTreeMap::new(),
            submitting: false,
            result: None,
        }
    }

    pub fn draft(&self) -> &LoanDraft {
        &self.draft
    }

    pub fn errors(&self) -> &BTreeMap<FormField, &'static str> {
        &self.errors
    }

    pub fn error(&self, field: FormField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn result(&self) -> Option<&SubmitMessage> {
        self.result.as_ref()
    }

    /// 項目の値を更新する
    ///
    /// 電話番号は数字以外を除き 8 桁までに切り詰める。
    /// 融資種別・支店はコードで受け取り、未知のコードは選択を解除する。
    /// 当該項目のエラーと前回の結果メッセージは消える。
    pub fn update_field(&mut self, field: FormField, value: &str) {
        match field {
            FormField::Surname => self.draft.surname = value.to_string(),
            FormField::Name => self.draft.name = value.to_string(),
            FormField::Phone => self.draft.phone = sanitize_phone_input(value),
            FormField::LoanType => self.draft.loan_type = LoanType::from_code(value),
            FormField::Branch => self.draft.branch = Branch::from_code(value),
            FormField::Comment => self.draft.comment = value.to_string(),
        }
        self.errors.remove(&field);
        self.result = None;
    }

    /// 下書きを検証する
    ///
    /// 不備のある項目ごとにエラーを記録し、不備が無ければ `true` を返す。
    pub fn validate(&mut self) -> bool {
        self.errors.clear();

        let required_text = [
            (FormField::Surname, &self.draft.surname),
            (FormField::Name, &self.draft.name),
            (FormField::Phone, &self.draft.phone),
        ];
        for (field, value) in required_text {
            if value.trim().is_empty() {
                self.errors.insert(field, messages::REQUIRED_FIELD);
            }
        }
        if self.draft.loan_type.is_none() {
            self.errors
                .insert(FormField::LoanType, messages::LOAN_TYPE_REQUIRED);
        }
        if self.draft.branch.is_none() {
            self.errors.insert(FormField::Branch, messages::BRANCH_REQUIRED);
        }

        if !self.errors.is_empty() {
            let fields: Vec<&'static str> =
                self.errors.keys().map(|&f| <&'static str>::from(f)).collect();
            tracing::debug!(fields = ?fields, "入力に不備があります");
        }

        self.errors.is_empty()
    }

    /// 送信を開始する
    ///
    /// 送信中なら何もせず `None`。検証に失敗した場合も `None` で、
    /// 項目別エラーが記録される。成功すると送信中になり、送信するペイロードを返す。
    pub fn prepare_submission(&mut self) -> Option<LoanApplicationPayload> {
        if self.submitting {
            tracing::debug!("送信中のため再送信を無視しました");
            return None;
        }

        self.result = None;
        if !self.validate() {
            return None;
        }
        let (Some(loan_type), Some(branch)) = (self.draft.loan_type, self.draft.branch) else {
            return None;
        };

        self.submitting = true;
        Some(LoanApplicationPayload::from_choices(
            &self.draft.surname,
            &self.draft.name,
            &self.draft.phone,
            loan_type,
            branch,
            &self.draft.comment,
        ))
    }

    /// 送信結果を反映する
    ///
    /// 成功なら下書きを初期化する。いずれの場合も送信中を解除する。
    pub fn finish_submission(&mut self, outcome: Result<SubmitOutcome, SubmitError>) {
        self.submitting = false;
        self.result = Some(match outcome {
            Ok(SubmitOutcome::Accepted { .. }) => {
                self.draft = LoanDraft::default();
                self.errors.clear();
                SubmitMessage::success(messages::SUBMIT_SUCCEEDED)
            }
            Ok(SubmitOutcome::Failed { error, .. }) => SubmitMessage::error(
                error
                    .filter(|text| !text.is_empty())
                    .unwrap_or_else(|| messages::SUBMIT_FAILED.to_string()),
            ),
            Err(e) => {
                tracing::warn!(error = %e, "申込の送信に失敗しました");
                SubmitMessage::error(messages::CONNECTION_FAILED)
            }
        });
    }

    /// 検証して送信する
    ///
    /// 検証に失敗した場合や送信中の場合は通信しない。
    pub async fn submit(&mut self) {
        let Some(payload) = self.prepare_submission() else {
            return;
        };
        let outcome = self.client.submit(&payload).await;
        self.finish_submission(outcome);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    /// 送信されたペイロードを記録し、固定の結果を返すスタブ
    #[derive(Clone)]
    struct StubClient {
        outcome: Result<SubmitOutcome, SubmitError>,
        sent:    Arc<Mutex<Vec<LoanApplicationPayload>>>,
    }

    impl StubClient {
        fn returning(outcome: Result<SubmitOutcome, SubmitError>) -> Self {
            Self {
                outcome,
                sent: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn accepted() -> Self {
            Self::returning(Ok(SubmitOutcome::Accepted {
                id: Some("abc".to_string()),
            }))
        }

        fn sent(&self) -> Vec<LoanApplicationPayload> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SubmissionClient for StubClient {
        async fn submit(
            &self,
            payload: &LoanApplicationPayload,
        ) -> Result<SubmitOutcome, SubmitError> {
            self.sent.lock().unwrap().push(payload.clone());
            self.outcome.clone()
        }
    }

    fn fill_valid(form: &mut FormController<StubClient>) {
        form.update_field(FormField::Surname, " Бат ");
        form.update_field(FormField::Name, "Дорж");
        form.update_field(FormField::Phone, "99112233");
        form.update_field(FormField::LoanType, "business");
        form.update_field(FormField::Branch, "central");
        form.update_field(FormField::Comment, "  Маргааш залгана уу ");
    }

    #[test]
    fn test_初期状態はすべて空() {
        let form = FormController::new(StubClient::accepted());

        assert_eq!(form.draft(), &LoanDraft::default());
        assert!(form.errors().is_empty());
        assert!(!form.is_submitting());
        assert_eq!(form.result(), None);
    }

    #[rstest]
    #[case("99-11 22 33", "99112233")]
    #[case("991122334455", "99112233")]
    #[case("abc", "")]
    #[case("８８", "")]
    fn test_電話番号は数字のみ8桁まで(#[case] input: &str, #[case] expected: &str) {
        let mut form = FormController::new(StubClient::accepted());

        form.update_field(FormField::Phone, input);

        assert_eq!(form.draft().phone, expected);
    }

    #[test]
    fn test_未知のコードは選択を解除する() {
        let mut form = FormController::new(StubClient::accepted());
        form.update_field(FormField::Branch, "diesel");

        form.update_field(FormField::Branch, "gurvaljin");

        assert_eq!(form.draft().branch, None);
    }

    #[rstest]
    #[case(FormField::Surname, "surname")]
    #[case(FormField::Name, "name")]
    #[case(FormField::Phone, "phone")]
    #[case(FormField::LoanType, "loanType")]
    #[case(FormField::Branch, "branch")]
    #[case(FormField::Comment, "comment")]
    fn test_項目名はペイロードの項目名と一致する(#[case] field: FormField, #[case] expected: &str) {
        let name: &'static str = field.into();

        assert_eq!(name, expected);

        let payload = serde_json::to_value(LoanApplicationPayload::from_choices(
            "Бат",
            "Дорж",
            "99112233",
            LoanType::Car,
            Branch::Central,
            "note",
        ))
        .unwrap();
        assert!(payload.get(name).is_some());
    }

    #[test]
    fn test_空の下書きは全項目がエラー() {
        let mut form = FormController::new(StubClient::accepted());

        assert!(!form.validate());

        assert_eq!(form.error(FormField::Surname), Some("Заавал бөглөнө үү"));
        assert_eq!(form.error(FormField::Name), Some("Заавал бөглөнө үү"));
        assert_eq!(form.error(FormField::Phone), Some("Заавал бөглөнө үү"));
        assert_eq!(
            form.error(FormField::LoanType),
            Some("Зээлийн төрөл сонгоно уу")
        );
        assert_eq!(form.error(FormField::Branch), Some("Салбар сонгоно уу"));
        assert_eq!(form.error(FormField::Comment), None);
    }

    #[test]
    fn test_入力すると当該項目のエラーだけ消える() {
        let mut form = FormController::new(StubClient::accepted());
        form.validate();

        form.update_field(FormField::Surname, "Бат");

        assert_eq!(form.error(FormField::Surname), None);
        assert_eq!(form.error(FormField::Name), Some("Заавал бөглөнө үү"));
    }

    #[tokio::test]
    async fn test_姓が空白なら送信しない() {
        let client = StubClient::accepted();
        let mut form = FormController::new(client.clone());
        fill_valid(&mut form);
        form.update_field(FormField::Surname, "   ");

        form.submit().await;

        assert!(client.sent().is_empty());
        assert_eq!(form.error(FormField::Surname), Some("Заавал бөглөнө үү"));
        assert!(!form.is_submitting());
        assert_eq!(form.result(), None);
    }

    #[tokio::test]
    async fn test_送信内容はトリムしラベルを付ける() {
        let client = StubClient::accepted();
        let mut form = FormController::new(client.clone());
        fill_valid(&mut form);

        form.submit().await;

        let sent = client.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0],
            LoanApplicationPayload {
                surname:         Some("Бат".to_string()),
                name:            Some("Дорж".to_string()),
                phone:           Some("99112233".to_string()),
                loan_type:       Some("business".to_string()),
                loan_type_label: Some("Бизнесийн зээл".to_string()),
                branch:          Some("central".to_string()),
                branch_label:    Some("Төв салбар".to_string()),
                comment:         Some("Маргааш залгана уу".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn test_成功すると下書きを初期化し成功文言を表示する() {
        let mut form = FormController::new(StubClient::accepted());
        fill_valid(&mut form);

        form.submit().await;

        assert_eq!(form.draft(), &LoanDraft::default());
        assert_eq!(
            form.result(),
            Some(&SubmitMessage {
                kind: MessageKind::Success,
                text: "Таны хүсэлт амжилттай илгээгдлээ. Манай зээлийн эдийн засагч тантай холбогдох болно."
                    .to_string(),
            })
        );
        assert!(!form.is_submitting());
    }

    #[rstest]
    #[case::server_text(Some("Missing required fields"), "Missing required fields")]
    #[case::no_text(None, "Илгээхэд алдаа гарлаа. Дахин оролдоно уу.")]
    #[case::empty_text(Some(""), "Илгээхэд алдаа гарлаа. Дахин оролдоно уу.")]
    #[tokio::test]
    async fn test_拒否されたら下書きを残しエラー文言を表示する(
        #[case] error: Option<&str>,
        #[case] expected: &str,
    ) {
        let client = StubClient::returning(Ok(SubmitOutcome::Failed {
            status: 400,
            error:  error.map(str::to_string),
        }));
        let mut form = FormController::new(client);
        fill_valid(&mut form);

        form.submit().await;

        assert_eq!(form.draft().name, "Дорж");
        assert_eq!(form.result(), Some(&SubmitMessage::error(expected)));
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_通信失敗は接続エラー文言を表示する() {
        let client = StubClient::returning(Err(SubmitError::Network("refused".to_string())));
        let mut form = FormController::new(client);
        fill_valid(&mut form);

        form.submit().await;

        assert_eq!(
            form.result(),
            Some(&SubmitMessage::error("Холболт амжилтгүй. Дахин оролдоно уу."))
        );
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_送信中は再送信を受け付けない() {
        let mut form = FormController::new(StubClient::accepted());
        fill_valid(&mut form);

        assert!(form.prepare_submission().is_some());
        assert!(form.is_submitting());
        assert!(form.prepare_submission().is_none());
    }

    #[test]
    fn test_入力すると前回の結果メッセージが消える() {
        let mut form = FormController::new(StubClient::accepted());
        fill_valid(&mut form);
        form.prepare_submission();
        form.finish_submission(Err(SubmitError::Network("refused".to_string())));

        form.update_field(FormField::Comment, "");

        assert_eq!(form.result(), None);
    }

    #[test]
    fn test_ドロップダウンの選択を下書きに反映する() {
        let mut form = FormController::new(StubClient::accepted());
        let mut select = crate::select::SearchableSelect::<Branch>::new();
        select.type_filter("дизель");

        let options = select.filtered_options();
        let code = select.select(options[0]);
        form.update_field(FormField::Branch, code);

        assert_eq!(form.draft().branch, Some(Branch::Diesel));
    }
}
