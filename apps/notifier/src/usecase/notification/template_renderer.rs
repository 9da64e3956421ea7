//! # テンプレートレンダラー
//!
//! tera テンプレートエンジンで融資申込の通知メールを HTML/plaintext 両形式で生成する。
//!
//! ## 設計方針
//!
//! - **`include_str!` によるコンパイル時埋め込み**: テンプレートはバイナリに埋め込まれる
//! - **件名パターン**: `Зээлийн хүсэлт: {支店ラベル} - {名} {姓}`
//! - **行の組み立てはコード側**: 表示する行（ラベルと値）を順序付きで渡し、
//!   テンプレートはそれを並べるだけにする。コメントが無ければ行自体を渡さない
//! - **エスケープ**: tera の自動エスケープは無効にし、HTML テンプレートでは
//!   `escape_mail` フィルタで `&` `<` `>` `"` の 4 文字だけを置換する

use std::collections::HashMap;

use serde::Serialize;
use tera::{Context, Tera, Value};
use zeel_domain::{
    application::LoanApplication,
    email::EmailAddress,
    notification::{EmailMessage, NotificationError},
};

const TEMPLATE_NAME: &str = "loan_application";

/// メール本文の 1 行
#[derive(Debug, Serialize)]
struct MailRow<'a> {
    label: &'static str,
    value: &'a str,
}

/// HTML 特殊文字のうち `&` `<` `>` `"` を実体参照に置換する
///
/// 単一引用符など他の文字はそのまま残す。
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// tera フィルタ版の [`escape_html`]
///
/// 文字列以外は文字列表現に、`null` は空文字にする。
fn escape_mail_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let escaped = match value {
        Value::Null => String::new(),
        Value::String(s) => escape_html(s),
        other => escape_html(&other.to_string()),
    };
    Ok(Value::String(escaped))
}

/// 件名を生成する
pub fn build_subject(application: &LoanApplication) -> String {
    format!(
        "Зээлийн хүсэлт: {} - {} {}",
        application.branch_label(),
        application.name(),
        application.surname()
    )
}

/// テンプレートレンダラー
///
/// tera テンプレートエンジンをラップし、`LoanApplication` から
/// `EmailMessage` を生成する。
pub struct TemplateRenderer {
    engine: Tera,
}

impl TemplateRenderer {
    /// 新しいレンダラーインスタンスを作成
    ///
    /// `include_str!` で埋め込んだテンプレートを tera に登録する。
    pub fn new() -> Result<Self, NotificationError> {
        let mut engine = Tera::default();
        engine.autoescape_on(vec![]);
        engine.register_filter("escape_mail", escape_mail_filter);

        engine
            .add_raw_templates(vec![
                (
                    "loan_application.html",
                    include_str!("../../../templates/notifications/loan_application.html"),
                ),
                (
                    "loan_application.txt",
                    include_str!("../../../templates/notifications/loan_application.txt"),
                ),
            ])
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(Self { engine })
    }

    /// 申込から宛先 `to` へのメールメッセージを生成する
    pub fn render(
        &self,
        application: &LoanApplication,
        to: &EmailAddress,
    ) -> Result<EmailMessage, NotificationError> {
        let phone = application.phone_with_prefix();
        let mut rows = vec![
            MailRow {
                label: "Овог",
                value: application.surname(),
            },
            MailRow {
                label: "Нэр",
                value: application.name(),
            },
            MailRow {
                label: "Утас",
                value: &phone,
            },
            MailRow {
                label: "Зээлийн төрөл",
                value: application.loan_type_label(),
            },
            MailRow {
                label: "Салбар",
                value: application.branch_label(),
            },
        ];
        if let Some(comment) = application.comment() {
            rows.push(MailRow {
                label: "Тайлбар",
                value: comment,
            });
        }

        let mut context = Context::new();
        context.insert("rows", &rows);

        let html_body = self
            .engine
            .render(&format!("{TEMPLATE_NAME}.html"), &context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        let text_body = self
            .engine
            .render(&format!("{TEMPLATE_NAME}.txt"), &context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(EmailMessage {
            to: to.as_str().to_string(),
            subject: build_subject(application),
            html_body,
            text_body,
        })
    }
}
