//! # テストメール送信ツール
//!
//! サンプルの融資申込を通知ハンドラへ送信し、メールの見た目を確認する。
//! フォームと同じ送信クライアントを使う。
//!
//! ## 使い方
//!
//! ```bash
//! # ローカルの通知ハンドラ
//! cargo run --bin send-test-mail -p zeel-form
//!
//! # デプロイ先
//! API_URL=https://zeel.example.mn cargo run --bin send-test-mail -p zeel-form
//! ```
//!
//! 送信に失敗した場合は非ゼロで終了する。

use anyhow::bail;
use zeel_domain::{
    application::LoanApplicationPayload,
    loan::{Branch, LoanType},
};
use zeel_form::{HttpSubmissionClient, SubmissionClient, SubmitOutcome};
use zeel_shared::observability::init_tracing;

const DEFAULT_API_URL: &str = "http://localhost:3000";

fn sample_payload() -> LoanApplicationPayload {
    LoanApplicationPayload::from_choices(
        "Туршилт",
        "Тест",
        "99112233",
        LoanType::Business,
        Branch::Central,
        "Энэ бол имэйл загварыг шалгах туршилтын мэдээлэл.",
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let _tracing_guard = init_tracing("send-test-mail");

    let api_url = std::env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let client = HttpSubmissionClient::new(&api_url);

    println!("Sending test email...");
    println!("  API: {}", client.endpoint());
    println!();

    match client.submit(&sample_payload()).await? {
        SubmitOutcome::Accepted { id } => {
            println!("Success.");
            if let Some(id) = id {
                println!("  Resend id: {id}");
            }
            Ok(())
        }
        SubmitOutcome::Failed { status, error } => {
            bail!(
                "Failed: {status} {}",
                error.as_deref().unwrap_or("(no error message)")
            )
        }
    }
}
