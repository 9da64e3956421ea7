//! # 融資申込送信ハンドラ
//!
//! `/api/send-zeel` のエンドポイント。
//!
//! ## 判定順序
//!
//! 1. `OPTIONS` → 200（ボディなし）
//! 2. `POST` 以外 → 405
//! 3. API キー未設定 → 500
//! 4. ボディが JSON オブジェクトでない → 400
//! 5. 必須項目の欠落 → 400
//! 6. 宛先を解決できない → 500
//! 7. 提供元の拒否 → 400、送信処理の失敗 → 500
//! 8. 成功 → 200 `{"success": true, "id": ...}`
//!
//! 1 と 2 はルーターのメソッド振り分けで処理する。
//! CORS ヘッダーはルーター全体のレイヤーで付与する。

use std::sync::Arc;

use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use serde_json::Value;
use zeel_domain::application::{LoanApplication, LoanApplicationPayload};
use zeel_shared::SendResponse;

use crate::{error::NotifierError, usecase::LoanNotificationUseCase};

/// 融資申込送信ハンドラの State
pub struct SendZeelState {
    pub usecase: LoanNotificationUseCase,
}

/// 融資申込を受け付け、支店の担当者へメールを送信する
///
/// ## リクエスト
///
/// ```json
/// {
///   "surname": "Бат",
///   "name": "Дорж",
///   "phone": "99112233",
///   "loanType": "business",
///   "loanTypeLabel": "Бизнесийн зээл",
///   "branch": "central",
///   "branchLabel": "Төв салбар",
///   "comment": ""
/// }
/// ```
///
/// ボディは `Content-Type` によらず JSON として解釈する。
/// 項目値は文字列以外も受け付け、`null`・`false`・`0` は未入力として扱う。
#[tracing::instrument(skip_all)]
pub async fn send_zeel(
    State(state): State<Arc<SendZeelState>>,
    body: Bytes,
) -> Result<Json<SendResponse>, NotifierError> {
    state.usecase.ensure_configured()?;

    let payload = parse_payload(&body)?;
    let application = LoanApplication::try_from(payload)?;

    let receipt = state.usecase.notify(&application).await?;

    Ok(Json(SendResponse::sent(receipt.id)))
}

/// ボディを申込ペイロードとして読む
///
/// 構文エラーとオブジェクト以外のボディ（配列・`null` など）は不正な JSON とする。
fn parse_payload(body: &[u8]) -> Result<LoanApplicationPayload, NotifierError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| NotifierError::InvalidJson)?;
    if !value.is_object() {
        return Err(NotifierError::InvalidJson);
    }
    serde_json::from_value(value).map_err(|_| NotifierError::InvalidJson)
}

/// CORS プリフライト
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// POST / OPTIONS 以外のメソッド
pub async fn method_not_allowed() -> NotifierError {
    NotifierError::MethodNotAllowed
}
