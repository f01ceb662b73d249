//! # メール送信ハンドラ
//!
//! 確認メール送信エンドポイントを提供する。
//!
//! ## エンドポイント
//!
//! - `POST /send-email` - メール 1 通の送信

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::Value;

use super::MessageResponse;
use crate::{error::ApiError, usecase::MailUseCase};

/// メール送信ハンドラの共有状態
pub struct MailState {
    pub usecase: Arc<dyn MailUseCase>,
}

/// POST /send-email
///
/// `email` は必須、`subject` / `body` は省略可能（既定文面を使う）。
pub async fn send_email(
    State(state): State<Arc<MailState>>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let to = body
        .get("email")
        .and_then(Value::as_str)
        .ok_or(ApiError::EmailRequired)?
        .to_string();
    let subject = body
        .get("subject")
        .and_then(Value::as_str)
        .map(str::to_string);
    let text = body.get("body").and_then(Value::as_str).map(str::to_string);

    state.usecase.send(to, subject, text).await?;

    Ok(Json(MessageResponse::new("Email sent successfully")))
}
