//! # 登録ハンドラ
//!
//! 申込・サインイン・登録者一覧のエンドポイントを提供する。
//!
//! ## エンドポイント
//!
//! - `POST /signup` - 申込登録
//! - `POST /signin` - サインイン（登録有無の確認）
//! - `GET /Club_users` - 登録者一覧
//!
//! パスの `Club_users` は既存フロントエンドとの契約であり変更しない。

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chessclub_domain::registrant::SignupForm;
use serde::Serialize;
use serde_json::Value;

use super::MessageResponse;
use crate::{error::ApiError, usecase::RegistrationUseCase};

/// 登録ハンドラの共有状態
pub struct RegistrationState {
    pub usecase: Arc<dyn RegistrationUseCase>,
}

/// サインインレスポンス
#[derive(Debug, Serialize)]
pub struct SigninResponse {
    pub success: bool,
    pub message: String,
}

/// POST /signup
///
/// 7 つの必須フィールドの presence を検証順にチェックし、
/// 最初に欠けていたフィールド名を 400 で返す。
/// 型や書式（メールアドレスの形など）は検証しない。
pub async fn signup(
    State(state): State<Arc<RegistrationState>>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    for field in SignupForm::REQUIRED_FIELDS {
        if body.get(field).is_none() {
            return Err(ApiError::MissingField(field.to_string()));
        }
    }

    let form: SignupForm =
        serde_json::from_value(body).map_err(|e| ApiError::InvalidPayload(e.to_string()))?;

    state.usecase.signup(form).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Registration successful")),
    ))
}

/// POST /signin
///
/// email フィールドの presence のみ検証し、完全一致で登録有無を確認する。
pub async fn signin(
    State(state): State<Arc<RegistrationState>>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let email = body
        .get("email")
        .and_then(Value::as_str)
        .ok_or(ApiError::EmailRequired)?;

    state.usecase.signin(email).await?;

    Ok(Json(SigninResponse {
        success: true,
        message: "Sign in successful.".to_string(),
    }))
}

/// GET /Club_users
///
/// 全登録者を配列で返す。内部 ID はドメイン型が持たないため
/// レスポンスに混入しない。
pub async fn list_users(
    State(state): State<Arc<RegistrationState>>,
) -> Result<impl IntoResponse, ApiError> {
    let registrants = state.usecase.list_registrants().await?;
    Ok(Json(registrants))
}
