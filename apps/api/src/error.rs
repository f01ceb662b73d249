//! # API サービスエラー定義
//!
//! API サービス固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## エラー分類
//!
//! | 分類 | HTTP | ボディ |
//! |------|------|--------|
//! | バリデーション（必須フィールド欠落） | 400 | `{"error": ...}` |
//! | 未登録・レコードなし | 404 | `{"error": ...}` |
//! | ストレージ障害（リトライ後を含む） | 500 | `{"error": ..., "details": ...}` |
//! | メール送信失敗 | 500 | `{"error": ...}`（詳細はログのみ） |
//!
//! レスポンスのフィールド名と文言は既存フロントエンドとの契約であり変更しない。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chessclub_domain::notification::NotificationError;
use chessclub_infra::InfraError;
use serde::Serialize;
use thiserror::Error;

/// エラーレスポンスのボディ
///
/// `details` はストレージ障害時のみ含まれる。
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error:   String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// API サービスで発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// 必須フィールドの欠落
    #[error("必須フィールドがありません: {0}")]
    MissingField(String),

    /// リクエストボディの形式不正（フィールドは存在するが型が合わない等）
    #[error("リクエストボディが不正です: {0}")]
    InvalidPayload(String),

    /// email フィールドの欠落
    #[error("メールアドレスが指定されていません")]
    EmailRequired,

    /// 未登録のメールアドレスでのサインイン
    #[error("未登録のメールアドレスです")]
    EmailNotRegistered,

    /// 大会スケジュールが 1 件も存在しない
    #[error("大会スケジュールが見つかりません")]
    TimingsNotFound,

    /// 更新対象の固定 ID レコードが存在しない
    #[error("更新対象の大会スケジュールレコードが見つかりません")]
    TimingsRecordMissing,

    /// 申込登録の失敗（リトライ上限到達後）
    #[error("申込登録に失敗しました: {0}")]
    RegistrationFailed(#[source] InfraError),

    /// 大会スケジュール更新の失敗（リトライ上限到達後）
    #[error("大会スケジュール更新に失敗しました: {0}")]
    UpdateFailed(#[source] InfraError),

    /// その他のストレージ障害（読み取り系、リトライなし）
    #[error("データベースエラー: {0}")]
    Storage(#[from] InfraError),

    /// メール送信の失敗
    #[error("メール送信に失敗しました: {0}")]
    EmailDelivery(#[from] NotificationError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error:   format!("Missing required field: {field}"),
                    details: None,
                },
            ),
            ApiError::InvalidPayload(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error:   format!("Invalid request body: {msg}"),
                    details: None,
                },
            ),
            ApiError::EmailRequired => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error:   "Email is required.".to_string(),
                    details: None,
                },
            ),
            ApiError::EmailNotRegistered => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error:   "Email not registered. Please sign up.".to_string(),
                    details: None,
                },
            ),
            ApiError::TimingsNotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error:   "Tournament timings not found.".to_string(),
                    details: None,
                },
            ),
            ApiError::TimingsRecordMissing => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error:   "Tournament timings record not found.".to_string(),
                    details: None,
                },
            ),
            ApiError::RegistrationFailed(e) => {
                tracing::error!("申込登録に失敗: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error:   "Error occurred during registration".to_string(),
                        details: Some(e.to_string()),
                    },
                )
            }
            ApiError::UpdateFailed(e) => {
                tracing::error!("大会スケジュール更新に失敗: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error:   "Error occurred during update".to_string(),
                        details: Some(e.to_string()),
                    },
                )
            }
            ApiError::Storage(e) => {
                tracing::error!("データベースエラー: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error:   e.to_string(),
                        details: None,
                    },
                )
            }
            ApiError::EmailDelivery(e) => {
                // 失敗詳細はログにのみ残し、レスポンスには含めない
                tracing::error!("メール送信に失敗: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error:   "Failed to send email".to_string(),
                        details: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    async fn response_parts(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_missing_fieldは400でフィールド名を含む() {
        let (status, body) = response_parts(ApiError::MissingField("email".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required field: email");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_email_requiredは400() {
        let (status, body) = response_parts(ApiError::EmailRequired).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Email is required.");
    }

    #[tokio::test]
    async fn test_email_not_registeredは404() {
        let (status, body) = response_parts(ApiError::EmailNotRegistered).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Email not registered. Please sign up.");
    }

    #[tokio::test]
    async fn test_registration_failedは500でdetailsを含む() {
        let err = ApiError::RegistrationFailed(InfraError::unexpected("接続失敗"));
        let (status, body) = response_parts(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Error occurred during registration");
        assert!(body["details"].as_str().unwrap().contains("接続失敗"));
    }

    #[tokio::test]
    async fn test_email_deliveryは500で詳細を含まない() {
        let err = ApiError::EmailDelivery(NotificationError::SendFailed("認証失敗".to_string()));
        let (status, body) = response_parts(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to send email");
        assert!(body.get("details").is_none());
    }
}
