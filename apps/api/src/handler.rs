//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュールで re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、ビジネスロジックは usecase 層に委譲
//! - リクエストの presence バリデーション（必須フィールドの有無）は
//!   ハンドラで行い、最初に欠けていたフィールド名をエラーに含める
//!
//! ## ハンドラ一覧
//!
//! - `health`: ルート応答とヘルスチェック
//! - `registration`: 申込・サインイン・登録者一覧
//! - `tournament`: 大会スケジュールの取得・更新
//! - `mail`: メール送信

pub mod health;
pub mod mail;
pub mod registration;
pub mod tournament;

use serde::Serialize;

pub use health::{health_check, home};
pub use mail::{MailState, send_email};
pub use registration::{RegistrationState, list_users, signin, signup};
pub use tournament::{TournamentState, get_tournament_timings, update_tournament};

/// `{"message": ...}` 形式の成功レスポンス
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
