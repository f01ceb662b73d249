//! # 通知
//!
//! メール通知に関するドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **プレーンテキストのみ**: 確認メールは単一のテキストパートで送信する
//! - **送信失敗は文字列化**: SMTP ライブラリのエラー型には依存せず、
//!   失敗理由を文字列として保持する

use thiserror::Error;

/// 通知送信エラー
#[derive(Debug, Error)]
pub enum NotificationError {
    /// メール送信に失敗
    #[error("メール送信に失敗: {0}")]
    SendFailed(String),
}

/// 送信するメールメッセージ
#[derive(Debug, Clone)]
pub struct EmailMessage {
    /// 宛先メールアドレス
    pub to:        String,
    /// 件名
    pub subject:   String,
    /// 本文（プレーンテキスト）
    pub text_body: String,
}
