//! # API サービス設定
//!
//! 環境変数から API サーバーの設定を読み込む。
//! 設定は起動時に一度だけ読み込み、プロセス終了まで再読み込みしない。

use std::env;

use anyhow::Context as _;
use uuid::Uuid;

/// 更新対象の大会スケジュールレコードの固定 ID
///
/// `a2f1c9e4-5b7d-4c21-9e8f-3d6a1b0c4e72`
///
/// マイグレーションで事前投入される行の ID と一致させること。
/// この行が削除されると `PUT /update_tournament` は常に 404 を返す
/// （単一障害点。プロダクト側へ設計見直しを提起中）。
pub const TOURNAMENT_TIMING_RECORD_ID: Uuid =
    Uuid::from_u128(0xa2f1c9e4_5b7d_4c21_9e8f_3d6a1b0c4e72);

/// API サーバーの設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// バインドアドレス
    pub host:         String,
    /// ポート番号
    pub port:         u16,
    /// データベース接続 URL
    pub database_url: String,
    /// メール送信設定
    pub mail:         MailConfig,
}

/// メール送信の設定
///
/// `MAIL_BACKEND` 環境変数で送信バックエンドを切り替える:
/// - `smtp`: 外部 SMTP リレー経由で送信（デフォルト）
/// - `noop`: 送信しない（ログ出力のみ。開発・テスト用）
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// 送信バックエンド（"smtp" | "noop"）
    pub backend:       String,
    /// SMTP リレーのホスト
    pub smtp_host:     String,
    /// SMTP リレーのポート
    pub smtp_port:     u16,
    /// SMTP 認証ユーザー名
    pub smtp_username: String,
    /// SMTP 認証パスワード
    pub smtp_password: String,
    /// 送信元メールアドレス
    pub from_address:  String,
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host:         env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port:         env::var("API_PORT")
                .context("API_PORT が設定されていません")?
                .parse()
                .context("API_PORT は有効なポート番号である必要があります")?,
            database_url: env::var("DATABASE_URL")
                .context("DATABASE_URL が設定されていません")?,
            mail:         MailConfig::from_env()?,
        })
    }
}

impl MailConfig {
    /// 環境変数からメール設定を読み込む
    fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            backend:       env::var("MAIL_BACKEND").unwrap_or_else(|_| "smtp".to_string()),
            smtp_host:     env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string()),
            smtp_port:     env::var("SMTP_PORT")
                .unwrap_or_else(|_| "587".to_string())
                .parse()
                .context("SMTP_PORT は有効なポート番号である必要があります")?,
            smtp_username: env::var("SMTP_USERNAME").unwrap_or_default(),
            smtp_password: env::var("SMTP_PASSWORD").unwrap_or_default(),
            from_address:  env::var("MAIL_FROM_ADDRESS")
                .unwrap_or_else(|_| "noreply@chessclub.example.com".to_string()),
        })
    }
}
