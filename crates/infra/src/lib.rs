//! # ChessClub インフラ層
//!
//! 外部システムとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! このクレートはドメインモデルに対するリポジトリトレイトとその具体実装を
//! 提供する。外部システムの詳細をカプセル化し、上位層（API サービス）を
//! インフラの変更から保護する。
//!
//! ## 責務
//!
//! - **データベース接続**: PostgreSQL への接続プール管理
//! - **リポジトリ実装**: 登録者・大会スケジュールの永続化
//! - **メール送信**: SMTP リレー経由の通知送信
//! - **リトライ**: 固定回数・固定間隔のリトライコンビネータ
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//!    ↘      ↘
//!      shared
//! ```
//!
//! ドメイン層はインフラ層に依存しない（依存性逆転の原則）。
//!
//! ## モジュール構成
//!
//! - [`db`] - PostgreSQL データベース接続管理
//! - [`error`] - インフラ層エラー定義
//! - [`notification`] - メール送信（SMTP / Noop）
//! - [`repository`] - リポジトリ実装
//! - [`retry`] - リトライコンビネータ

pub mod db;
pub mod error;
pub mod notification;
pub mod repository;
pub mod retry;

pub use error::InfraError;
pub use notification::{NoopNotificationSender, NotificationSender, SmtpNotificationSender};
pub use retry::RetryPolicy;
