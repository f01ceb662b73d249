//! # ユースケース層
//!
//! 各エンドポイントのビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - ハンドラは薄く保ち、ビジネスロジックはこの層に集約する
//! - リポジトリ・メール送信はトレイト経由で注入し、テストではスタブに差し替える
//! - 書き込み系（申込登録・大会スケジュール更新）のみリトライする

pub mod mail;
pub mod registration;
pub mod tournament;

use std::time::Duration;

pub use mail::{MailUseCase, MailUseCaseImpl};
pub use registration::{RegistrationUseCase, RegistrationUseCaseImpl};
pub use tournament::{TournamentUseCase, TournamentUseCaseImpl};

/// 書き込み系操作の最大試行回数
pub const MAX_WRITE_ATTEMPTS: u32 = 3;

/// 書き込み系操作の試行間の待機時間
pub const WRITE_RETRY_DELAY: Duration = Duration::from_secs(1);
