//! # リポジトリ実装
//!
//! ドメインモデルの永続化を担当するリポジトリトレイトとその実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: 上位層はトレイトにのみ依存し、実装を注入する
//! - **データベース抽象化**: sqlx を使用し、PostgreSQL 固有の処理をカプセル化
//! - **テスタビリティ**: トレイト経由でスタブ可能な設計

pub mod registrant_repository;
pub mod tournament_timing_repository;

pub use registrant_repository::{PostgresRegistrantRepository, RegistrantRepository};
pub use tournament_timing_repository::{
    PostgresTournamentTimingRepository,
    TournamentTimingRepository,
};
