//! # ChessClub ドメインモデル
//!
//! チェスクラブ申込管理のドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティとワイヤ型の分離**: 内部 ID はドメイン型に含めず、
//!   レスポンスへの漏洩を型レベルで防ぐ
//! - **インフラ非依存**: sqlx や axum には依存しない
//! - **ワイヤ契約の保持**: JSON フィールド名（camelCase、`TornumentTimings`
//!   の綴りを含む）はフロントエンドとの既存契約であり変更しない

pub mod notification;
pub mod registrant;
pub mod tournament;
