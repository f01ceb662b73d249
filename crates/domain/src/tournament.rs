//! # 大会スケジュール（TournamentTiming）
//!
//! 大会開催時間の単一レコードを表すドメインモデル。
//!
//! ## 設計方針
//!
//! - **不透明ペイロード**: `timings` の内部構造はこのシステムでは解釈せず、
//!   受け取った JSON 値をそのまま保存・返却する
//! - **読み書きの選択基準が異なる**: 読み取りは「最後に挿入されたレコード」、
//!   更新は固定 ID のレコードを対象にする。既存挙動の保持であり統一しない
//!   （プロダクト側へ確認中）
//! - **更新時刻は文字列**: `updated_at` はサーバーローカル時刻を
//!   [`UPDATED_AT_FORMAT`] で整形した文字列で保持する（既存データ互換）

use serde_json::Value;
use uuid::Uuid;

/// `updated_at` 文字列の書式
///
/// 例: `2026-08-30 14:05:00`
pub const UPDATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 大会スケジュールレコード
#[derive(Debug, Clone)]
pub struct TournamentTiming {
    /// ストレージ上の識別子（レスポンスには含めない）
    pub id:         Uuid,
    /// 不透明なスケジュールペイロード
    pub timings:    Value,
    /// 最終更新時刻（ローカル時刻の文字列、一度も更新されていなければ None）
    pub updated_at: Option<String>,
}
