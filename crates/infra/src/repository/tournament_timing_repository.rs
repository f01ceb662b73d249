//! # TournamentTimingRepository
//!
//! 大会スケジュールレコードの読み取りと更新を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **読み取りは挿入順で最新の 1 件**: `seq`（挿入カウンタ）の降順で選択する
//! - **更新は固定 ID を対象**: 対象行はマイグレーションで事前投入済み。
//!   このシステムのコードパスはレコードを新規作成しない
//! - **読み書きの選択基準は統一しない**: 既存挙動の保持（プロダクト側へ確認中）
//! - **更新対象なしとエラーの区別**: 更新は「行が一致しなかった」を
//!   `Ok(false)` として返し、データベースエラーとは区別する

use async_trait::async_trait;
use chessclub_domain::tournament::TournamentTiming;
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::InfraError;

/// 大会スケジュールリポジトリトレイト
#[async_trait]
pub trait TournamentTimingRepository: Send + Sync {
    /// 最後に挿入されたレコードを取得する
    ///
    /// # 戻り値
    ///
    /// - `Ok(Some(timing))`: レコードが存在する場合
    /// - `Ok(None)`: テーブルが空の場合
    /// - `Err(_)`: データベースエラー
    async fn find_latest(&self) -> Result<Option<TournamentTiming>, InfraError>;

    /// 指定 ID のレコードのスケジュールと更新時刻を書き換える
    ///
    /// # 戻り値
    ///
    /// - `Ok(true)`: 1 行更新された場合
    /// - `Ok(false)`: 指定 ID の行が存在しなかった場合
    /// - `Err(_)`: データベースエラー
    async fn update_timings(
        &self,
        id: Uuid,
        timings: &Value,
        updated_at: &str,
    ) -> Result<bool, InfraError>;
}

/// tournament_timings テーブルの行型
#[derive(Debug, sqlx::FromRow)]
struct TournamentTimingRow {
    id:         Uuid,
    timings:    Value,
    updated_at: Option<String>,
}

impl From<TournamentTimingRow> for TournamentTiming {
    fn from(row: TournamentTimingRow) -> Self {
        Self {
            id:         row.id,
            timings:    row.timings,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL 実装の TournamentTimingRepository
#[derive(Debug, Clone)]
pub struct PostgresTournamentTimingRepository {
    pool: PgPool,
}

impl PostgresTournamentTimingRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TournamentTimingRepository for PostgresTournamentTimingRepository {
    async fn find_latest(&self) -> Result<Option<TournamentTiming>, InfraError> {
        let row = sqlx::query_as::<_, TournamentTimingRow>(
            r#"
            SELECT id, timings, updated_at
            FROM tournament_timings
            ORDER BY seq DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TournamentTiming::from))
    }

    async fn update_timings(
        &self,
        id: Uuid,
        timings: &Value,
        updated_at: &str,
    ) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            UPDATE tournament_timings
            SET timings = $2, updated_at = $3
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(timings)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
