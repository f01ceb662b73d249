//! # RegistrantRepository
//!
//! 登録者（申込レコード）の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **内部 ID の非公開**: ドメイン型 [`Registrant`] は内部 ID を持たない。
//!   行型からドメイン型への変換時点で ID が落ちる
//! - **一意制約なし**: email に一意制約は張らない（既存挙動の保持）。
//!   同時申込による重複レコードは許容される
//! - **ランタイムバインド**: `sqlx::query` / `query_as` を使用し、
//!   コンパイル時のデータベース接続を不要にする

use async_trait::async_trait;
use chessclub_domain::registrant::Registrant;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::InfraError;

/// 登録者リポジトリトレイト
///
/// 申込レコードの永続化操作を定義する。
/// インフラ層で具体的な実装を提供し、API サービスから利用する。
#[async_trait]
pub trait RegistrantRepository: Send + Sync {
    /// 登録者を新規挿入する
    ///
    /// 内部 ID はリポジトリ側で採番する（UUID v7）。
    /// 同一 email の既存レコードがあっても挿入は成功する。
    async fn insert(&self, registrant: &Registrant) -> Result<(), InfraError>;

    /// email の完全一致で登録者を 1 件検索する
    ///
    /// # 戻り値
    ///
    /// - `Ok(Some(registrant))`: 登録が見つかった場合
    /// - `Ok(None)`: 未登録の場合
    /// - `Err(_)`: データベースエラー
    async fn find_by_email(&self, email: &str) -> Result<Option<Registrant>, InfraError>;

    /// 全登録者を取得する
    ///
    /// 並び順はストレージの走査順であり、安定性は保証しない。
    async fn list_all(&self) -> Result<Vec<Registrant>, InfraError>;
}

/// registrants テーブルの行型
///
/// 内部 ID はここで受けるが、ドメイン型への変換で破棄される。
#[derive(Debug, sqlx::FromRow)]
struct RegistrantRow {
    player_first_name: String,
    player_last_name:  String,
    parent_first_name: String,
    parent_last_name:  String,
    phone_number:      String,
    email:             String,
    section:           String,
    signup_date:       DateTime<Utc>,
}

impl From<RegistrantRow> for Registrant {
    fn from(row: RegistrantRow) -> Self {
        Self {
            player_first_name: row.player_first_name,
            player_last_name: row.player_last_name,
            parent_first_name: row.parent_first_name,
            parent_last_name: row.parent_last_name,
            phone_number: row.phone_number,
            email: row.email,
            section: row.section,
            signup_date: row.signup_date,
        }
    }
}

/// PostgreSQL 実装の RegistrantRepository
#[derive(Debug, Clone)]
pub struct PostgresRegistrantRepository {
    pool: PgPool,
}

impl PostgresRegistrantRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrantRepository for PostgresRegistrantRepository {
    async fn insert(&self, registrant: &Registrant) -> Result<(), InfraError> {
        sqlx::query(
            r#"
            INSERT INTO registrants (
                id,
                player_first_name,
                player_last_name,
                parent_first_name,
                parent_last_name,
                phone_number,
                email,
                section,
                signup_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&registrant.player_first_name)
        .bind(&registrant.player_last_name)
        .bind(&registrant.parent_first_name)
        .bind(&registrant.parent_last_name)
        .bind(&registrant.phone_number)
        .bind(&registrant.email)
        .bind(&registrant.section)
        .bind(registrant.signup_date)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Registrant>, InfraError> {
        let row = sqlx::query_as::<_, RegistrantRow>(
            r#"
            SELECT
                player_first_name,
                player_last_name,
                parent_first_name,
                parent_last_name,
                phone_number,
                email,
                section,
                signup_date
            FROM registrants
            WHERE email = $1
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Registrant::from))
    }

    async fn list_all(&self) -> Result<Vec<Registrant>, InfraError> {
        let rows = sqlx::query_as::<_, RegistrantRow>(
            r#"
            SELECT
                player_first_name,
                player_last_name,
                parent_first_name,
                parent_last_name,
                phone_number,
                email,
                section,
                signup_date
            FROM registrants
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Registrant::from).collect())
    }
}
