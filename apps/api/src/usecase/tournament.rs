//! # 大会スケジュールユースケース
//!
//! 大会スケジュールの取得・更新のビジネスロジックを実装する。
//!
//! ## 読み書きの対象選択
//!
//! - 取得: 最後に挿入されたレコード（挿入順で最新の 1 件）
//! - 更新: 固定 ID のレコードのみ
//!
//! 両者の選択基準は意図的に統一しない（既存挙動の保持。
//! プロダクト側へ確認中の既知の不整合）。
//!
//! ## リトライ方針
//!
//! 更新のみリトライする（固定 3 回・固定 1 秒間隔、全エラーが対象）。
//! 「行が一致しなかった」はエラーではなく即時の 404 として扱い、
//! リトライも待機も行わない。

use std::sync::Arc;

use async_trait::async_trait;
use chessclub_domain::tournament::UPDATED_AT_FORMAT;
use chessclub_infra::{RetryPolicy, repository::TournamentTimingRepository};
use chrono::Local;
use serde_json::Value;
use uuid::Uuid;

use crate::error::ApiError;

/// 大会スケジュールユースケーストレイト
#[async_trait]
pub trait TournamentUseCase: Send + Sync {
    /// 最新の大会スケジュールペイロードを取得する
    ///
    /// 1 件も存在しない場合は [`ApiError::TimingsNotFound`] を返す。
    async fn latest_timings(&self) -> Result<Value, ApiError>;

    /// 固定 ID のレコードのスケジュールを更新する
    ///
    /// 固定 ID の行が存在しない場合は [`ApiError::TimingsRecordMissing`]、
    /// リトライ上限まで失敗した場合は [`ApiError::UpdateFailed`] を返す。
    async fn update_timings(&self, timings: Value) -> Result<(), ApiError>;
}

/// 大会スケジュールユースケースの実装
pub struct TournamentUseCaseImpl {
    repository: Arc<dyn TournamentTimingRepository>,
    record_id:  Uuid,
    retry:      RetryPolicy,
}

impl TournamentUseCaseImpl {
    /// 新しいユースケースインスタンスを作成
    ///
    /// `record_id` は更新対象の固定 ID
    /// （[`crate::config::TOURNAMENT_TIMING_RECORD_ID`]）。
    pub fn new(
        repository: Arc<dyn TournamentTimingRepository>,
        record_id: Uuid,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            repository,
            record_id,
            retry,
        }
    }
}

#[async_trait]
impl TournamentUseCase for TournamentUseCaseImpl {
    async fn latest_timings(&self) -> Result<Value, ApiError> {
        let timing = self.repository.find_latest().await?;

        match timing {
            // レスポンスはペイロードのみ。ID と更新時刻は返さない
            Some(timing) => Ok(timing.timings),
            None => Err(ApiError::TimingsNotFound),
        }
    }

    async fn update_timings(&self, timings: Value) -> Result<(), ApiError> {
        // 更新時刻はサーバーローカル時刻の文字列（既存データ互換）
        let updated_at = Local::now().format(UPDATED_AT_FORMAT).to_string();

        let repository = self.repository.as_ref();
        let record_id = self.record_id;
        let matched = self
            .retry
            .run(|| {
                let timings = &timings;
                let updated_at = updated_at.as_str();
                async move { repository.update_timings(record_id, timings, updated_at).await }
            })
            .await
            .map_err(ApiError::UpdateFailed)?;

        if matched {
            tracing::info!(record_id = %record_id, "大会スケジュールを更新しました");
            Ok(())
        } else {
            // 「行なし」は正常終了の一種としてリトライ対象から外れ、即時 404 になる
            Err(ApiError::TimingsRecordMissing)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::atomic::{AtomicU32, Ordering},
        time::Duration,
    };

    use chessclub_domain::tournament::TournamentTiming;
    use chessclub_infra::InfraError;

    use super::*;
    use crate::usecase::{MAX_WRITE_ATTEMPTS, WRITE_RETRY_DELAY};

    // テスト用スタブ
    struct StubTournamentTimingRepository {
        latest:       Option<Value>,
        update_calls: AtomicU32,
        update_fails: u32,
        row_exists:   bool,
    }

    impl StubTournamentTimingRepository {
        fn with_latest(timings: Value) -> Self {
            Self {
                latest:       Some(timings),
                update_calls: AtomicU32::new(0),
                update_fails: 0,
                row_exists:   true,
            }
        }

        fn empty() -> Self {
            Self {
                latest:       None,
                update_calls: AtomicU32::new(0),
                update_fails: 0,
                row_exists:   false,
            }
        }

        fn always_failing() -> Self {
            Self {
                latest:       None,
                update_calls: AtomicU32::new(0),
                update_fails: u32::MAX,
                row_exists:   true,
            }
        }
    }

    #[async_trait]
    impl TournamentTimingRepository for StubTournamentTimingRepository {
        async fn find_latest(&self) -> Result<Option<TournamentTiming>, InfraError> {
            Ok(self.latest.clone().map(|timings| TournamentTiming {
                id: Uuid::now_v7(),
                timings,
                updated_at: None,
            }))
        }

        async fn update_timings(
            &self,
            _id: Uuid,
            _timings: &Value,
            _updated_at: &str,
        ) -> Result<bool, InfraError> {
            let n = self.update_calls.fetch_add(1, Ordering::SeqCst) + 1;
            if n <= self.update_fails {
                Err(InfraError::unexpected(format!("接続失敗（{n} 回目）")))
            } else {
                Ok(self.row_exists)
            }
        }
    }

    fn sut_with(repository: Arc<StubTournamentTimingRepository>) -> TournamentUseCaseImpl {
        TournamentUseCaseImpl::new(
            repository,
            crate::config::TOURNAMENT_TIMING_RECORD_ID,
            RetryPolicy::new(MAX_WRITE_ATTEMPTS, WRITE_RETRY_DELAY),
        )
    }

    #[tokio::test]
    async fn test_latest_timings_ペイロードのみを返す() {
        let repository = Arc::new(StubTournamentTimingRepository::with_latest(
            serde_json::json!({"Saturday": "9am"}),
        ));
        let sut = sut_with(repository);

        let result = sut.latest_timings().await.unwrap();

        assert_eq!(result, serde_json::json!({"Saturday": "9am"}));
    }

    #[tokio::test]
    async fn test_latest_timings_レコードなしでnot_found() {
        let repository = Arc::new(StubTournamentTimingRepository::empty());
        let sut = sut_with(repository);

        let result = sut.latest_timings().await;

        assert!(matches!(result, Err(ApiError::TimingsNotFound)));
    }

    #[tokio::test]
    async fn test_update_timings_成功で1回だけ更新される() {
        let repository = Arc::new(StubTournamentTimingRepository::with_latest(
            serde_json::json!({}),
        ));
        let sut = sut_with(repository.clone());

        let result = sut.update_timings(serde_json::json!({"Sunday": "10am"})).await;

        assert!(result.is_ok());
        assert_eq!(repository.update_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_update_timings_固定idの行なしは待機なしで即時404() {
        let repository = Arc::new(StubTournamentTimingRepository::empty());
        let sut = sut_with(repository.clone());
        let start = tokio::time::Instant::now();

        let result = sut.update_timings(serde_json::json!({})).await;

        assert!(matches!(result, Err(ApiError::TimingsRecordMissing)));
        // リトライされず、待機も発生しない
        assert_eq!(repository.update_calls.load(Ordering::SeqCst), 1);
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_update_timings_全試行失敗でupdate_failed() {
        let repository = Arc::new(StubTournamentTimingRepository::always_failing());
        let sut = sut_with(repository.clone());
        let start = tokio::time::Instant::now();

        let result = sut.update_timings(serde_json::json!({})).await;

        assert!(matches!(result, Err(ApiError::UpdateFailed(_))));
        assert_eq!(repository.update_calls.load(Ordering::SeqCst), 3);
        assert!(start.elapsed() >= Duration::from_secs(2));
    }
}
