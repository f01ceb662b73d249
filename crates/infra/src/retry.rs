//! # リトライコンビネータ
//!
//! 固定回数・固定間隔のリトライを提供する。
//!
//! ## 設計方針
//!
//! - **全エラーをリトライ対象とする**: 一時的エラーと恒久的エラーを区別しない。
//!   既存システムの観測可能な挙動（全例外を一律リトライ）の保持が目的
//! - **バックオフなし**: 待機時間は固定。指数バックオフは導入しない
//! - **試行ごとにログ出力**: 失敗した試行は `tracing::warn!` で記録する
//!
//! 書き込み系操作（申込登録・大会スケジュール更新）のみが使用する。
//! 読み取り系とメール送信はリトライしない。

use std::{future::Future, time::Duration};

/// 固定回数・固定間隔のリトライポリシー
///
/// ## 使用例
///
/// ```rust,ignore
/// use std::time::Duration;
///
/// use chessclub_infra::RetryPolicy;
///
/// let policy = RetryPolicy::new(3, Duration::from_secs(1));
/// let result = policy.run(|| async { repository.insert(&registrant).await }).await;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay:        Duration,
}

impl RetryPolicy {
    /// 新しいリトライポリシーを作成する
    ///
    /// # 引数
    ///
    /// - `max_attempts`: 最大試行回数（1 以上。初回実行を含む）
    /// - `delay`: 失敗した試行の間に挟む待機時間
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        assert!(max_attempts >= 1, "max_attempts は 1 以上であること");
        Self {
            max_attempts,
            delay,
        }
    }

    /// 最大試行回数を取得する
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// 操作をリトライ付きで実行する
    ///
    /// 最初に `Ok` を返した時点で打ち切り、その値を返す。
    /// 失敗した場合は `delay` だけ待機して再実行し、`max_attempts` 回
    /// すべて失敗したら最後のエラーを返す。
    ///
    /// エラーの種類による分類は行わない（全エラーがリトライ対象）。
    pub async fn run<T, E, F, Fut>(&self, mut op: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        let mut attempt = 1;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(e) if attempt < self.max_attempts => {
                    tracing::warn!(
                        attempt,
                        max_attempts = self.max_attempts,
                        error = %e,
                        "操作に失敗しました。リトライします"
                    );
                    tokio::time::sleep(self.delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    tracing::warn!(
                        attempt,
                        max_attempts = self.max_attempts,
                        error = %e,
                        "リトライ上限に達しました"
                    );
                    return Err(e);
                }
            }
        }
    }
}
