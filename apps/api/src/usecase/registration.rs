//! # 登録ユースケース
//!
//! 申込登録・サインイン・登録者一覧のビジネスロジックを実装する。
//!
//! ## リトライ方針
//!
//! 申込の INSERT のみリトライする（固定 3 回・固定 1 秒間隔、全エラーが対象）。
//! サインインと一覧は読み取りのためリトライしない。
//!
//! ## 重複申込
//!
//! 同一メールアドレスの既存レコードは確認しない（既存挙動の保持、
//! 再申込を許容するかはプロダクト側へ確認中）。

use std::sync::Arc;

use async_trait::async_trait;
use chessclub_domain::registrant::{Registrant, SignupForm};
use chessclub_infra::{RetryPolicy, repository::RegistrantRepository};
use chrono::Utc;

use crate::error::ApiError;

/// 登録ユースケーストレイト
#[async_trait]
pub trait RegistrationUseCase: Send + Sync {
    /// 申込を登録する
    ///
    /// 申込日時（UTC）を付与して INSERT する。リトライ上限まで
    /// 失敗した場合は [`ApiError::RegistrationFailed`] を返す。
    async fn signup(&self, form: SignupForm) -> Result<(), ApiError>;

    /// メールアドレスの登録有無を確認する
    ///
    /// 未登録の場合は [`ApiError::EmailNotRegistered`] を返す。
    async fn signin(&self, email: &str) -> Result<(), ApiError>;

    /// 全登録者を取得する
    async fn list_registrants(&self) -> Result<Vec<Registrant>, ApiError>;
}

/// 登録ユースケースの実装
pub struct RegistrationUseCaseImpl {
    repository: Arc<dyn RegistrantRepository>,
    retry:      RetryPolicy,
}

impl RegistrationUseCaseImpl {
    /// 新しいユースケースインスタンスを作成
    pub fn new(repository: Arc<dyn RegistrantRepository>, retry: RetryPolicy) -> Self {
        Self { repository, retry }
    }
}

#[async_trait]
impl RegistrationUseCase for RegistrationUseCaseImpl {
    async fn signup(&self, form: SignupForm) -> Result<(), ApiError> {
        // 申込日時はリトライ間で変えない（最初の受付時刻を記録する）
        let registrant = Registrant::from_form(form, Utc::now());

        let repository = self.repository.as_ref();
        self.retry
            .run(|| {
                let registrant = &registrant;
                async move { repository.insert(registrant).await }
            })
            .await
            .map_err(ApiError::RegistrationFailed)?;

        tracing::info!(email = %registrant.email, "申込を登録しました");
        Ok(())
    }

    async fn signin(&self, email: &str) -> Result<(), ApiError> {
        let existing = self.repository.find_by_email(email).await?;

        match existing {
            Some(_) => Ok(()),
            None => Err(ApiError::EmailNotRegistered),
        }
    }

    async fn list_registrants(&self) -> Result<Vec<Registrant>, ApiError> {
        Ok(self.repository.list_all().await?)
    }
}
