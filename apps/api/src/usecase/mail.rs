//! # メール送信ユースケース
//!
//! 確認メールの組み立てと送信を実装する。
//!
//! ## 設計方針
//!
//! - 件名・本文が省略された場合は固定の既定文面を使う
//! - リトライしない。失敗は即座にエラーとして返し、詳細はログにのみ残す

use std::sync::Arc;

use async_trait::async_trait;
use chessclub_domain::notification::EmailMessage;
use chessclub_infra::NotificationSender;

use crate::error::ApiError;

/// 件名が省略された場合の既定値
pub const DEFAULT_SUBJECT: &str = "Chess Club Notification";

/// 本文が省略された場合の既定値
pub const DEFAULT_BODY: &str = "Hello from the chess club!";

/// メール送信ユースケーストレイト
#[async_trait]
pub trait MailUseCase: Send + Sync {
    /// メールを 1 通送信する
    ///
    /// `subject` / `body` が `None` の場合は既定の文面を使う。
    async fn send(
        &self,
        to: String,
        subject: Option<String>,
        body: Option<String>,
    ) -> Result<(), ApiError>;
}

/// メール送信ユースケースの実装
pub struct MailUseCaseImpl {
    sender: Arc<dyn NotificationSender>,
}

impl MailUseCaseImpl {
    /// 新しいユースケースインスタンスを作成
    pub fn new(sender: Arc<dyn NotificationSender>) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl MailUseCase for MailUseCaseImpl {
    async fn send(
        &self,
        to: String,
        subject: Option<String>,
        body: Option<String>,
    ) -> Result<(), ApiError> {
        let message = EmailMessage {
            to,
            subject: subject.unwrap_or_else(|| DEFAULT_SUBJECT.to_string()),
            text_body: body.unwrap_or_else(|| DEFAULT_BODY.to_string()),
        };

        self.sender.send_email(&message).await?;

        tracing::info!(to = %message.to, "メールを送信しました");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chessclub_domain::notification::NotificationError;

    use super::*;

    // テスト用スタブ
    struct StubNotificationSender {
        fail: bool,
        sent: Mutex<Vec<EmailMessage>>,
    }

    impl StubNotificationSender {
        fn success() -> Self {
            Self {
                fail: false,
                sent: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl NotificationSender for StubNotificationSender {
        async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
            if self.fail {
                return Err(NotificationError::SendFailed("SMTP 認証失敗".to_string()));
            }
            self.sent.lock().unwrap().push(email.clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_send_指定された件名と本文で送信する() {
        let sender = Arc::new(StubNotificationSender::success());
        let sut = MailUseCaseImpl::new(sender.clone());

        let result = sut
            .send(
                "a@b.com".to_string(),
                Some("件名".to_string()),
                Some("本文".to_string()),
            )
            .await;

        assert!(result.is_ok());
        let sent = sender.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "a@b.com");
        assert_eq!(sent[0].subject, "件名");
        assert_eq!(sent[0].text_body, "本文");
    }

    #[tokio::test]
    async fn test_send_件名と本文の省略時は既定文面を使う() {
        let sender = Arc::new(StubNotificationSender::success());
        let sut = MailUseCaseImpl::new(sender.clone());

        let result = sut.send("a@b.com".to_string(), None, None).await;

        assert!(result.is_ok());
        let sent = sender.sent.lock().unwrap();
        assert_eq!(sent[0].subject, DEFAULT_SUBJECT);
        assert_eq!(sent[0].text_body, DEFAULT_BODY);
    }

    #[tokio::test]
    async fn test_send_送信失敗でemail_deliveryエラーになる() {
        let sender = Arc::new(StubNotificationSender::failing());
        let sut = MailUseCaseImpl::new(sender);

        let result = sut.send("a@b.com".to_string(), None, None).await;

        assert!(matches!(result, Err(ApiError::EmailDelivery(_))));
    }
}
