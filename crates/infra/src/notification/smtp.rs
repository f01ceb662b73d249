//! SMTP 通知送信実装
//!
//! lettre の `AsyncSmtpTransport` を使用してメールを送信する。
//! 固定のホスト・ポート・認証情報で外部 SMTP リレーに接続する。

use async_trait::async_trait;
use chessclub_domain::notification::{EmailMessage, NotificationError};
use lettre::{
    AsyncSmtpTransport,
    AsyncTransport,
    Tokio1Executor,
    message::{Message, header::ContentType},
    transport::smtp::authentication::Credentials,
};

use super::NotificationSender;

/// SMTP 通知送信
///
/// `lettre::AsyncSmtpTransport<Tokio1Executor>` をラップする。
/// トランスポートは起動時に一度だけ構築し、全リクエストで再利用する。
pub struct SmtpNotificationSender {
    transport:    AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl SmtpNotificationSender {
    /// 新しい SMTP 送信インスタンスを作成
    ///
    /// # 引数
    ///
    /// - `host`: SMTP リレーのホスト名
    /// - `port`: SMTP リレーのポート番号（例: 587）
    /// - `username` / `password`: リレーの認証情報（固定のペア）
    /// - `from_address`: 送信元メールアドレス
    pub fn new(
        host: &str,
        port: u16,
        username: String,
        password: String,
        from_address: String,
    ) -> Self {
        // builder_dangerous: TLS なしで接続する（TLS 終端はリレー側の構成に委ねる）。
        // 認証は固定の認証情報ペアで行う
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .credentials(Credentials::new(username, password))
            .build();

        Self {
            transport,
            from_address,
        }
    }
}

#[async_trait]
impl NotificationSender for SmtpNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        let message = Message::builder()
            .from(self.from_address.parse().map_err(|e| {
                NotificationError::SendFailed(format!("送信元アドレス不正: {e}"))
            })?)
            .to(email
                .to
                .parse()
                .map_err(|e| NotificationError::SendFailed(format!("宛先アドレス不正: {e}")))?)
            .subject(&email.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(email.text_body.clone())
            .map_err(|e| NotificationError::SendFailed(format!("メッセージ構築失敗: {e}")))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| NotificationError::SendFailed(format!("SMTP 送信失敗: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_送信インスタンスはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SmtpNotificationSender>();
    }

    #[tokio::test]
    async fn test_不正な送信元アドレスは構築時でなく送信時に検出される() {
        // new はアドレスを検証しない。parse 失敗は send_email で返る
        let sender = SmtpNotificationSender::new(
            "localhost",
            1025,
            "user".to_string(),
            "pass".to_string(),
            "not an address".to_string(),
        );

        let email = EmailMessage {
            to:        "someone@example.com".to_string(),
            subject:   "件名".to_string(),
            text_body: "本文".to_string(),
        };

        let result = sender.send_email(&email).await;
        assert!(matches!(result, Err(NotificationError::SendFailed(_))));
    }
}
