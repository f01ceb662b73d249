//! # ChessClub API サーバー
//!
//! チェスクラブの申込受付と大会スケジュール管理を担当する API サーバー。
//!
//! ## 役割
//!
//! - **申込受付**: 申込フォームの登録、サインイン（登録有無の確認）、登録者一覧
//! - **大会スケジュール**: 単一レコードの取得・更新
//! - **確認メール**: SMTP リレー経由のメール送信
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API_PORT` | **Yes** | ポート番号 |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `MAIL_BACKEND` | No | メール送信バックエンド（`smtp` / `noop`、デフォルト: `smtp`） |
//! | `SMTP_HOST` | No | SMTP リレーのホスト（デフォルト: `localhost`） |
//! | `SMTP_PORT` | No | SMTP リレーのポート（デフォルト: `587`） |
//! | `SMTP_USERNAME` | No | SMTP 認証ユーザー名 |
//! | `SMTP_PASSWORD` | No | SMTP 認証パスワード |
//! | `MAIL_FROM_ADDRESS` | No | 送信元メールアドレス |
//!
//! ## 起動方法
//!
//! ```bash
//! API_PORT=8080 DATABASE_URL=postgres://... cargo run -p chessclub-api
//! ```

mod config;
mod error;
mod handler;
mod usecase;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use axum::{
    Router,
    routing::{get, post, put},
};
use chessclub_infra::{
    NoopNotificationSender,
    NotificationSender,
    RetryPolicy,
    SmtpNotificationSender,
    db,
    repository::{PostgresRegistrantRepository, PostgresTournamentTimingRepository},
};
use chessclub_shared::observability::{self, TracingConfig};
use config::ApiConfig;
use handler::{
    MailState,
    RegistrationState,
    TournamentState,
    get_tournament_timings,
    health_check,
    home,
    list_users,
    send_email,
    signin,
    signup,
    update_tournament,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use usecase::{
    MAX_WRITE_ATTEMPTS,
    MailUseCaseImpl,
    RegistrationUseCaseImpl,
    TournamentUseCaseImpl,
    WRITE_RETRY_DELAY,
};

/// API サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("api");
    observability::init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "api").entered();

    // 設定読み込み
    let config = ApiConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!("API サーバーを起動します: {}:{}", config.host, config.port);

    // データベース接続プールを作成（プロセス全体で共有）
    let pool = db::create_pool(&config.database_url)
        .await
        .context("データベース接続に失敗しました")?;
    tracing::info!("データベースに接続しました");

    // マイグレーション実行
    db::run_migrations(&pool)
        .await
        .context("マイグレーションの実行に失敗しました")?;
    tracing::info!("マイグレーションを適用しました");

    // メール送信バックエンドを選択
    let sender: Arc<dyn NotificationSender> = match config.mail.backend.as_str() {
        "noop" => {
            tracing::info!("メール送信: noop バックエンドを使用します");
            Arc::new(NoopNotificationSender)
        }
        _ => Arc::new(SmtpNotificationSender::new(
            &config.mail.smtp_host,
            config.mail.smtp_port,
            config.mail.smtp_username.clone(),
            config.mail.smtp_password.clone(),
            config.mail.from_address.clone(),
        )),
    };

    // 依存コンポーネントを初期化
    let retry = RetryPolicy::new(MAX_WRITE_ATTEMPTS, WRITE_RETRY_DELAY);

    let registration_state = Arc::new(RegistrationState {
        usecase: Arc::new(RegistrationUseCaseImpl::new(
            Arc::new(PostgresRegistrantRepository::new(pool.clone())),
            retry,
        )),
    });
    let tournament_state = Arc::new(TournamentState {
        usecase: Arc::new(TournamentUseCaseImpl::new(
            Arc::new(PostgresTournamentTimingRepository::new(pool)),
            config::TOURNAMENT_TIMING_RECORD_ID,
            retry,
        )),
    });
    let mail_state = Arc::new(MailState {
        usecase: Arc::new(MailUseCaseImpl::new(sender)),
    });

    // ルーター構築
    let app = Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/signup", post(signup))
                .route("/signin", post(signin))
                .route("/Club_users", get(list_users))
                .with_state(registration_state),
        )
        .merge(
            Router::new()
                .route("/tournament-timings", get(get_tournament_timings))
                .route("/update_tournament", put(update_tournament))
                .with_state(tournament_state),
        )
        .merge(
            Router::new()
                .route("/send-email", post(send_email))
                .with_state(mail_state),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("バインドアドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("API サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
