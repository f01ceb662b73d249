//! # ルート応答・ヘルスチェックハンドラ
//!
//! サービスの稼働確認用エンドポイント。
//!
//! レスポンス型は [`chessclub_shared::HealthResponse`] を参照。

use axum::Json;
use chessclub_shared::HealthResponse;

/// GET /
///
/// 固定の文字列を返す。失敗しない。
pub async fn home() -> &'static str {
    "Chess Club API is up and running"
}

/// GET /health
///
/// 稼働状態とバージョンを JSON で返す。
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status:  "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
