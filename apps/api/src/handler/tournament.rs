//! # 大会スケジュールハンドラ
//!
//! 大会スケジュールの取得・更新エンドポイントを提供する。
//!
//! ## エンドポイント
//!
//! - `GET /tournament-timings` - 最新スケジュールの取得
//! - `PUT /update_tournament` - 固定レコードの更新
//!
//! リクエストフィールド名 `TornumentTimings`（綴りを含む）は
//! 既存フロントエンドとの契約であり変更しない。

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::Value;

use super::MessageResponse;
use crate::{error::ApiError, usecase::TournamentUseCase};

/// 大会スケジュールハンドラの共有状態
pub struct TournamentState {
    pub usecase: Arc<dyn TournamentUseCase>,
}

/// GET /tournament-timings
///
/// 最後に挿入されたレコードの不透明ペイロードをそのまま返す。
/// ID と更新時刻はレスポンスに含めない。
pub async fn get_tournament_timings(
    State(state): State<Arc<TournamentState>>,
) -> Result<impl IntoResponse, ApiError> {
    let timings = state.usecase.latest_timings().await?;
    Ok(Json(timings))
}

/// PUT /update_tournament
///
/// `TornumentTimings` フィールドの presence のみ検証し、
/// 値は解釈せずそのまま保存する。
pub async fn update_tournament(
    State(state): State<Arc<TournamentState>>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let timings = body
        .get("TornumentTimings")
        .cloned()
        .ok_or_else(|| ApiError::MissingField("TornumentTimings".to_string()))?;

    state.usecase.update_timings(timings).await?;

    Ok(Json(MessageResponse::new(
        "Tournament timings updated successfully",
    )))
}
