use super::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    #[serde(rename = "roomCode")]
    pub room_code: String,
    #[serde(rename = "summaryText")]
    pub summary_text: String,
}

/// GET /rooms/:room/summary
/// Fetch the retained summary for a room code. Misses and expiry come back
/// as sentinel text in the normal response shape, never as an error status.
pub async fn get_room_summary(
    State(state): State<AppState>,
    Path(room): Path<String>,
) -> impl IntoResponse {
    info!("Summary requested for room {}", room);
    let summary_text = state.summaries.get(&room).await;

    (
        StatusCode::OK,
        Json(SummaryResponse {
            room_code: room,
            summary_text,
        }),
    )
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
