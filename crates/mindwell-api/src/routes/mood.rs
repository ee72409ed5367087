use axum::extract::State;
use axum::Json;

use mindwell_core::collections;
use mindwell_core::models::mood::{MoodEntry, MoodStats};

use crate::extract::ApiJson;
use crate::state::AppState;

pub async fn add_mood(
    State(state): State<AppState>,
    ApiJson(entry): ApiJson<MoodEntry>,
) -> Json<MoodEntry> {
    state.persist(collections::MOOD_ENTRIES, &entry).await;
    Json(entry)
}

/// Tally stored mood entries; zeroed when the store cannot be read.
pub async fn mood_stats(State(state): State<AppState>) -> Json<MoodStats> {
    let stats = state
        .documents(collections::MOOD_ENTRIES)
        .await
        .map(|docs| MoodStats::tally(&docs))
        .unwrap_or_default();
    Json(stats)
}
