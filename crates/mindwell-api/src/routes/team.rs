use axum::extract::State;
use axum::Json;

use mindwell_core::collections;
use mindwell_core::models::team::TeamMember;
use mindwell_core::seed;

use crate::state::AppState;

pub async fn list_team(State(state): State<AppState>) -> Json<Vec<TeamMember>> {
    let stored = state.documents(collections::TEAM_MEMBERS).await.and_then(|docs| {
        docs.iter()
            .map(TeamMember::from_document)
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|e| tracing::warn!(error = %e, "unmappable team record"))
            .ok()
    });

    match stored {
        Some(team) if !team.is_empty() => Json(team),
        _ => Json(seed::default_team()),
    }
}
