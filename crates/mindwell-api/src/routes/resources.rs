use axum::extract::State;
use axum::Json;

use mindwell_core::collections;
use mindwell_core::models::resource::Resource;
use mindwell_core::seed;

use crate::state::AppState;

/// Stored resources, or the default seed when there are none or any stored
/// record cannot be mapped.
pub async fn list_resources(State(state): State<AppState>) -> Json<Vec<Resource>> {
    let stored = state.documents(collections::RESOURCES).await.and_then(|docs| {
        docs.iter()
            .map(Resource::from_document)
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|e| tracing::warn!(error = %e, "unmappable resource record"))
            .ok()
    });

    match stored {
        Some(resources) if !resources.is_empty() => Json(resources),
        _ => Json(seed::default_resources()),
    }
}
