use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// How many collection names the status check reports.
const COLLECTION_LIMIT: usize = 10;

/// Longest error excerpt included in the status report.
const ERROR_EXCERPT_CHARS: usize = 80;

#[derive(Serialize)]
pub struct RootMessage {
    message: &'static str,
}

pub async fn root() -> Json<RootMessage> {
    Json(RootMessage {
        message: "IT Student Mental Health API running",
    })
}

#[derive(Debug, Serialize)]
pub struct DatabaseStatus {
    backend: &'static str,
    database: String,
    database_url: Option<&'static str>,
    database_name: Option<&'static str>,
    connection_status: &'static str,
    collections: Vec<String>,
}

fn presence(set: bool) -> &'static str {
    if set { "✅ Set" } else { "❌ Not Set" }
}

/// Report whether the document store is configured and reachable. Never
/// fails; problems are described in the body.
pub async fn database_status(State(state): State<AppState>) -> Json<DatabaseStatus> {
    let mut status = DatabaseStatus {
        backend: "✅ Running",
        database: "❌ Not Available".to_string(),
        database_url: None,
        database_name: None,
        connection_status: "Not Connected",
        collections: Vec::new(),
    };

    let Some(store) = &state.store else {
        status.database = "⚠️ Available but not initialized".to_string();
        return Json(status);
    };

    status.database = "✅ Available".to_string();
    status.database_url = Some(presence(state.config.database_url.is_some()));
    status.database_name = Some(presence(state.config.database_name.is_some()));
    status.connection_status = "Connected";

    match store.list_collections(COLLECTION_LIMIT).await {
        Ok(mut collections) => {
            collections.truncate(COLLECTION_LIMIT);
            status.collections = collections;
            status.database = "✅ Connected & Working".to_string();
        }
        Err(e) => {
            let excerpt: String = e.to_string().chars().take(ERROR_EXCERPT_CHARS).collect();
            status.database = format!("⚠️ Connected but Error: {excerpt}");
        }
    }

    Json(status)
}
