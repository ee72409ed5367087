use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use mindwell_storage::documents::DocumentStore;

use crate::config::Config;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no store is configured; every store call then behaves as
    /// a failed one.
    pub store: Option<Arc<dyn DocumentStore>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: Option<Arc<dyn DocumentStore>>, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Best-effort append. Returns whether the record was stored; failures are
    /// logged and otherwise ignored.
    pub async fn persist<T: Serialize>(&self, collection: &str, record: &T) -> bool {
        let Some(store) = &self.store else {
            tracing::debug!(collection, "no document store configured, skipping write");
            return false;
        };

        let record = match serde_json::to_value(record) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(collection, error = %e, "failed to serialize record");
                return false;
            }
        };

        match store.create_document(collection, record).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(collection, error = %e, "failed to persist record");
                false
            }
        }
    }

    /// All documents in a collection, or `None` when the store is absent or
    /// the read fails. Callers supply their own fallback.
    pub async fn documents(&self, collection: &str) -> Option<Vec<Value>> {
        let store = self.store.as_ref()?;
        match store.get_documents(collection).await {
            Ok(docs) => Some(docs),
            Err(e) => {
                tracing::warn!(collection, error = %e, "failed to read collection");
                None
            }
        }
    }
}
