#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use mindwell_api::config::Config;
use mindwell_api::state::AppState;
use mindwell_storage::documents::DocumentStore;
use mindwell_storage::error::StorageError;

/// In-memory store that records every write.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Value>>>,
}

impl MemoryStore {
    pub fn with(collection: &str, docs: Vec<Value>) -> Self {
        let store = Self::default();
        store
            .collections
            .lock()
            .unwrap()
            .insert(collection.to_string(), docs);
        store
    }

    pub fn documents(&self, collection: &str) -> Vec<Value> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn create_document(&self, collection: &str, record: Value) -> Result<(), StorageError> {
        self.collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push(record);
        Ok(())
    }

    async fn get_documents(&self, collection: &str) -> Result<Vec<Value>, StorageError> {
        Ok(self.documents(collection))
    }

    async fn list_collections(&self, limit: usize) -> Result<Vec<String>, StorageError> {
        let mut names: Vec<_> = self.collections.lock().unwrap().keys().cloned().collect();
        names.sort();
        names.truncate(limit);
        Ok(names)
    }
}

/// Store whose every call fails.
pub struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    async fn create_document(&self, _: &str, _: Value) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("connection refused".to_string()))
    }

    async fn get_documents(&self, _: &str) -> Result<Vec<Value>, StorageError> {
        Err(StorageError::Unavailable("connection refused".to_string()))
    }

    async fn list_collections(&self, _: usize) -> Result<Vec<String>, StorageError> {
        Err(StorageError::Unavailable("connection refused".to_string()))
    }
}

/// Fails listing with a long, non-ASCII message; everything else succeeds
/// empty.
pub struct VerboseFailingStore;

pub const VERBOSE_ERROR: &str =
    "la connexion au magasin de documents a échoué après délai d’attente — réessayez plus tard";

#[async_trait]
impl DocumentStore for VerboseFailingStore {
    async fn create_document(&self, _: &str, _: Value) -> Result<(), StorageError> {
        Ok(())
    }

    async fn get_documents(&self, _: &str) -> Result<Vec<Value>, StorageError> {
        Ok(Vec::new())
    }

    async fn list_collections(&self, _: usize) -> Result<Vec<String>, StorageError> {
        Err(StorageError::Unavailable(VERBOSE_ERROR.to_string()))
    }
}

pub fn configured() -> Config {
    Config {
        database_url: Some("http://localhost:9000".to_string()),
        database_name: Some("mindwell".to_string()),
        ..Config::default()
    }
}

pub fn app_without_store() -> Router {
    mindwell_api::router(AppState::new(None, Config::default()))
}

pub fn app_with(store: Arc<dyn DocumentStore>) -> Router {
    mindwell_api::router(AppState::new(Some(store), configured()))
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}
