use async_trait::async_trait;
use aws_sdk_s3::Client;
use serde_json::Value;
use uuid::Uuid;

use mindwell_core::collections;

use crate::error::StorageError;
use crate::objects;

/// A schema-less, append-only document store addressed by collection name.
///
/// Every call may fail; callers decide what to substitute.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Append one record to a collection.
    async fn create_document(&self, collection: &str, record: Value) -> Result<(), StorageError>;

    /// Every record currently stored in a collection.
    async fn get_documents(&self, collection: &str) -> Result<Vec<Value>, StorageError>;

    /// Names of at most `limit` collections.
    async fn list_collections(&self, limit: usize) -> Result<Vec<String>, StorageError>;
}

/// [`DocumentStore`] backed by one S3 bucket.
///
/// Layout: `<collection>/<uuid>.json`, one JSON object per document.
#[derive(Clone)]
pub struct S3DocumentStore {
    client: Client,
    bucket: String,
}

impl S3DocumentStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl DocumentStore for S3DocumentStore {
    async fn create_document(&self, collection: &str, record: Value) -> Result<(), StorageError> {
        let key = collections::document(collection, Uuid::new_v4());
        let body = serde_json::to_vec(&record)?;
        objects::put_object(
            &self.client,
            &self.bucket,
            &key,
            body,
            Some("application/json"),
        )
        .await?;
        tracing::debug!(collection, key = %key, "document created");
        Ok(())
    }

    async fn get_documents(&self, collection: &str) -> Result<Vec<Value>, StorageError> {
        let prefix = collections::prefix(collection);
        let keys = objects::list_objects(&self.client, &self.bucket, &prefix).await?;

        let mut documents = Vec::with_capacity(keys.len());
        for key in &keys {
            let body = objects::get_object(&self.client, &self.bucket, key).await?;
            match serde_json::from_slice(&body) {
                Ok(doc) => documents.push(doc),
                Err(e) => tracing::warn!(key = %key, error = %e, "skipping undecodable document"),
            }
        }

        Ok(documents)
    }

    async fn list_collections(&self, limit: usize) -> Result<Vec<String>, StorageError> {
        let prefixes =
            objects::list_prefixes(&self.client, &self.bucket, collections::DELIMITER, limit)
                .await?;
        Ok(prefixes
            .iter()
            .map(|p| collections::from_prefix(p).to_string())
            .collect())
    }
}
