//! In-memory document store
//!
//! Reference [`DocumentStore`] backed by a process-local map. Stands in for
//! the remote backend in tests and single-process use; sharing one instance
//! behind an [`Arc`](std::sync::Arc) between clients reproduces the remote
//! store's last-writer-wins behavior.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::store::DocumentStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.documents.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, document: Value) -> Result<()> {
        self.documents.write().await.insert(key.to_string(), document);
        Ok(())
    }
}
