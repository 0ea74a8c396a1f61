//! Document store adapter
//!
//! Room documents live in an external key-value store reached through async
//! get/put. The store offers no transactions, no optimistic-concurrency
//! tokens and no subscriptions: every put replaces the whole document at its
//! key, and the later of two concurrent puts wins.
//!
//! This trait is the seam for different backends (remote document database,
//! in-memory map for tests).

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use freeday_core::RoomId;

use crate::error::Result;

/// Store key for a room document
pub fn room_key(id: &RoomId) -> String {
    format!("rooms/{}", id)
}

/// Async key-value access to the shared document store
///
/// Implementations report transport or backend failures as
/// [`Error::StoreUnavailable`](crate::Error::StoreUnavailable).
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch the document at `key`, or `None` if no value exists
    async fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Persist `document` at `key`, replacing any prior value
    async fn put(&self, key: &str, document: Value) -> Result<()>;
}

#[async_trait]
impl<S: DocumentStore + ?Sized> DocumentStore for Arc<S> {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        (**self).get(key).await
    }

    async fn put(&self, key: &str, document: Value) -> Result<()> {
        (**self).put(key, document).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_key_format() {
        let id = RoomId::from("AB12CD");
        assert_eq!(room_key(&id), "rooms/AB12CD");
    }
}
