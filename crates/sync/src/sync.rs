//! Refetch-then-write room synchronization
//!
//! Concurrent clients each hold their own copy of a room and write whole
//! documents back to a shared store, so a stale copy must never be the base
//! of a mutation. [`RoomSync::with_room`] re-fetches the latest document,
//! applies one logical edit in memory, and persists the full result. The
//! race window between two clients shrinks to roughly one store round trip;
//! it does not close, and the later put wins.

use tracing::{debug, instrument};

use freeday_core::{invariants, Room, RoomId};

use crate::error::{Error, Result};
use crate::store::{room_key, DocumentStore};

/// Whether a mutation actually altered the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Changed,
    Unchanged,
}

/// Synchronizer over a document store
pub struct RoomSync<S> {
    store: S,
}

impl<S: DocumentStore> RoomSync<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch the current document for a room
    #[instrument(skip(self))]
    pub async fn fetch_room(&self, id: &RoomId) -> Result<Room> {
        let value = self
            .store
            .get(&room_key(id))
            .await?
            .ok_or_else(|| Error::RoomNotFound(id.to_string()))?;

        Ok(serde_json::from_value(value)?)
    }

    /// Persist a full room document, replacing any prior version
    #[instrument(skip(self, room), fields(room = %room.id))]
    pub async fn put_room(&self, room: &Room) -> Result<()> {
        invariants::assert_room_invariants(room);
        self.store
            .put(&room_key(&room.id), serde_json::to_value(room)?)
            .await
    }

    /// Run one mutation against a fresh copy of the room.
    ///
    /// Fetches the latest document, applies `mutate` in memory, and writes
    /// the whole document back unless the mutation reports
    /// [`Applied::Unchanged`]. The refetched room is returned either way so
    /// the caller can replace any cached copy.
    ///
    /// Fails with [`Error::RoomNotFound`] if no document exists; a failed
    /// mutation aborts before anything is written.
    #[instrument(skip(self, mutate))]
    pub async fn with_room<F>(&self, id: &RoomId, mutate: F) -> Result<Room>
    where
        F: FnOnce(&mut Room) -> freeday_core::Result<Applied>,
    {
        let mut room = self.fetch_room(id).await?;

        match mutate(&mut room)? {
            Applied::Changed => self.put_room(&room).await?,
            Applied::Unchanged => debug!(room = %id, "mutation left room unchanged, skipping put"),
        }

        Ok(room)
    }
}
