//! Error types for room synchronization

use thiserror::Error;

/// Sync result type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the store, the synchronizer, and the room operations
#[derive(Debug, Error)]
pub enum Error {
    /// The backing store could not be reached or rejected the request
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// No document exists for this room code
    #[error("Room not found: {0}")]
    RoomNotFound(String),

    /// A stored document did not decode as a room
    #[error("Malformed room document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Domain-level rejection from the room model
    #[error(transparent)]
    Room(#[from] freeday_core::Error),
}
