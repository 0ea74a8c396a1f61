//! Freeday Sync Library
//!
//! Shared-room synchronization over an opaque document store.
//!
//! # Architecture
//!
//! - **Store**: [`DocumentStore`] is plain async key-value access to the
//!   shared backend. Whole-document reads and writes, last writer wins.
//! - **Synchronizer**: [`RoomSync`] re-fetches the latest room document
//!   immediately before every mutation and writes the whole document back.
//! - **Service**: [`RoomService`] exposes the named room operations
//!   (create, join, toggle a day, hide, kick) on top of the synchronizer.
//!
//! # Usage
//!
//! ```ignore
//! let service = RoomService::new(MemoryStore::new());
//!
//! let room = service.create_room("Ana", "June trip", 2025, 5).await?;
//! service.join_room(&room.id, "Bob").await?;
//! service.toggle_availability(&room.id, "Bob", 14).await?;
//!
//! let (room, verdicts) = service.room_results(&room.id).await?;
//! ```

pub mod cache;
pub mod error;
pub mod memory;
pub mod rooms;
pub mod store;
pub mod sync;

pub use cache::RoomCache;
pub use error::{Error, Result};
pub use memory::MemoryStore;
pub use rooms::RoomService;
pub use store::{room_key, DocumentStore};
pub use sync::{Applied, RoomSync};
