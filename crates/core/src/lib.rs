//! Freeday Core Library
//!
//! Pure domain logic for shared month scheduling: the room document model,
//! calendar arithmetic for the target month, and the group availability
//! reduction. No I/O lives here; fetching and persisting room documents is
//! the job of `freeday-sync`.

pub mod calendar;
pub mod consensus;
pub mod error;
pub mod invariants;
pub mod models;

pub use consensus::{compute_consensus, DayVerdict};
pub use error::{Error, Result};
pub use models::{Participant, Role, Room, RoomId, UNTITLED_ROOM};
