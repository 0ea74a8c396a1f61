//! Room lifecycle operations
//!
//! The named entry points for everything that writes a room document:
//! create, join, toggle a day, hide/show, kick. Each mutation runs as one
//! [`RoomSync::with_room`] cycle; creation writes directly since no prior
//! document exists. Nothing else in the system may write a room.

use std::collections::BTreeMap;

use tracing::{debug, info, instrument};

use freeday_core::{
    compute_consensus, DayVerdict, Error as RoomError, Participant, Role, Room, RoomId,
    UNTITLED_ROOM,
};

use crate::error::Result;
use crate::store::DocumentStore;
use crate::sync::{Applied, RoomSync};

/// Years accepted by room creation; anything else is a typo
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1970..=9999;

/// Named room operations over a document store
pub struct RoomService<S> {
    sync: RoomSync<S>,
}

impl<S: DocumentStore> RoomService<S> {
    pub fn new(store: S) -> Self {
        Self {
            sync: RoomSync::new(store),
        }
    }

    /// Access the underlying synchronizer
    pub fn sync(&self) -> &RoomSync<S> {
        &self.sync
    }

    /// Create a room and persist it with `creator` as its admin.
    ///
    /// `month` is zero-based (see [`freeday_core::calendar::parse_month_input`]
    /// for the user-facing `YYYY-MM` form). A blank title becomes
    /// [`UNTITLED_ROOM`].
    #[instrument(skip(self))]
    pub async fn create_room(
        &self,
        creator: &str,
        title: &str,
        year: i32,
        month: u32,
    ) -> Result<Room> {
        let creator = creator.trim();
        if creator.is_empty() {
            return Err(RoomError::InvalidInput("creator name is empty".into()).into());
        }
        if month >= 12 {
            return Err(RoomError::InvalidInput(format!("month {} is outside 0..=11", month)).into());
        }
        if !YEAR_RANGE.contains(&year) {
            return Err(RoomError::InvalidInput(format!("year {} is out of range", year)).into());
        }

        let title = title.trim();
        let title = if title.is_empty() { UNTITLED_ROOM } else { title };

        let room = Room::new(creator, title, year, month);
        self.sync.put_room(&room).await?;

        info!(room = %room.id, %creator, year, month, "Created room");
        Ok(room)
    }

    /// Join a room as a member.
    ///
    /// Re-joining under an existing name is idempotent: the room comes back
    /// unchanged and that participant keeps their role and availability.
    #[instrument(skip(self))]
    pub async fn join_room(&self, id: &RoomId, name: &str) -> Result<Room> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RoomError::InvalidInput("participant name is empty".into()).into());
        }

        let room = self
            .sync
            .with_room(id, |room| {
                if room.find_participant(name).is_some() {
                    return Ok(Applied::Unchanged);
                }
                room.users.push(Participant::new(name, Role::Member));
                Ok(Applied::Changed)
            })
            .await?;

        info!(room = %id, %name, "Joined room");
        Ok(room)
    }

    /// Toggle one day of a participant's availability.
    #[instrument(skip(self))]
    pub async fn toggle_availability(&self, id: &RoomId, name: &str, day: u32) -> Result<Room> {
        let room = self
            .sync
            .with_room(id, |room| {
                let days = room.days_in_month();
                let user = room
                    .find_participant_mut(name)
                    .ok_or_else(|| RoomError::ParticipantNotFound(name.to_string()))?;
                if !(1..=days).contains(&day) {
                    return Err(RoomError::InvalidDay {
                        day,
                        days_in_month: days,
                    });
                }

                user.toggle_day(day);
                Ok(Applied::Changed)
            })
            .await?;

        debug!(room = %id, %name, day, "Toggled availability");
        Ok(room)
    }

    /// Hide or show a participant in the aggregation.
    ///
    /// Idempotent when the flag already has the requested value.
    #[instrument(skip(self))]
    pub async fn set_hidden(&self, id: &RoomId, name: &str, hidden: bool) -> Result<Room> {
        let room = self
            .sync
            .with_room(id, |room| {
                let user = room
                    .find_participant_mut(name)
                    .ok_or_else(|| RoomError::ParticipantNotFound(name.to_string()))?;
                if user.hidden == hidden {
                    return Ok(Applied::Unchanged);
                }
                user.hidden = hidden;
                Ok(Applied::Changed)
            })
            .await?;

        info!(room = %id, %name, hidden, "Set participant visibility");
        Ok(room)
    }

    /// Remove a participant from the room.
    ///
    /// A no-op, not an error, when the name is absent - two admins kicking
    /// the same participant must both succeed.
    #[instrument(skip(self))]
    pub async fn kick_participant(&self, id: &RoomId, name: &str) -> Result<Room> {
        let room = self
            .sync
            .with_room(id, |room| {
                let before = room.users.len();
                room.users.retain(|u| u.name != name);
                if room.users.len() == before {
                    Ok(Applied::Unchanged)
                } else {
                    Ok(Applied::Changed)
                }
            })
            .await?;

        info!(room = %id, %name, "Kicked participant");
        Ok(room)
    }

    /// Fetch the latest room document without mutating it.
    pub async fn fetch_room(&self, id: &RoomId) -> Result<Room> {
        self.sync.fetch_room(id).await
    }

    /// Fetch the latest room document and reduce it to per-day verdicts.
    #[instrument(skip(self))]
    pub async fn room_results(&self, id: &RoomId) -> Result<(Room, BTreeMap<u32, DayVerdict>)> {
        let room = self.sync.fetch_room(id).await?;
        let verdicts = compute_consensus(&room);
        Ok((room, verdicts))
    }
}
