//! Client-side room cache
//!
//! Last-known copies of room documents, keyed by room code. An entry is
//! only ever as fresh as the last operation that produced it, which is why
//! every mutation goes through the synchronizer's refetch cycle and stores
//! its returned document back here instead of editing the cached copy.

use std::collections::HashMap;

use freeday_core::{Room, RoomId};

#[derive(Debug, Default)]
pub struct RoomCache {
    rooms: HashMap<RoomId, Room>,
}

impl RoomCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last-known copy of a room, if any
    pub fn get(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Replace the cached copy with a freshly fetched document
    pub fn insert(&mut self, room: Room) -> &Room {
        let id = room.id.clone();
        self.rooms.insert(id.clone(), room);
        &self.rooms[&id]
    }

    /// Drop a room, e.g. after the local user was kicked
    pub fn remove(&mut self, id: &RoomId) -> Option<Room> {
        self.rooms.remove(id)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_stale_copies() {
        let mut cache = RoomCache::new();
        let mut room = Room::new("Ana", "Trip", 2025, 5);
        let id = room.id.clone();

        cache.insert(room.clone());
        assert_eq!(cache.get(&id).unwrap().users.len(), 1);

        room.users
            .push(freeday_core::Participant::new("Bob", freeday_core::Role::Member));
        cache.insert(room);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&id).unwrap().users.len(), 2);
    }

    #[test]
    fn test_remove_forgets_the_room() {
        let mut cache = RoomCache::new();
        let room = Room::new("Ana", "Trip", 2025, 5);
        let id = room.id.clone();

        cache.insert(room);
        assert!(cache.remove(&id).is_some());
        assert!(cache.get(&id).is_none());
        assert!(cache.is_empty());
    }
}
