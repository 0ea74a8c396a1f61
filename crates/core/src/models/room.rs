//! Room model - the shared scheduling document

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::calendar;

use super::{Participant, Role};

/// Length of generated room codes
const ROOM_ID_LEN: usize = 6;

/// Digits of a base-36 room code
const ROOM_ID_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Title given to rooms created without one
pub const UNTITLED_ROOM: &str = "Untitled Event";

/// Short shareable room code, doubling as the store key suffix
///
/// A fixed-length uppercase base-36 string, so it stays human-typeable when
/// read out loud or pasted into a join form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    /// Generate a fresh random code.
    ///
    /// 36^6 possible codes make collisions negligible at the scale of
    /// hand-shared scheduling rooms.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let code: String = (0..ROOM_ID_LEN)
            .map(|_| ROOM_ID_ALPHABET[rng.gen_range(0..ROOM_ID_ALPHABET.len())] as char)
            .collect();
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RoomId {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for RoomId {
    fn from(code: String) -> Self {
        Self(code)
    }
}

/// The shared scheduling document identified by a short code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub title: String,
    pub year: i32,
    /// Zero-based month, matching the wire format
    pub month: u32,
    /// Participants in join order; the creator is always first
    #[serde(default)]
    pub users: Vec<Participant>,
}

impl Room {
    /// Build a new room with a fresh code and its creator as admin
    pub fn new(creator: impl Into<String>, title: impl Into<String>, year: i32, month: u32) -> Self {
        Self {
            id: RoomId::generate(),
            title: title.into(),
            year,
            month,
            users: vec![Participant::new(creator, Role::Admin)],
        }
    }

    /// Day count of the target month
    pub fn days_in_month(&self) -> u32 {
        calendar::days_in_month(self.year, self.month)
    }

    /// Look up a participant by exact name.
    ///
    /// The single seam through which name-as-identity flows; a future move
    /// to stable ids only has to touch this pair of lookups.
    pub fn find_participant(&self, name: &str) -> Option<&Participant> {
        self.users.iter().find(|u| u.name == name)
    }

    pub fn find_participant_mut(&mut self, name: &str) -> Option<&mut Participant> {
        self.users.iter_mut().find(|u| u.name == name)
    }

    /// Participants that count toward consensus
    pub fn active_users(&self) -> impl Iterator<Item = &Participant> {
        self.users.iter().filter(|u| !u.hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_codes_are_short_uppercase_base36() {
        for _ in 0..100 {
            let id = RoomId::generate();
            assert_eq!(id.as_str().len(), ROOM_ID_LEN);
            assert!(id
                .as_str()
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_new_room_has_one_admin() {
        let room = Room::new("Ana", "Trip", 2025, 5);
        assert_eq!(room.users.len(), 1);
        assert_eq!(room.users[0].name, "Ana");
        assert_eq!(room.users[0].role, Role::Admin);
        assert!(!room.users[0].hidden);
        assert!(room.users[0].availability.is_empty());
    }

    #[test]
    fn test_find_participant_is_case_sensitive() {
        let room = Room::new("Ana", "Trip", 2025, 5);
        assert!(room.find_participant("Ana").is_some());
        assert!(room.find_participant("ana").is_none());
        assert!(room.find_participant("ANA").is_none());
    }

    #[test]
    fn test_active_users_skips_hidden() {
        let mut room = Room::new("Ana", "Trip", 2025, 5);
        room.users.push(Participant::new("Bob", Role::Member));
        room.find_participant_mut("Bob").unwrap().hidden = true;

        let active: Vec<_> = room.active_users().map(|u| u.name.as_str()).collect();
        assert_eq!(active, vec!["Ana"]);
    }

    #[test]
    fn test_room_document_wire_shape() {
        let mut room = Room::new("Ana", "Trip", 2025, 5);
        room.id = RoomId::from("AB12CD");
        room.users[0].availability.push(5);

        let json = serde_json::to_value(&room).unwrap();
        assert_eq!(json["id"], "AB12CD");
        assert_eq!(json["title"], "Trip");
        assert_eq!(json["year"], 2025);
        assert_eq!(json["month"], 5);
        assert_eq!(json["users"][0]["name"], "Ana");
        assert_eq!(json["users"][0]["role"], "admin");
        assert_eq!(json["users"][0]["availability"][0], 5);
        assert_eq!(json["users"][0]["hidden"], false);
    }
}
