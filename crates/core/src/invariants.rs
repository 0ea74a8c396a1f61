//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible room documents during
//! development. These checks are compiled out in release builds.

use std::collections::HashSet;

use crate::models::Room;

/// Validate that a room document is internally consistent
pub fn assert_room_invariants(room: &Room) {
    // Month is stored zero-based
    debug_assert!(
        room.month < 12,
        "Room {} has out-of-range month {}",
        room.id,
        room.month
    );

    // Title is never blank; creation substitutes a placeholder
    debug_assert!(
        !room.title.trim().is_empty(),
        "Room {} has empty title",
        room.id
    );

    // Names are the identity key, so they must be present and unique
    let mut seen = HashSet::new();
    for user in &room.users {
        debug_assert!(
            !user.name.trim().is_empty(),
            "Room {} has a participant with an empty name",
            room.id
        );
        debug_assert!(
            seen.insert(user.name.as_str()),
            "Room {} has duplicate participant name '{}'",
            room.id,
            user.name
        );
    }

    // Availability stays inside the target month and holds no duplicates
    let days = room.days_in_month();
    for user in &room.users {
        let mut marked = HashSet::new();
        for &day in &user.availability {
            debug_assert!(
                (1..=days).contains(&day),
                "Room {}: '{}' marked day {} outside 1..={}",
                room.id,
                user.name,
                day,
                days
            );
            debug_assert!(
                marked.insert(day),
                "Room {}: '{}' marked day {} twice",
                room.id,
                user.name,
                day
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Participant, Role};

    fn make_room() -> Room {
        let mut room = Room::new("Ana", "Test Room", 2025, 5);
        room.users.push(Participant::new("Bob", Role::Member));
        room
    }

    #[test]
    fn test_valid_room() {
        let mut room = make_room();
        room.find_participant_mut("Ana").unwrap().availability = vec![1, 15, 30];
        assert_room_invariants(&room);
    }

    #[test]
    fn test_emptied_room_is_still_consistent() {
        // Kicking everyone is permitted; the document stays valid.
        let mut room = make_room();
        room.users.clear();
        assert_room_invariants(&room);
    }

    #[test]
    #[should_panic(expected = "duplicate participant name")]
    fn test_duplicate_names_are_impossible() {
        let mut room = make_room();
        room.users.push(Participant::new("Bob", Role::Member));
        assert_room_invariants(&room);
    }

    #[test]
    #[should_panic(expected = "outside 1..=30")]
    fn test_out_of_month_day_is_impossible() {
        let mut room = make_room();
        room.find_participant_mut("Ana").unwrap().availability = vec![31];
        assert_room_invariants(&room);
    }

    #[test]
    #[should_panic(expected = "twice")]
    fn test_duplicate_day_is_impossible() {
        let mut room = make_room();
        room.find_participant_mut("Ana").unwrap().availability = vec![5, 5];
        assert_room_invariants(&room);
    }
}
