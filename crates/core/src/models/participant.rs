//! Participant and role models

use serde::{Deserialize, Serialize};

/// A participant's role within a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Room creator - may hide and kick other participants
    Admin,
    /// Standard participant
    Member,
}

impl Role {
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Member => "Member",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One named member of a room
///
/// The name doubles as the participant's identity: every mutation targets
/// a participant by exact, case-sensitive name match. There is no separate
/// stable id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub role: Role,
    /// Days of the target month marked free. Semantically a set: never
    /// contains duplicates, insertion order is the order of clicks.
    #[serde(default)]
    pub availability: Vec<u32>,
    /// Hidden participants are skipped by the aggregator but remain full
    /// members and can still edit their own availability.
    #[serde(default)]
    pub hidden: bool,
}

impl Participant {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            availability: Vec::new(),
            hidden: false,
        }
    }

    /// Has this participant marked `day` as free?
    pub fn is_available(&self, day: u32) -> bool {
        self.availability.contains(&day)
    }

    /// Toggle one day: mark it free if busy, busy if free.
    ///
    /// Returns whether the day is marked free after the toggle.
    pub fn toggle_day(&mut self, day: u32) -> bool {
        if let Some(pos) = self.availability.iter().position(|&d| d == day) {
            self.availability.remove(pos);
            false
        } else {
            self.availability.push(day);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_participant_is_visible_and_free_nowhere() {
        let p = Participant::new("Ana", Role::Admin);
        assert!(!p.hidden);
        assert!(p.availability.is_empty());
        assert!(!p.is_available(1));
    }

    #[test]
    fn test_toggle_day_is_its_own_inverse() {
        let mut p = Participant::new("Bob", Role::Member);
        let before = p.availability.clone();

        assert!(p.toggle_day(5));
        assert!(p.is_available(5));

        assert!(!p.toggle_day(5));
        assert_eq!(p.availability, before);
    }

    #[test]
    fn test_toggle_day_never_duplicates() {
        let mut p = Participant::new("Bob", Role::Member);
        p.toggle_day(5);
        p.toggle_day(10);
        p.toggle_day(5);
        p.toggle_day(5);

        assert_eq!(
            p.availability.iter().filter(|&&d| d == 5).count(),
            1,
            "day 5 appears more than once"
        );
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&Role::Member).unwrap(), "\"member\"");
    }

    #[test]
    fn test_participant_deserializes_with_missing_optional_fields() {
        // Stores that drop empty collections must still round-trip.
        let p: Participant = serde_json::from_str(r#"{"name":"Ana","role":"admin"}"#).unwrap();
        assert_eq!(p.name, "Ana");
        assert!(p.availability.is_empty());
        assert!(!p.hidden);
    }
}
