//! Group availability reduction
//!
//! A pure fold from a room document to a per-day verdict. Nothing here
//! touches the store; the caller decides how fresh the room copy is.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::Room;

/// Verdict for one day of the target month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayVerdict {
    /// Every active participant marked the day free
    AllFree,
    /// Someone is busy, or nobody is voting
    Conflict,
}

impl DayVerdict {
    pub fn is_all_free(&self) -> bool {
        matches!(self, DayVerdict::AllFree)
    }
}

/// Compute the per-day group verdict for a room.
///
/// Hidden participants do not vote. A room with zero active participants
/// has no consensus, so every day is a [`DayVerdict::Conflict`].
/// Deterministic and side-effect free: the same room always reduces to the
/// same map.
pub fn compute_consensus(room: &Room) -> BTreeMap<u32, DayVerdict> {
    let active: Vec<_> = room.active_users().collect();

    (1..=room.days_in_month())
        .map(|day| {
            let verdict = if !active.is_empty() && active.iter().all(|u| u.is_available(day)) {
                DayVerdict::AllFree
            } else {
                DayVerdict::Conflict
            };
            (day, verdict)
        })
        .collect()
}
