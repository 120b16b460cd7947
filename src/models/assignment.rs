//! Slot assignment (solution) model.
//!
//! A slot assignment is the scheduler's output: for every match, either
//! the slot it was placed into or no slot at all, plus the per-slot
//! occupancy lists and the unscheduled overflow. Courts are numbered
//! 1..K by placement order within each slot.

use serde::{Deserialize, Serialize};

/// A complete slot assignment for one scheduling run.
///
/// Invariants maintained by the assigner:
/// - `match_slot.len()` equals the match count;
/// - each slot's list length never exceeds the court capacity;
/// - a match index appears either in exactly one slot list or in
///   `unscheduled`, never both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAssignment {
    /// Per-match slot index; `None` when the match could not be placed.
    pub match_slot: Vec<Option<usize>>,
    /// Per-slot match indices, in placement (court) order.
    pub slot_matches: Vec<Vec<usize>>,
    /// Match indices with no slot, in placement-attempt order.
    pub unscheduled: Vec<usize>,
}

impl SlotAssignment {
    /// Creates an empty assignment for the given match and slot counts.
    pub fn new(match_count: usize, slot_count: usize) -> Self {
        Self {
            match_slot: vec![None; match_count],
            slot_matches: vec![Vec::new(); slot_count],
            unscheduled: Vec::new(),
        }
    }

    /// Slot index for a match, if it was placed.
    pub fn slot_of(&self, match_idx: usize) -> Option<usize> {
        self.match_slot.get(match_idx).copied().flatten()
    }

    /// Court number (1-based placement position) for a match, if placed.
    pub fn court_of(&self, match_idx: usize) -> Option<usize> {
        let slot = self.slot_of(match_idx)?;
        self.slot_matches[slot]
            .iter()
            .position(|&m| m == match_idx)
            .map(|pos| pos + 1)
    }

    /// Match indices occupying a slot, in court order.
    pub fn matches_in_slot(&self, slot: usize) -> &[usize] {
        self.slot_matches
            .get(slot)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of matches in this assignment.
    pub fn match_count(&self) -> usize {
        self.match_slot.len()
    }

    /// Number of slots in this assignment.
    pub fn slot_count(&self) -> usize {
        self.slot_matches.len()
    }

    /// Number of matches that received a slot.
    pub fn scheduled_count(&self) -> usize {
        self.match_slot.iter().filter(|s| s.is_some()).count()
    }

    /// Whether every match was placed.
    pub fn is_complete(&self) -> bool {
        self.unscheduled.is_empty()
    }
}
