//! Capacity-bounded greedy slot assigner.
//!
//! # Algorithm
//!
//! 1. Degree per match = size of its conflict set.
//! 2. Stable sort of match indices by degree descending; ties keep
//!    match-list order. Most-conflicted matches pick their slot first,
//!    which reduces the chance they become unplaceable later.
//! 3. For each match in that order, scan slots ascending and place it
//!    into the first slot holding fewer than `courts` matches and no
//!    conflicting occupant.
//! 4. A match no slot can take goes to the unscheduled list.
//!
//! This is bounded-capacity greedy graph coloring. It is deterministic
//! and never backtracks; unplaceable matches are a normal output.
//!
//! # Complexity
//! O(n * s * c) where n=matches, s=slots, c=courts.
//!
//! # Reference
//! Welsh & Powell (1967), "An upper bound for the chromatic number of
//! a graph and its application to timetabling problems"

use std::collections::HashSet;

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{Matchup, SlotAssignment};

/// Greedy most-constrained-first slot assigner.
///
/// Configured with the per-slot court capacity; the slot count is a
/// per-run argument so one assigner can be reused across window
/// configurations.
///
/// # Example
///
/// ```
/// use meet_schedule::conflict::conflict_sets;
/// use meet_schedule::models::{EventCategory, MatchSide, Matchup, RankLabel};
/// use meet_schedule::scheduler::SlotAssigner;
///
/// let matches = vec![Matchup::new(
///     EventCategory::MensSingles,
///     RankLabel::new("Rank 1"),
///     MatchSide::new("UCD", vec!["Alice".into()]),
///     MatchSide::new("UCSC", vec!["Bea".into()]),
/// )];
/// let conflicts = conflict_sets(&matches);
///
/// let assigner = SlotAssigner::new(6);
/// let assignment = assigner.assign(&matches, &conflicts, 4).unwrap();
/// assert_eq!(assignment.slot_of(0), Some(0));
/// assert!(assignment.is_complete());
/// ```
#[derive(Debug, Clone)]
pub struct SlotAssigner {
    courts: usize,
}

impl SlotAssigner {
    /// Creates an assigner with the given court capacity per slot.
    pub fn new(courts: usize) -> Self {
        Self { courts }
    }

    /// Court capacity per slot.
    pub fn courts(&self) -> usize {
        self.courts
    }

    /// Assigns matches to `slot_count` slots.
    ///
    /// # Errors
    /// Configuration errors: zero courts, zero slots, or a conflict
    /// list whose length does not match the match list.
    pub fn assign(
        &self,
        matches: &[Matchup],
        conflicts: &[HashSet<usize>],
        slot_count: usize,
    ) -> ScheduleResult<SlotAssignment> {
        if self.courts == 0 {
            return Err(ScheduleError::configuration("court capacity must be positive"));
        }
        if slot_count == 0 {
            return Err(ScheduleError::configuration(
                "slot count must be positive (no slots derivable from the configured windows)",
            ));
        }
        if conflicts.len() != matches.len() {
            return Err(ScheduleError::configuration(format!(
                "conflict list covers {} matches, expected {}",
                conflicts.len(),
                matches.len()
            )));
        }

        let mut assignment = SlotAssignment::new(matches.len(), slot_count);

        for &mid in &placement_order(conflicts) {
            let placed = (0..slot_count).find(|&s| {
                assignment.slot_matches[s].len() < self.courts
                    && assignment.slot_matches[s]
                        .iter()
                        .all(|other| !conflicts[mid].contains(other))
            });

            match placed {
                Some(s) => {
                    assignment.slot_matches[s].push(mid);
                    assignment.match_slot[mid] = Some(s);
                }
                None => assignment.unscheduled.push(mid),
            }
        }

        Ok(assignment)
    }
}

/// Match indices in placement order: degree descending, stable on ties.
///
/// The stable sort keeps match-list order among equal degrees, which
/// makes the whole pipeline reproducible.
pub fn placement_order(conflicts: &[HashSet<usize>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..conflicts.len()).collect();
    order.sort_by(|&a, &b| conflicts[b].len().cmp(&conflicts[a].len()));
    order
}
