//! Player-conflict graph construction.
//!
//! Two matches conflict when they share at least one (team, player)
//! participant; such matches can never occupy the same slot. The
//! relation is symmetric and irreflexive.
//!
//! # Complexity
//! O(P) over total player occurrences to build the index, then
//! O(sum of group-size squared) to materialize pairwise edges. Group
//! sizes stay small here: a player appears in only a few matches.

use std::collections::{HashMap, HashSet};

use crate::models::Matchup;

/// Builds one conflict set per match index.
///
/// # Algorithm
/// Index (team, player) → match indices referencing that player under
/// that team; every group of 2+ indices gets full pairwise edges.
/// Qualifying by team means identical names on different teams never
/// collide.
pub fn conflict_sets(matches: &[Matchup]) -> Vec<HashSet<usize>> {
    let mut player_matches: HashMap<(&str, &str), Vec<usize>> = HashMap::new();
    for (idx, m) in matches.iter().enumerate() {
        for key in m.players() {
            player_matches.entry(key).or_default().push(idx);
        }
    }

    let mut conflicts = vec![HashSet::new(); matches.len()];
    for group in player_matches.values() {
        for &i in group {
            for &j in group {
                if i != j {
                    conflicts[i].insert(j);
                }
            }
        }
    }
    conflicts
}
