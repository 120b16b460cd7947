//! Candidate match generation.
//!
//! Expands a roster and an ordered 2- or 3-team list into the full
//! candidate match list: for every event category (in priority order)
//! and every rank present for that event on any participating team,
//! one match per unordered team pair whose two entries are both
//! non-empty. A tri-meet therefore produces up to three pairwise
//! matches per event/rank.
//!
//! The resulting list order is load-bearing downstream: it is the
//! stable tie-break for the assigner's placement order.

use std::collections::BTreeSet;

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{EventCategory, MatchSide, Matchup, RankLabel, Roster, TeamRoster};

/// Builds the ordered candidate match list for a meet.
///
/// # Algorithm
/// 1. Resolve the 2 or 3 team identifiers against the roster.
/// 2. For each event category in priority order, union the rank labels
///    present across the participating teams and sort them numerically
///    (malformed labels last).
/// 3. For each rank and each unordered team pair, emit one match iff
///    both teams field a non-empty entry. A missing entry yields no
///    match for that pairing, never an error.
///
/// # Errors
/// Configuration errors abort before any matches are built: team count
/// outside 2-3, a duplicate team identifier, or a team missing from
/// the roster.
pub fn build_matches(roster: &Roster, teams: &[String]) -> ScheduleResult<Vec<Matchup>> {
    let sides = resolve_teams(roster, teams)?;
    let pairings = team_pairings(sides.len());

    let mut matches = Vec::new();
    for event in EventCategory::ALL {
        // BTreeSet orders the union numerically via RankLabel's Ord.
        let ranks: BTreeSet<&RankLabel> = sides
            .iter()
            .flat_map(|team| team.ranks(event))
            .collect();

        for rank in ranks {
            for &(a, b) in &pairings {
                let home = sides[a];
                let away = sides[b];
                if home.has_entry(event, rank) && away.has_entry(event, rank) {
                    matches.push(Matchup::new(
                        event,
                        rank.clone(),
                        MatchSide::new(home.id.as_str(), home.players(event, rank).to_vec()),
                        MatchSide::new(away.id.as_str(), away.players(event, rank).to_vec()),
                    ));
                }
            }
        }
    }
    Ok(matches)
}

/// Resolves team identifiers against the roster, in list order.
fn resolve_teams<'a>(roster: &'a Roster, teams: &[String]) -> ScheduleResult<Vec<&'a TeamRoster>> {
    if !(2..=3).contains(&teams.len()) {
        return Err(ScheduleError::configuration(format!(
            "a meet needs 2 or 3 teams, got {}",
            teams.len()
        )));
    }

    let mut resolved = Vec::with_capacity(teams.len());
    for (i, id) in teams.iter().enumerate() {
        if teams[..i].contains(id) {
            return Err(ScheduleError::configuration(format!(
                "duplicate team '{id}' in team list"
            )));
        }
        let team = roster
            .team(id)
            .ok_or_else(|| ScheduleError::configuration(format!("team '{id}' not in roster")))?;
        resolved.push(team);
    }
    Ok(resolved)
}

/// Unordered index pairs for 2 or 3 teams.
fn team_pairings(count: usize) -> Vec<(usize, usize)> {
    match count {
        2 => vec![(0, 1)],
        _ => vec![(0, 1), (0, 2), (1, 2)],
    }
}
