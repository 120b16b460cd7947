//! Matchup (match) model.
//!
//! A matchup is the unit of scheduling: one event/rank pairing between
//! two teams, each fielding its entry's player list (doubles 2 names,
//! singles 1). Immutable once built; identity is its position in the
//! generated match list.

use serde::{Deserialize, Serialize};

use super::{EventCategory, RankLabel};

/// One team's side of a matchup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSide {
    /// Team identifier.
    pub team: String,
    /// Ordered player names fielded by this team.
    pub players: Vec<String>,
}

impl MatchSide {
    /// Creates a side from a team and its player list.
    pub fn new(team: impl Into<String>, players: Vec<String>) -> Self {
        Self {
            team: team.into(),
            players,
        }
    }
}

/// A single match between two teams at one event/rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    /// Event category.
    pub event: EventCategory,
    /// Rank label pairing the two entries.
    pub rank: RankLabel,
    /// The two participating sides, in team-pair order.
    pub sides: [MatchSide; 2],
}

impl Matchup {
    /// Creates a matchup between two sides.
    pub fn new(event: EventCategory, rank: RankLabel, home: MatchSide, away: MatchSide) -> Self {
        Self {
            event,
            rank,
            sides: [home, away],
        }
    }

    /// Compact event+rank code, e.g. "MD3".
    ///
    /// Malformed rank labels contribute digit 0 ("MD0").
    pub fn code(&self) -> String {
        format!("{}{}", self.event.code(), self.rank.number().unwrap_or(0))
    }

    /// The two team identifiers, in side order.
    pub fn teams(&self) -> (&str, &str) {
        (&self.sides[0].team, &self.sides[1].team)
    }

    /// All (team, player) pairs across both sides.
    ///
    /// Player identity is qualified by team, so identical names on
    /// different teams never collide.
    pub fn players(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sides.iter().flat_map(|side| {
            side.players
                .iter()
                .map(move |name| (side.team.as_str(), name.as_str()))
        })
    }

    /// Human-readable description for warnings and reports,
    /// e.g. "MD Rank 3: UCD vs UCSC".
    pub fn describe(&self) -> String {
        let (t1, t2) = self.teams();
        format!("{} {}: {} vs {}", self.event.code(), self.rank, t1, t2)
    }
}
