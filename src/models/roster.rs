//! Roster models: event categories, rank labels, and team entries.
//!
//! A roster maps each team to its entries per event category and rank.
//! Ranks pair comparably skilled players across teams: "Rank 3" on one
//! team meets "Rank 3" on another. Missing event/rank entries read as
//! empty, never as errors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A competition format code.
///
/// The declaration order is the fixed generation priority: women's
/// doubles first so it is not squeezed out of tight calendars, then
/// women's singles, men's doubles, mixed doubles, men's singles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Women's doubles (WD).
    #[serde(rename = "WD")]
    WomensDoubles,
    /// Women's singles (WS).
    #[serde(rename = "WS")]
    WomensSingles,
    /// Men's doubles (MD).
    #[serde(rename = "MD")]
    MensDoubles,
    /// Mixed doubles (XD).
    #[serde(rename = "XD")]
    MixedDoubles,
    /// Men's singles (MS).
    #[serde(rename = "MS")]
    MensSingles,
}

impl EventCategory {
    /// All categories in generation priority order.
    pub const ALL: [EventCategory; 5] = [
        EventCategory::WomensDoubles,
        EventCategory::WomensSingles,
        EventCategory::MensDoubles,
        EventCategory::MixedDoubles,
        EventCategory::MensSingles,
    ];

    /// Two-letter category code.
    pub fn code(&self) -> &'static str {
        match self {
            EventCategory::WomensDoubles => "WD",
            EventCategory::WomensSingles => "WS",
            EventCategory::MensDoubles => "MD",
            EventCategory::MixedDoubles => "XD",
            EventCategory::MensSingles => "MS",
        }
    }

    /// Parses a two-letter category code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Number of players one team fields per entry (doubles 2, singles 1).
    pub fn players_per_side(&self) -> usize {
        match self {
            EventCategory::WomensDoubles
            | EventCategory::MensDoubles
            | EventCategory::MixedDoubles => 2,
            EventCategory::WomensSingles | EventCategory::MensSingles => 1,
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A rank label of the form "Rank N".
///
/// Ordering uses the numeric suffix; labels whose last token does not
/// parse as an integer are tolerated and sort after all numeric ranks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankLabel(String);

/// Sort key for labels with no parseable numeric suffix.
const MALFORMED_RANK_KEY: u64 = u64::MAX;

impl RankLabel {
    /// Creates a rank label from its display string.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The raw label string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric suffix, parsed from the last whitespace-separated token.
    ///
    /// Returns `None` for malformed labels ("Rank ?", "Exhibition").
    pub fn number(&self) -> Option<u32> {
        self.0.split_whitespace().last()?.parse().ok()
    }

    /// Ordering key: the numeric suffix, or a large sentinel so
    /// malformed labels sort last.
    pub fn sort_key(&self) -> u64 {
        self.number()
            .map(u64::from)
            .unwrap_or(MALFORMED_RANK_KEY)
    }
}

impl PartialOrd for RankLabel {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankLabel {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.sort_key(), self.0.as_str()).cmp(&(other.sort_key(), other.0.as_str()))
    }
}

impl std::fmt::Display for RankLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RankLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// One team's entries: event category → rank → ordered player names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamRoster {
    /// Team identifier (e.g. a school code).
    pub id: String,
    /// Entries per event and rank. Absent keys read as empty.
    pub entries: BTreeMap<EventCategory, BTreeMap<RankLabel, Vec<String>>>,
}

impl TeamRoster {
    /// Creates an empty team roster.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Sets the player list for an event/rank entry.
    pub fn with_entry(
        mut self,
        event: EventCategory,
        rank: impl Into<RankLabel>,
        players: Vec<String>,
    ) -> Self {
        self.entries
            .entry(event)
            .or_default()
            .insert(rank.into(), players);
        self
    }

    /// Appends a single player to an event/rank entry.
    pub fn add_player(
        &mut self,
        event: EventCategory,
        rank: impl Into<RankLabel>,
        name: impl Into<String>,
    ) {
        self.entries
            .entry(event)
            .or_default()
            .entry(rank.into())
            .or_default()
            .push(name.into());
    }

    /// Player names for an event/rank entry. Empty when absent.
    pub fn players(&self, event: EventCategory, rank: &RankLabel) -> &[String] {
        self.entries
            .get(&event)
            .and_then(|ranks| ranks.get(rank))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the team fields at least one player for an event/rank.
    pub fn has_entry(&self, event: EventCategory, rank: &RankLabel) -> bool {
        !self.players(event, rank).is_empty()
    }

    /// Rank labels present for an event, in rank order.
    pub fn ranks(&self, event: EventCategory) -> impl Iterator<Item = &RankLabel> {
        self.entries.get(&event).into_iter().flat_map(|m| m.keys())
    }
}

/// A full meet roster: team identifier → team entries.
///
/// Owned by the caller and only read during a scheduling run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    /// Participating teams keyed by identifier.
    pub teams: BTreeMap<String, TeamRoster>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a team roster, keyed by its identifier.
    pub fn with_team(mut self, team: TeamRoster) -> Self {
        self.teams.insert(team.id.clone(), team);
        self
    }

    /// Looks up a team by identifier.
    pub fn team(&self, id: &str) -> Option<&TeamRoster> {
        self.teams.get(id)
    }

    /// Number of teams in the roster.
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_priority_order() {
        let codes: Vec<&str> = EventCategory::ALL.iter().map(|e| e.code()).collect();
        assert_eq!(codes, vec!["WD", "WS", "MD", "XD", "MS"]);
    }

    #[test]
    fn test_event_code_round_trip() {
        for event in EventCategory::ALL {
            assert_eq!(EventCategory::from_code(event.code()), Some(event));
        }
        assert_eq!(EventCategory::from_code("ZZ"), None);
    }

    #[test]
    fn test_players_per_side() {
        assert_eq!(EventCategory::MensDoubles.players_per_side(), 2);
        assert_eq!(EventCategory::MixedDoubles.players_per_side(), 2);
        assert_eq!(EventCategory::WomensSingles.players_per_side(), 1);
    }

    #[test]
    fn test_rank_number() {
        assert_eq!(RankLabel::new("Rank 7").number(), Some(7));
        assert_eq!(RankLabel::new("Rank 12").number(), Some(12));
        assert_eq!(RankLabel::new("Rank ?").number(), None);
        assert_eq!(RankLabel::new("").number(), None);
    }

    #[test]
    fn test_rank_ordering_numeric() {
        let mut ranks = vec![
            RankLabel::new("Rank 10"),
            RankLabel::new("Rank 2"),
            RankLabel::new("Rank 1"),
        ];
        ranks.sort();
        let labels: Vec<&str> = ranks.iter().map(|r| r.as_str()).collect();
        assert_eq!(labels, vec!["Rank 1", "Rank 2", "Rank 10"]);
    }

    #[test]
    fn test_malformed_rank_sorts_last() {
        let mut ranks = vec![
            RankLabel::new("Exhibition"),
            RankLabel::new("Rank 3"),
            RankLabel::new("Rank 1"),
        ];
        ranks.sort();
        assert_eq!(ranks.last().unwrap().as_str(), "Exhibition");
        assert_eq!(ranks[0].as_str(), "Rank 1");
    }

    #[test]
    fn test_team_roster_entry_access() {
        let team = TeamRoster::new("UCD").with_entry(
            EventCategory::MensDoubles,
            "Rank 1",
            vec!["Alice".into(), "Bob".into()],
        );

        let rank = RankLabel::new("Rank 1");
        assert_eq!(
            team.players(EventCategory::MensDoubles, &rank),
            &["Alice".to_string(), "Bob".to_string()]
        );
        assert!(team.has_entry(EventCategory::MensDoubles, &rank));

        // Absent event and absent rank both read as empty
        assert!(team
            .players(EventCategory::WomensSingles, &rank)
            .is_empty());
        assert!(!team.has_entry(EventCategory::MensDoubles, &RankLabel::new("Rank 2")));
    }

    #[test]
    fn test_add_player_appends() {
        let mut team = TeamRoster::new("UCSC");
        team.add_player(EventCategory::MensDoubles, "Rank 1", "Alice");
        team.add_player(EventCategory::MensDoubles, "Rank 1", "Bob");

        let rank = RankLabel::new("Rank 1");
        assert_eq!(team.players(EventCategory::MensDoubles, &rank).len(), 2);
    }

    #[test]
    fn test_ranks_iterate_in_order() {
        let team = TeamRoster::new("SJSU")
            .with_entry(EventCategory::MensSingles, "Rank 3", vec!["C".into()])
            .with_entry(EventCategory::MensSingles, "Rank 1", vec!["A".into()]);

        let ranks: Vec<&str> = team
            .ranks(EventCategory::MensSingles)
            .map(|r| r.as_str())
            .collect();
        assert_eq!(ranks, vec!["Rank 1", "Rank 3"]);
    }

    #[test]
    fn test_roster_lookup() {
        let roster = Roster::new()
            .with_team(TeamRoster::new("UCD"))
            .with_team(TeamRoster::new("UCSC"));

        assert_eq!(roster.team_count(), 2);
        assert!(roster.team("UCD").is_some());
        assert!(roster.team("MIT").is_none());
    }

    #[test]
    fn test_event_serialization_uses_code() {
        let json = serde_json::to_string(&EventCategory::MixedDoubles).unwrap();
        assert_eq!(json, "\"XD\"");
    }

    #[test]
    fn test_rank_serialization_transparent() {
        let json = serde_json::to_string(&RankLabel::new("Rank 4")).unwrap();
        assert_eq!(json, "\"Rank 4\"");
    }
}
