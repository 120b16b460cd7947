//! Schedule projection for downstream formatting.
//!
//! Maps internal slot/match indices into the time-keyed, court-keyed
//! representation consumed by the formatting collaborator: display
//! time → court number string ("1", "2", ...) → placed match record.
//!
//! Every configured slot appears as a key even when empty, so the
//! consumer can render a gap-free timetable. Display keys are 12-hour
//! and carry no AM/PM marker; windows spanning both halves of the day
//! merge under one key and are disambiguated by the caller's window
//! configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{MatchSide, Matchup, Slot, SlotAssignment};

/// Display time → court number → placed match.
pub type ProjectedSchedule = BTreeMap<String, BTreeMap<String, PlacedMatch>>;

/// One match as it appears on the published timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedMatch {
    /// Event+rank code, e.g. "MD3".
    pub code: String,
    /// The two sides (team label and player names).
    pub sides: [MatchSide; 2],
}

impl PlacedMatch {
    fn from_matchup(m: &Matchup) -> Self {
        Self {
            code: m.code(),
            sides: m.sides.clone(),
        }
    }
}

/// Projects an assignment onto the slot calendar.
///
/// Court numbers are assigned 1..K strictly in placement order within
/// each slot, independent of team or event.
pub fn project_schedule(
    matches: &[Matchup],
    assignment: &SlotAssignment,
    slots: &[Slot],
) -> ProjectedSchedule {
    let mut projected = ProjectedSchedule::new();
    for (s, slot) in slots.iter().enumerate() {
        let courts = projected.entry(slot.display_key()).or_default();
        for (pos, &mid) in assignment.matches_in_slot(s).iter().enumerate() {
            courts.insert((pos + 1).to_string(), PlacedMatch::from_matchup(&matches[mid]));
        }
    }
    projected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{build_slots, EventCategory, MeetWindow, RankLabel};

    fn singles(team1: &str, p1: &str, team2: &str, p2: &str) -> Matchup {
        Matchup::new(
            EventCategory::MensSingles,
            RankLabel::new("Rank 1"),
            MatchSide::new(team1, vec![p1.into()]),
            MatchSide::new(team2, vec![p2.into()]),
        )
    }

    fn afternoon_slots(count_minutes: u32) -> Vec<Slot> {
        build_slots(
            &[MeetWindow::parse("13:00", "14:00").unwrap()],
            count_minutes,
        )
    }

    #[test]
    fn test_empty_assignment_projects_all_slot_keys() {
        let slots = afternoon_slots(20); // 01:00, 01:20, 01:40
        let assignment = SlotAssignment::new(0, slots.len());
        let projected = project_schedule(&[], &assignment, &slots);

        assert_eq!(projected.len(), 3);
        assert!(projected.contains_key("01:00"));
        assert!(projected.contains_key("01:20"));
        assert!(projected.contains_key("01:40"));
        assert!(projected.values().all(BTreeMap::is_empty));
    }

    #[test]
    fn test_courts_keyed_in_placement_order() {
        let matches = vec![
            singles("UCD", "Alice", "UCSC", "Bea"),
            singles("UCD", "Cara", "UCSC", "Dan"),
        ];
        let slots = afternoon_slots(30); // 01:00, 01:30
        let assignment = SlotAssignment {
            match_slot: vec![Some(0), Some(0)],
            slot_matches: vec![vec![0, 1], vec![]],
            unscheduled: vec![],
        };

        let projected = project_schedule(&matches, &assignment, &slots);
        let courts = &projected["01:00"];
        assert_eq!(courts.len(), 2);
        assert_eq!(courts["1"].code, "MS1");
        assert_eq!(courts["1"].sides[0].team, "UCD");
        assert_eq!(courts["1"].sides[0].players, vec!["Alice".to_string()]);
        assert_eq!(courts["2"].sides[1].players, vec!["Dan".to_string()]);
        assert!(projected["01:30"].is_empty());
    }

    #[test]
    fn test_unscheduled_matches_absent_from_projection() {
        let matches = vec![
            singles("UCD", "Alice", "UCSC", "Bea"),
            singles("UCD", "Alice", "SJSU", "Cleo"),
        ];
        let slots = afternoon_slots(60); // one slot
        let assignment = SlotAssignment {
            match_slot: vec![Some(0), None],
            slot_matches: vec![vec![0]],
            unscheduled: vec![1],
        };

        let projected = project_schedule(&matches, &assignment, &slots);
        assert_eq!(projected["01:00"].len(), 1);
    }

    #[test]
    fn test_projection_json_shape() {
        let matches = vec![singles("UCD", "Alice", "UCSC", "Bea")];
        let slots = afternoon_slots(60);
        let assignment = SlotAssignment {
            match_slot: vec![Some(0)],
            slot_matches: vec![vec![0]],
            unscheduled: vec![],
        };

        let projected = project_schedule(&matches, &assignment, &slots);
        let json = serde_json::to_value(&projected).unwrap();
        assert_eq!(json["01:00"]["1"]["code"], "MS1");
        assert_eq!(json["01:00"]["1"]["sides"][0]["team"], "UCD");
        assert_eq!(json["01:00"]["1"]["sides"][1]["players"][0], "Bea");
    }
}
