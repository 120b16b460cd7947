//! Input validation for meet rosters.
//!
//! Checks structural integrity of the roster and team list before
//! scheduling. Detects:
//! - Team identifiers missing from the roster
//! - Duplicate team identifiers in the team list
//! - Entries whose player count does not match the event format
//! - Blank player names
//! - The same player listed twice within one entry
//!
//! The scheduler does not call this itself; callers that ingest
//! rosters from external files run it at the boundary to surface all
//! problems at once rather than silently treating bad keys as empty.

use std::collections::HashSet;

use crate::models::{EventCategory, Roster};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A team in the team list is not in the roster.
    UnknownTeam,
    /// A team identifier appears twice in the team list.
    DuplicateTeam,
    /// An entry's player count does not match the event format.
    EntrySize,
    /// A player name is empty or whitespace.
    BlankPlayerName,
    /// The same player appears twice in one entry.
    DuplicatePlayer,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a roster against the team list for a meet.
///
/// Checks:
/// 1. Every team identifier resolves in the roster
/// 2. No duplicate team identifiers
/// 3. Every entry fields the event's player count (doubles 2, singles 1)
/// 4. No blank player names
/// 5. No player listed twice within one entry
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(roster: &Roster, teams: &[String]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for id in teams {
        if !seen.insert(id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateTeam,
                format!("Duplicate team '{id}' in team list"),
            ));
        }
        if roster.team(id).is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownTeam,
                format!("Team '{id}' not in roster"),
            ));
        }
    }

    for id in teams {
        let Some(team) = roster.team(id) else {
            continue;
        };
        for event in EventCategory::ALL {
            for rank in team.ranks(event) {
                let players = team.players(event, rank);
                check_entry(id, event, rank.as_str(), players, &mut errors);
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_entry(
    team: &str,
    event: EventCategory,
    rank: &str,
    players: &[String],
    errors: &mut Vec<ValidationError>,
) {
    let expected = event.players_per_side();
    if !players.is_empty() && players.len() != expected {
        errors.push(ValidationError::new(
            ValidationErrorKind::EntrySize,
            format!(
                "{team} {event} {rank}: {} players listed, {expected} expected",
                players.len()
            ),
        ));
    }

    let mut names = HashSet::new();
    for name in players {
        if name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankPlayerName,
                format!("{team} {event} {rank}: blank player name"),
            ));
        } else if !names.insert(name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePlayer,
                format!("{team} {event} {rank}: '{name}' listed twice"),
            ));
        }
    }
}
