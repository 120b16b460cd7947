//! Run summary and unscheduled-match warning.
//!
//! Computed from a completed assignment for the reporting boundary:
//! a totals record and, when anything failed to fit, a human-readable
//! warning previewing the first few unplaced matches.

use serde::{Deserialize, Serialize};

use crate::models::{Matchup, SlotAssignment};

/// Maximum unscheduled matches listed in the warning preview.
const WARNING_PREVIEW_LIMIT: usize = 10;

/// Totals for one scheduling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// Total matches generated.
    pub total_matches: usize,
    /// Matches that received a slot.
    pub scheduled_matches: usize,
    /// Matches left unplaced.
    pub unscheduled_matches: usize,
}

impl ScheduleSummary {
    /// Computes the summary from an assignment.
    pub fn calculate(assignment: &SlotAssignment) -> Self {
        let total = assignment.match_count();
        let unscheduled = assignment.unscheduled.len();
        Self {
            total_matches: total,
            scheduled_matches: total - unscheduled,
            unscheduled_matches: unscheduled,
        }
    }
}

/// Builds the warning for unplaced matches, or `None` when all fit.
///
/// Lists up to the first ten unscheduled matches by event, rank, and
/// team pair, in the order the assigner deferred them.
pub fn unscheduled_warning(matches: &[Matchup], assignment: &SlotAssignment) -> Option<String> {
    if assignment.unscheduled.is_empty() {
        return None;
    }

    let mut warning = format!(
        "WARNING: {} matches could not be scheduled within the windows. \
         Consider adding slots or courts and retrying.",
        assignment.unscheduled.len()
    );
    for &mid in assignment.unscheduled.iter().take(WARNING_PREVIEW_LIMIT) {
        warning.push_str("\n  - ");
        warning.push_str(&matches[mid].describe());
    }
    Some(warning)
}
