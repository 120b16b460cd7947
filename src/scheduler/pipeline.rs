//! End-to-end scheduling pipeline.
//!
//! Ties the stages together for one meet:
//! roster → match generation → conflict graph → slot calendar →
//! greedy assignment → summary/warning → projection.
//!
//! Each run is a pure, self-contained computation over its inputs;
//! nothing is cached between invocations, so a caller can retry with
//! different windows or capacities after an incomplete run.

use serde::{Deserialize, Serialize};

use crate::conflict::conflict_sets;
use crate::error::{ScheduleError, ScheduleResult};
use crate::matchgen::build_matches;
use crate::models::{build_slots, Matchup, MeetWindow, Roster, Slot, SlotAssignment};
use crate::projector::{project_schedule, ProjectedSchedule};
use crate::scheduler::greedy::SlotAssigner;
use crate::scheduler::summary::{unscheduled_warning, ScheduleSummary};

/// Default court capacity per slot.
const DEFAULT_COURTS: usize = 6;
/// Default slot duration in minutes.
const DEFAULT_SLOT_MINUTES: u32 = 20;

/// Input container for a scheduling run.
///
/// Windows are kept as raw "HH:MM" string pairs, as delivered by the
/// roster-ingestion collaborator; they are parsed when the run starts
/// so malformed times fail the whole run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// The meet roster (read-only during the run).
    pub roster: Roster,
    /// Ordered participating team identifiers (2 or 3).
    pub teams: Vec<String>,
    /// Court capacity per slot.
    pub courts: usize,
    /// Slot duration in minutes.
    pub slot_minutes: u32,
    /// Ordered (start, end) windows as 24-hour "HH:MM" strings.
    pub windows: Vec<(String, String)>,
}

impl ScheduleRequest {
    /// Creates a request with the default capacity and slot duration.
    pub fn new(roster: Roster, teams: Vec<String>) -> Self {
        Self {
            roster,
            teams,
            courts: DEFAULT_COURTS,
            slot_minutes: DEFAULT_SLOT_MINUTES,
            windows: Vec::new(),
        }
    }

    /// Sets the court capacity per slot.
    pub fn with_courts(mut self, courts: usize) -> Self {
        self.courts = courts;
        self
    }

    /// Sets the slot duration in minutes.
    pub fn with_slot_minutes(mut self, minutes: u32) -> Self {
        self.slot_minutes = minutes;
        self
    }

    /// Appends a playing window given as "HH:MM" strings.
    pub fn with_window(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.windows.push((start.into(), end.into()));
        self
    }
}

/// Output of one scheduling run.
///
/// Always internally consistent: the assignment covers every generated
/// match, and the projection covers every slot. An incomplete run is
/// signalled by the summary/warning, never by partial output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Generated matches, in generation order (the index namespace).
    pub matches: Vec<Matchup>,
    /// The slot calendar, in window order.
    pub slots: Vec<Slot>,
    /// Slot assignment and unscheduled list.
    pub assignment: SlotAssignment,
    /// Totals record.
    pub summary: ScheduleSummary,
    /// Warning for unplaced matches; `None` when everything fit.
    pub warning: Option<String>,
    /// The time/court/match mapping for the formatting collaborator.
    pub schedule: ProjectedSchedule,
}

/// Runs the full scheduling pipeline for one meet.
///
/// # Errors
/// Configuration errors (bad team list, zero courts or slot duration,
/// no slots derivable from the windows) and format errors (malformed
/// "HH:MM" strings) abort the run. Unplaceable matches do not.
pub fn schedule_meet(request: &ScheduleRequest) -> ScheduleResult<ScheduleOutcome> {
    if request.courts == 0 {
        return Err(ScheduleError::configuration("court capacity must be positive"));
    }
    if request.slot_minutes == 0 {
        return Err(ScheduleError::configuration("slot duration must be positive"));
    }

    let matches = build_matches(&request.roster, &request.teams)?;

    let windows = request
        .windows
        .iter()
        .map(|(start, end)| MeetWindow::parse(start, end))
        .collect::<ScheduleResult<Vec<_>>>()?;
    let slots = build_slots(&windows, request.slot_minutes);

    let conflicts = conflict_sets(&matches);
    let assignment = SlotAssigner::new(request.courts).assign(&matches, &conflicts, slots.len())?;

    let summary = ScheduleSummary::calculate(&assignment);
    let warning = unscheduled_warning(&matches, &assignment);
    let schedule = project_schedule(&matches, &assignment, &slots);

    Ok(ScheduleOutcome {
        matches,
        slots,
        assignment,
        summary,
        warning,
        schedule,
    })
}
