//! Meet scheduling domain models.
//!
//! Provides the core data types for representing a meet and its
//! schedule: the typed roster (team → event → rank → players), the
//! generated matchups, the slot calendar, and the slot assignment
//! produced by the scheduler.

mod assignment;
mod calendar;
mod matchup;
mod roster;

pub use assignment::SlotAssignment;
pub use calendar::{build_slots, MeetWindow, Slot, TimeOfDay};
pub use matchup::{MatchSide, Matchup};
pub use roster::{EventCategory, RankLabel, Roster, TeamRoster};
