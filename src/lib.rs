//! Multi-team meet scheduling.
//!
//! Assigns the matches of a 2- or 3-team meet to time slots and courts
//! so that no player appears in two simultaneous matches, under fixed
//! playing windows, a fixed slot duration, and a per-slot court
//! capacity. Matches that cannot fit are reported, not fatal.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Roster`, `EventCategory`, `RankLabel`,
//!   `Matchup`, `MeetWindow`, `Slot`, `SlotAssignment`
//! - **`matchgen`**: Candidate match generation across team pairs
//! - **`conflict`**: Player-conflict graph construction
//! - **`scheduler`**: The greedy slot assigner, summary, and the
//!   `schedule_meet` pipeline entry point
//! - **`projector`**: Time/court-keyed projection for formatting
//! - **`validation`**: Roster integrity checks at the ingestion boundary
//!
//! # Pipeline
//!
//! roster → `matchgen::build_matches` → `conflict::conflict_sets` →
//! (`models::build_slots`) → `scheduler::SlotAssigner::assign` →
//! `projector::project_schedule`. `scheduler::schedule_meet` runs the
//! whole chain from a `ScheduleRequest`. Every run is pure and
//! re-entrant; nothing persists between invocations.
//!
//! # References
//!
//! - Welsh & Powell (1967), "An upper bound for the chromatic number
//!   of a graph and its application to timetabling problems"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod conflict;
pub mod error;
pub mod matchgen;
pub mod models;
pub mod projector;
pub mod scheduler;
pub mod validation;

pub use error::{ScheduleError, ScheduleResult};
pub use scheduler::{schedule_meet, ScheduleOutcome, ScheduleRequest};
