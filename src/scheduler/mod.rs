//! The scheduling engine and its run-level wrappers.
//!
//! # Algorithm
//!
//! `SlotAssigner` performs capacity-bounded greedy graph coloring with
//! a most-constrained-first (degree descending, stable) order and a
//! first-fit ascending slot scan. It is deterministic and reports
//! unplaceable matches instead of failing.
//!
//! # Pipeline
//!
//! `schedule_meet` runs the whole chain from a `ScheduleRequest`:
//! match generation, conflict graph, slot calendar, assignment,
//! summary/warning, and projection into a `ScheduleOutcome`.
//!
//! # Reference
//!
//! Welsh & Powell (1967), "An upper bound for the chromatic number of
//! a graph and its application to timetabling problems"

mod greedy;
mod pipeline;
mod summary;

pub use greedy::{placement_order, SlotAssigner};
pub use pipeline::{schedule_meet, ScheduleOutcome, ScheduleRequest};
pub use summary::{unscheduled_warning, ScheduleSummary};
