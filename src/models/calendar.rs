//! Time-of-day, meet windows, and slot calendar construction.
//!
//! Play happens inside one or more time-of-day windows (e.g. a morning
//! block and an afternoon block). Each window is discretized into
//! half-open slots of a fixed duration; a slot whose end would pass the
//! window end is not emitted (no partial slots).
//!
//! # Window Order
//! Windows are processed in the order given. The slot list is
//! chronological only if the windows themselves are chronological and
//! non-overlapping; the builder does not validate or reorder them.

use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};

/// Minutes in a day.
const MINUTES_PER_DAY: u32 = 24 * 60;

/// A time of day, stored as minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    /// Creates a time of day from hour and minute.
    ///
    /// Returns a format error when hour > 23 or minute > 59.
    pub fn new(hour: u32, minute: u32) -> ScheduleResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(ScheduleError::format(format!(
                "time out of range: {hour:02}:{minute:02}"
            )));
        }
        Ok(Self(hour * 60 + minute))
    }

    /// Parses a 24-hour "HH:MM" string ("4:30" and "04:30" both accepted).
    pub fn parse(text: &str) -> ScheduleResult<Self> {
        let bad = || ScheduleError::format(format!("malformed time '{text}', expected HH:MM"));
        let (h, m) = text.split_once(':').ok_or_else(bad)?;
        let hour: u32 = h.trim().parse().map_err(|_| bad())?;
        let minute: u32 = m.trim().parse().map_err(|_| bad())?;
        Self::new(hour, minute)
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(&self) -> u32 {
        self.0
    }

    /// Hour component (0-23).
    #[inline]
    pub fn hour(&self) -> u32 {
        self.0 / 60
    }

    /// Minute component (0-59).
    #[inline]
    pub fn minute(&self) -> u32 {
        self.0 % 60
    }

    /// Adds a number of minutes, saturating at end of day.
    pub fn plus_minutes(&self, minutes: u32) -> Self {
        Self((self.0 + minutes).min(MINUTES_PER_DAY))
    }

    /// Zero-padded 12-hour display key with no AM/PM marker,
    /// e.g. 13:00 → "01:00", 00:15 → "12:15".
    ///
    /// Consumers disambiguate morning/afternoon via the window
    /// configuration.
    pub fn display_12h(&self) -> String {
        let hour = match self.hour() % 12 {
            0 => 12,
            h => h,
        };
        format!("{:02}:{:02}", hour, self.minute())
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// A (start, end) time-of-day window available for play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetWindow {
    /// Window start (inclusive).
    pub start: TimeOfDay,
    /// Window end (exclusive).
    pub end: TimeOfDay,
}

impl MeetWindow {
    /// Creates a window from two times of day.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Parses a window from two "HH:MM" strings.
    pub fn parse(start: &str, end: &str) -> ScheduleResult<Self> {
        Ok(Self::new(TimeOfDay::parse(start)?, TimeOfDay::parse(end)?))
    }

    /// Slots of `slot_minutes` that fit fully inside this window.
    ///
    /// An end at or before the start yields no slots; that is a
    /// degenerate window, not an error.
    pub fn slots(&self, slot_minutes: u32) -> Vec<Slot> {
        let mut slots = Vec::new();
        if slot_minutes == 0 {
            return slots;
        }
        let mut cursor = self.start.minutes();
        while cursor + slot_minutes <= self.end.minutes() {
            slots.push(Slot {
                start: TimeOfDay(cursor),
                end: TimeOfDay(cursor + slot_minutes),
            });
            cursor += slot_minutes;
        }
        slots
    }
}

/// A discrete half-open [start, end) playing interval.
///
/// Identity is the slot's position in the built slot list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Slot start (inclusive).
    pub start: TimeOfDay,
    /// Slot end (exclusive).
    pub end: TimeOfDay,
}

impl Slot {
    /// Slot duration in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u32 {
        self.end.minutes() - self.start.minutes()
    }

    /// Display key for this slot (12-hour start time).
    pub fn display_key(&self) -> String {
        self.start.display_12h()
    }
}

/// Builds the ordered slot list across all windows.
///
/// Slots are concatenated in window order, each window advancing by
/// `slot_minutes` from its start.
pub fn build_slots(windows: &[MeetWindow], slot_minutes: u32) -> Vec<Slot> {
    windows.iter().flat_map(|w| w.slots(slot_minutes)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time() {
        let t = TimeOfDay::parse("10:20").unwrap();
        assert_eq!(t.hour(), 10);
        assert_eq!(t.minute(), 20);

        // Single-digit hour accepted
        let t = TimeOfDay::parse("4:30").unwrap();
        assert_eq!(t.hour(), 4);
    }

    #[test]
    fn test_parse_time_malformed() {
        for bad in ["noon", "25:00", "10:60", "10", "10:xx", ""] {
            let err = TimeOfDay::parse(bad).unwrap_err();
            assert!(matches!(err, ScheduleError::Format { .. }), "{bad}");
        }
    }

    #[test]
    fn test_display_12h() {
        assert_eq!(TimeOfDay::parse("13:00").unwrap().display_12h(), "01:00");
        assert_eq!(TimeOfDay::parse("11:30").unwrap().display_12h(), "11:30");
        assert_eq!(TimeOfDay::parse("12:00").unwrap().display_12h(), "12:00");
        assert_eq!(TimeOfDay::parse("00:15").unwrap().display_12h(), "12:15");
        assert_eq!(TimeOfDay::parse("19:40").unwrap().display_12h(), "07:40");
    }

    #[test]
    fn test_display_24h() {
        assert_eq!(TimeOfDay::parse("9:05").unwrap().to_string(), "09:05");
    }

    #[test]
    fn test_window_slots() {
        // 10:20-12:00 in 20-minute slots → 10:20, 10:40, 11:00, 11:20, 11:40
        let w = MeetWindow::parse("10:20", "12:00").unwrap();
        let slots = w.slots(20);
        assert_eq!(slots.len(), 5);
        assert_eq!(slots[0].start, TimeOfDay::parse("10:20").unwrap());
        assert_eq!(slots[4].end, TimeOfDay::parse("12:00").unwrap());
    }

    #[test]
    fn test_window_no_partial_slot() {
        // 10:00-10:50 in 20-minute slots → 10:00, 10:20 only
        let w = MeetWindow::parse("10:00", "10:50").unwrap();
        assert_eq!(w.slots(20).len(), 2);
    }

    #[test]
    fn test_degenerate_window_yields_no_slots() {
        let w = MeetWindow::parse("12:00", "12:00").unwrap();
        assert!(w.slots(20).is_empty());

        let w = MeetWindow::parse("14:00", "12:00").unwrap();
        assert!(w.slots(20).is_empty());
    }

    #[test]
    fn test_build_slots_concatenates_windows() {
        let windows = vec![
            MeetWindow::parse("10:20", "12:00").unwrap(),
            MeetWindow::parse("13:00", "19:00").unwrap(),
        ];
        let slots = build_slots(&windows, 20);
        // 5 from the morning window + 18 from the afternoon window
        assert_eq!(slots.len(), 23);
        assert_eq!(slots[5].start, TimeOfDay::parse("13:00").unwrap());
        for s in &slots {
            assert_eq!(s.duration_minutes(), 20);
        }
    }

    #[test]
    fn test_slot_display_key() {
        let windows = vec![MeetWindow::parse("13:00", "14:00").unwrap()];
        let slots = build_slots(&windows, 30);
        assert_eq!(slots[0].display_key(), "01:00");
        assert_eq!(slots[1].display_key(), "01:30");
    }
}
