//! Weekday and fixed time-slot catalog.
//!
//! The teaching week is a fixed grid: five weekdays by four two-hour
//! windows (08:30-10:30, 10:30-12:30, 12:30-14:30, 14:30-16:30), giving
//! 20 (day, window) cells per venue per term. Every placement occupies
//! exactly one cell; the planner never does free-form time arithmetic.
//!
//! # Time Model
//!
//! Times of day are minutes from midnight behind the [`TimeOfDay`]
//! newtype. Days are a closed five-variant enum; weekends are not part
//! of the teaching grid.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A teaching weekday (Monday through Friday).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All teaching days, Monday first.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Three-letter abbreviation ("Mon").
    pub fn short_name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        };
        f.write_str(name)
    }
}

/// A time of day in minutes from midnight.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Creates a time of day from hour and minute.
    pub const fn from_hm(hour: u16, minute: u16) -> Self {
        Self(hour * 60 + minute)
    }

    /// Minutes from midnight.
    #[inline]
    pub const fn minutes(&self) -> u16 {
        self.0
    }

    /// Hour component (0-23).
    #[inline]
    pub const fn hour(&self) -> u16 {
        self.0 / 60
    }

    /// Minute component (0-59).
    #[inline]
    pub const fn minute(&self) -> u16 {
        self.0 % 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// One fixed daily teaching window [start, end).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotWindow {
    /// Window start (inclusive).
    pub start: TimeOfDay,
    /// Window end (exclusive).
    pub end: TimeOfDay,
}

impl SlotWindow {
    /// Creates a new window.
    pub const fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Window length in minutes.
    #[inline]
    pub const fn duration_minutes(&self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }

    /// Whether this window lies entirely inside [earliest, latest].
    pub fn within(&self, earliest: TimeOfDay, latest: TimeOfDay) -> bool {
        self.start >= earliest && self.end <= latest
    }
}

impl fmt::Display for SlotWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// The fixed daily windows, earliest first.
pub const DAILY_WINDOWS: [SlotWindow; 4] = [
    SlotWindow::new(TimeOfDay::from_hm(8, 30), TimeOfDay::from_hm(10, 30)),
    SlotWindow::new(TimeOfDay::from_hm(10, 30), TimeOfDay::from_hm(12, 30)),
    SlotWindow::new(TimeOfDay::from_hm(12, 30), TimeOfDay::from_hm(14, 30)),
    SlotWindow::new(TimeOfDay::from_hm(14, 30), TimeOfDay::from_hm(16, 30)),
];

/// Number of (day, window) cells in the weekly grid.
pub const CELLS_PER_WEEK: usize = Weekday::ALL.len() * DAILY_WINDOWS.len();

/// Index into [`DAILY_WINDOWS`] for a window starting at `start`.
pub fn window_index_of(start: TimeOfDay) -> Option<usize> {
    DAILY_WINDOWS.iter().position(|w| w.start == start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_of_day() {
        let t = TimeOfDay::from_hm(8, 30);
        assert_eq!(t.minutes(), 510);
        assert_eq!(t.hour(), 8);
        assert_eq!(t.minute(), 30);
        assert_eq!(t.to_string(), "08:30");
    }

    #[test]
    fn test_time_of_day_ordering() {
        assert!(TimeOfDay::from_hm(8, 30) < TimeOfDay::from_hm(10, 30));
        assert!(TimeOfDay::from_hm(14, 0) > TimeOfDay::from_hm(12, 30));
    }

    #[test]
    fn test_slot_window_within() {
        let w = SlotWindow::new(TimeOfDay::from_hm(10, 30), TimeOfDay::from_hm(12, 30));
        assert!(w.within(TimeOfDay::from_hm(8, 30), TimeOfDay::from_hm(16, 30)));
        assert!(w.within(TimeOfDay::from_hm(10, 30), TimeOfDay::from_hm(12, 30)));
        assert!(!w.within(TimeOfDay::from_hm(11, 0), TimeOfDay::from_hm(16, 30)));
        assert!(!w.within(TimeOfDay::from_hm(8, 30), TimeOfDay::from_hm(12, 0)));
    }

    #[test]
    fn test_catalog_shape() {
        assert_eq!(DAILY_WINDOWS.len(), 4);
        assert_eq!(Weekday::ALL.len(), 5);
        assert_eq!(CELLS_PER_WEEK, 20);

        // Windows tile the teaching day without gaps
        for pair in DAILY_WINDOWS.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert_eq!(DAILY_WINDOWS[0].start, TimeOfDay::from_hm(8, 30));
        assert_eq!(DAILY_WINDOWS[3].end, TimeOfDay::from_hm(16, 30));
    }

    #[test]
    fn test_window_durations() {
        for w in DAILY_WINDOWS {
            assert_eq!(w.duration_minutes(), 120);
        }
    }

    #[test]
    fn test_window_index_of() {
        assert_eq!(window_index_of(TimeOfDay::from_hm(8, 30)), Some(0));
        assert_eq!(window_index_of(TimeOfDay::from_hm(14, 30)), Some(3));
        assert_eq!(window_index_of(TimeOfDay::from_hm(9, 0)), None);
    }

    #[test]
    fn test_weekday_display() {
        assert_eq!(Weekday::Monday.to_string(), "Monday");
        assert_eq!(Weekday::Friday.short_name(), "Fri");
    }
}
