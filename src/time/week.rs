use std::fmt;

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Seconds in one day.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Days in one week.
pub const DAYS_PER_WEEK: usize = 7;

/// Three-letter day names, indexed by [`Weekday`] ordinal.
///
/// The table is the single source of truth for both directions of the
/// name/ordinal mapping and never changes after definition.
const SHORT_NAMES: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Day of the week, Sunday = 0 through Saturday = 6.
///
/// The ordinal matters: day-range expansion walks it forward modulo 7, and
/// schedules iterate their entries in this order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Weekday {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Weekday {
    /// All seven days in ordinal order.
    pub const ALL: [Weekday; DAYS_PER_WEEK] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    /// Ordinal value of this day (Sunday = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Day for an ordinal value, or `None` if out of range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Looks up a three-letter day name (`"Sun"` .. `"Sat"`, case-sensitive).
    pub fn from_short_name(name: &str) -> Option<Self> {
        SHORT_NAMES
            .iter()
            .position(|candidate| *candidate == name)
            .and_then(Self::from_index)
    }

    /// Canonical three-letter name of this day.
    pub fn short_name(self) -> &'static str {
        SHORT_NAMES[self.index()]
    }

    /// The following day, wrapping Saturday back around to Sunday.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % DAYS_PER_WEEK]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Sun => Weekday::Sun,
            chrono::Weekday::Mon => Weekday::Mon,
            chrono::Weekday::Tue => Weekday::Tue,
            chrono::Weekday::Wed => Weekday::Wed,
            chrono::Weekday::Thu => Weekday::Thu,
            chrono::Weekday::Fri => Weekday::Fri,
            chrono::Weekday::Sat => Weekday::Sat,
        }
    }
}

/// A point within a single day, stored as whole seconds since local midnight.
///
/// Always in `0..SECONDS_PER_DAY`; the constructors reject anything else, so
/// downstream interval arithmetic never has to re-validate.
///
/// # Examples
///
/// ```
/// use open_hours::time::TimeOfDay;
///
/// let lunch = TimeOfDay::from_hms(12, 30, 0).unwrap();
/// assert_eq!(lunch.seconds_from_midnight(), 45_000);
/// assert_eq!(lunch.to_string(), "12:30:00");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    /// Start of the day, 00:00:00.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Builds a time of day from an hour/minute/second triple.
    ///
    /// Returns `None` if any component is out of range (hour ≥ 24,
    /// minute ≥ 60, second ≥ 60).
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        if hour >= 24 || minute >= 60 || second >= 60 {
            return None;
        }
        Some(Self(hour * 3_600 + minute * 60 + second))
    }

    /// Builds a time of day from raw seconds since midnight.
    ///
    /// Returns `None` for values of a day or more.
    pub fn from_seconds(seconds: u32) -> Option<Self> {
        (seconds < SECONDS_PER_DAY).then_some(Self(seconds))
    }

    /// Seconds elapsed since local midnight.
    #[inline]
    pub fn seconds_from_midnight(self) -> u32 {
        self.0
    }

    /// Hour component, 0..24.
    pub fn hour(self) -> u32 {
        self.0 / 3_600
    }

    /// Minute component, 0..60.
    pub fn minute(self) -> u32 {
        self.0 / 60 % 60
    }

    /// Second component, 0..60.
    pub fn second(self) -> u32 {
        self.0 % 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

impl From<NaiveTime> for TimeOfDay {
    /// Keeps only whole seconds; a leap-second fraction is dropped.
    fn from(time: NaiveTime) -> Self {
        Self(time.num_seconds_from_midnight())
    }
}

impl From<NaiveDateTime> for TimeOfDay {
    /// Discards the calendar date entirely.
    fn from(datetime: NaiveDateTime) -> Self {
        datetime.time().into()
    }
}
