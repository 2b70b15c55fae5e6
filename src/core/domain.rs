//! Domain models for venue opening hours.
//!
//! A [`Schedule`] maps each weekday to at most one open interval; a weekday
//! with no entry means the venue is closed for that entire day. Intervals may
//! cross midnight ([`TimeRange::crosses_midnight`]), which the containment
//! test handles without any special-casing by the caller.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::time::{TimeOfDay, Weekday};

/// One contiguous open interval within a day.
///
/// `close < open` is not an error: it marks an interval that crosses
/// midnight, e.g. 7 pm - 2 am. Both endpoints are excluded from the
/// interval, so an instant exactly at `open` or `close` tests false; that
/// way a venue is never both "open" and "closed" at the boundary minute.
///
/// # Examples
///
/// ```
/// use open_hours::core::domain::TimeRange;
/// use open_hours::time::TimeOfDay;
///
/// let evening = TimeRange::new(
///     TimeOfDay::from_hms(19, 0, 0).unwrap(),
///     TimeOfDay::from_hms(2, 0, 0).unwrap(),
/// );
/// assert!(evening.crosses_midnight());
/// assert!(evening.contains(TimeOfDay::from_hms(23, 0, 0).unwrap()));
/// assert!(evening.contains(TimeOfDay::from_hms(1, 0, 0).unwrap()));
/// assert!(!evening.contains(TimeOfDay::from_hms(10, 0, 0).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub open: TimeOfDay,
    pub close: TimeOfDay,
}

impl TimeRange {
    /// Creates a new open interval. No ordering constraint: `close < open`
    /// is the wraparound representation, and `close == open` is an empty
    /// interval (never contains anything).
    pub fn new(open: TimeOfDay, close: TimeOfDay) -> Self {
        Self { open, close }
    }

    /// Whether this interval runs past midnight into the next day.
    #[inline]
    pub fn crosses_midnight(&self) -> bool {
        self.close < self.open
    }

    /// Whether `instant` falls strictly inside this interval.
    ///
    /// A wraparound interval covers both its evening side and its
    /// small-hours tail: for 19:00 - 02:00 both 23:00 and 01:00 are inside,
    /// while the daytime gap between close and open is not. Endpoints are
    /// excluded either way.
    pub fn contains(&self, instant: TimeOfDay) -> bool {
        let open_seconds = self.open.seconds_from_midnight();
        let close_seconds = self.close.seconds_from_midnight();
        let instant_seconds = instant.seconds_from_midnight();

        if close_seconds < open_seconds {
            instant_seconds > open_seconds || instant_seconds < close_seconds
        } else {
            instant_seconds > open_seconds && instant_seconds < close_seconds
        }
    }
}

/// Weekly opening hours: at most one open interval per weekday.
///
/// Built by the notation parser and immutable afterwards from the caller's
/// point of view; queries never mutate it. Multiple notation clauses that
/// claim the same weekday resolve by last-write-wins through [`Schedule::merge`].
///
/// # Examples
///
/// ```
/// use open_hours::core::domain::{Schedule, TimeRange};
/// use open_hours::time::{TimeOfDay, Weekday};
///
/// let hours = TimeRange::new(
///     TimeOfDay::from_hms(11, 0, 0).unwrap(),
///     TimeOfDay::from_hms(23, 0, 0).unwrap(),
/// );
/// let schedule = Schedule::new().with_hours(Weekday::Mon, hours);
///
/// let noon = TimeOfDay::from_hms(12, 0, 0).unwrap();
/// assert!(schedule.is_open_at(Weekday::Mon, noon));
/// assert!(!schedule.is_open_at(Weekday::Tue, noon));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    by_day: BTreeMap<Weekday, TimeRange>,
}

impl Schedule {
    /// Creates a schedule with every day closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the open interval for one weekday.
    pub fn with_hours(mut self, day: Weekday, hours: TimeRange) -> Self {
        self.insert(day, hours);
        self
    }

    /// Sets the open interval for one weekday, replacing any previous entry.
    pub fn insert(&mut self, day: Weekday, hours: TimeRange) {
        self.by_day.insert(day, hours);
    }

    /// Folds `overlay` into this schedule: every weekday present in the
    /// overlay overwrites the corresponding entry here.
    ///
    /// Not commutative (the overlay always wins), so callers must apply
    /// notation clauses in source order to get "later clause overrides the
    /// same day" semantics.
    pub fn merge(&mut self, overlay: Schedule) {
        self.by_day.extend(overlay.by_day);
    }

    /// The open interval for `day`, or `None` if closed all day.
    pub fn hours_for(&self, day: Weekday) -> Option<&TimeRange> {
        self.by_day.get(&day)
    }

    /// Whether the venue is open at `instant` on `day`.
    ///
    /// A weekday without an entry is closed for every possible instant.
    pub fn is_open_at(&self, day: Weekday, instant: TimeOfDay) -> bool {
        match self.by_day.get(&day) {
            Some(hours) => hours.contains(instant),
            None => false,
        }
    }

    /// Days with an open interval, in ordinal order (Sunday first).
    pub fn open_days(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.by_day.keys().copied()
    }

    /// Number of weekdays with an open interval.
    pub fn len(&self) -> usize {
        self.by_day.len()
    }

    /// Whether every day of the week is closed.
    pub fn is_empty(&self) -> bool {
        self.by_day.is_empty()
    }
}

/// One catalog entry after parsing: a venue and its weekly schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    pub schedule: Schedule,
}

/// One catalog row before parsing: the venue name and its raw notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub name: String,
    pub raw_hours: String,
}
