//! Open-venue lookup.
//!
//! The only calendar awareness in the crate lives here: a query timestamp is
//! reduced to its weekday and time of day, and everything after that is a
//! pure schedule containment test.

use chrono::{Datelike, NaiveDateTime};
use log::debug;

use crate::core::domain::Venue;
use crate::time::{TimeOfDay, Weekday};

/// Venues open at the given local instant, in catalog order.
pub fn find_open<'a>(venues: &'a [Venue], at: NaiveDateTime) -> Vec<&'a Venue> {
    let weekday = Weekday::from(at.weekday());
    let instant = TimeOfDay::from(at);

    let open: Vec<&Venue> = venues
        .iter()
        .filter(|venue| venue.schedule.is_open_at(weekday, instant))
        .collect();

    debug!(
        "{} of {} venues open on {} at {}",
        open.len(),
        venues.len(),
        weekday,
        instant
    );
    open
}
