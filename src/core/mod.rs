//! Core domain models for venue schedules.
//!
//! Defines the per-weekday opening-hours mapping, the interval containment
//! test (including intervals that cross midnight), and the catalog record
//! types shared by the parsing and service layers.

pub mod domain;

pub use domain::{CatalogRecord, Schedule, TimeRange, Venue};
