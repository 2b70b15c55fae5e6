//! Open-hours catalog: weekly-hours notation parsing and point-in-time lookup.
//!
//! Turns compact notation strings such as
//! `"Mon-Thu, Sun 11:30 am - 10 pm / Sat 5:30 pm - 10 pm"` into per-weekday
//! schedules and answers "which venues are open right now" queries over a
//! catalog of such schedules.
//!
//! # Modules
//!
//! - **`time`**: weekday and time-of-day primitives
//! - **`core`**: schedule and venue domain models
//! - **`parsing`**: the hours-notation parser plus CSV/JSON catalog parsers
//! - **`io`**: unified catalog loading with format auto-detection
//! - **`services`**: concurrent catalog assembly and open-venue lookup
//! - **`config`**: TOML configuration for the lookup tool

pub mod config;
pub mod core;
pub mod io;
pub mod parsing;
pub mod services;
pub mod time;
