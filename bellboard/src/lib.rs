//! # Bellboard
//!
//! School timetable countdown display engine.
//!
//! Bellboard maps the current wall-clock time onto a recurring weekly school
//! timetable and renders the result to a three-slot text display: which term
//! (if any) is in session, which period is running or coming up, how long it
//! has left, and the rotating letter-day label for the date.
//!
//! ## Features
//!
//! - **Term Calendar**: calendar-date membership checks against the configured
//!   term ranges, with inclusive end dates
//! - **Period Resolution**: half-open interval lookup of the active and
//!   upcoming timetable entries
//! - **Letter Cycle**: signed weekday-count rotation through a fixed
//!   six-letter alphabet anchored to a reference date
//! - **Presentation**: zero-padded countdown strings and long-form date lines
//! - **Runtime**: a 1 Hz tick loop over an injected clock and display sink
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`config`]: the compiled-in school configuration and its validation
//! - [`models`]: time-of-day offsets, schedule tables, and term ranges
//! - [`services`]: period resolution, letter-cycle computation, and whole-day
//!   classification
//! - [`presenter`]: display-frame formatting
//! - [`display`]: the display-sink capability and a terminal implementation
//! - [`runtime`]: the clock abstraction and the periodic tick loop

pub mod config;
pub mod display;
pub mod models;
pub mod presenter;
pub mod runtime;
pub mod services;
