//! Compiled-in school configuration.
//!
//! Terms, schedule tables, and the letter-cycle anchor are constants baked
//! into the binary rather than ingested from a file or the environment. This
//! module builds them through the validating model constructors so a bad edit
//! to the tables fails at startup, not mid-resolution.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{
    DayOffset, InvalidTerm, PeriodKind, ScheduleEntry, ScheduleError, ScheduleTable, Term,
    TermCalendar,
};

/// Configuration errors surfaced while assembling a [`SchoolConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid calendar date {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error(transparent)]
    Term(#[from] InvalidTerm),
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
    #[error("cycle anchor symbol '{symbol}' is not in the cycle alphabet")]
    AnchorSymbolMissing { symbol: char },
}

/// Anchor and alphabet for the rotating letter-day cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleConfig {
    /// Reference date whose letter is known.
    pub anchor_date: NaiveDate,
    /// Letter assigned to the anchor date.
    pub anchor_symbol: char,
    /// The cyclic alphabet, advanced by one per school weekday.
    pub alphabet: Vec<char>,
}

/// The full set of constants the resolvers run against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolConfig {
    pub terms: TermCalendar,
    /// Monday through Thursday timetable.
    pub weekday_table: ScheduleTable,
    /// Friday timetable (shorter periods, whole-school assembly).
    pub friday_table: ScheduleTable,
    pub cycle: CycleConfig,
    /// Before this local hour, a school morning counts down to the first
    /// period instead of reporting a gap.
    pub before_school_cutoff_hour: u32,
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, ConfigError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(ConfigError::InvalidDate { year, month, day })
}

fn slot(label: &str, start: (u32, u32), end: (u32, u32)) -> ScheduleEntry {
    ScheduleEntry::new(
        label,
        PeriodKind::Standard,
        DayOffset::from_hm(start.0, start.1),
        DayOffset::from_hm(end.0, end.1),
    )
}

fn end_of_day(label: &str, start: (u32, u32)) -> ScheduleEntry {
    ScheduleEntry::new(
        label,
        PeriodKind::EndOfDay,
        DayOffset::from_hm(start.0, start.1),
        DayOffset::END_OF_DAY,
    )
}

impl SchoolConfig {
    /// The standard 2025 configuration.
    ///
    /// Movement time between slots is absorbed into the preceding slot, so
    /// the tables stay contiguous: each period ends exactly when the next
    /// begins. Friday keeps Assembly at 10:56 by running Recess through the
    /// old movement gap.
    pub fn standard() -> Result<Self, ConfigError> {
        let terms = TermCalendar::new(vec![
            Term::new("Term 3", date(2025, 7, 22)?, date(2025, 9, 24)?)?,
            Term::new("Term 4", date(2025, 10, 13)?, date(2025, 12, 3)?)?,
        ]);

        // ====================================================================
        // Schedule tables
        // ====================================================================

        let weekday_table = ScheduleTable::new(vec![
            slot("Period 1", (8, 39), (9, 22)),
            slot("Period 2", (9, 22), (10, 5)),
            slot("Period 3", (10, 5), (10, 48)),
            slot("Recess", (10, 48), (11, 8)),
            slot("Period 4", (11, 8), (11, 51)),
            slot("Period 5", (11, 51), (12, 33)),
            slot("Registration", (12, 33), (12, 44)),
            slot("Lunch", (12, 44), (13, 34)),
            slot("Period 6", (13, 34), (14, 17)),
            slot("Period 7", (14, 17), (15, 0)),
            end_of_day("After School", (15, 0)),
        ])?;

        let friday_table = ScheduleTable::new(vec![
            slot("Period 1", (8, 39), (9, 17)),
            slot("Period 2", (9, 17), (9, 55)),
            slot("Period 3", (9, 55), (10, 33)),
            slot("Recess", (10, 33), (10, 56)),
            slot("Assembly", (10, 56), (11, 31)),
            slot("Period 4", (11, 31), (12, 6)),
            slot("Period 5", (12, 6), (12, 43)),
            slot("Registration", (12, 43), (12, 54)),
            slot("Lunch", (12, 54), (13, 44)),
            slot("Period 6", (13, 44), (14, 22)),
            slot("Period 7", (14, 22), (15, 0)),
            end_of_day("After School", (15, 0)),
        ])?;

        let cycle = CycleConfig {
            // First day of Term 3 is an A day.
            anchor_date: date(2025, 7, 22)?,
            anchor_symbol: 'A',
            alphabet: vec!['A', 'B', 'C', 'D', 'E', 'F'],
        };

        Ok(Self {
            terms,
            weekday_table,
            friday_table,
            cycle,
            before_school_cutoff_hour: 6,
        })
    }
}
