//! Timetable entries and validated schedule tables.
//!
//! A schedule table is the ordered list of named half-open time intervals for
//! one weekday class. Tables are validated once at construction; resolution
//! code can then assume they are sorted, contiguous, and properly terminated.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::time::DayOffset;

/// Kind of timetable entry.
///
/// The final entry of every table is tagged [`PeriodKind::EndOfDay`] instead
/// of being recognized by its display label, so the presentation layer never
/// has to compare period names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodKind {
    /// A regular timetable slot (lesson, recess, lunch, assembly, ...).
    #[default]
    Standard,
    /// The terminal slot that closes out the school day.
    EndOfDay,
}

/// A single named timetable interval, half-open over `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub label: String,
    pub kind: PeriodKind,
    pub start: DayOffset,
    pub end: DayOffset,
}

impl ScheduleEntry {
    pub fn new(label: impl Into<String>, kind: PeriodKind, start: DayOffset, end: DayOffset) -> Self {
        Self {
            label: label.into(),
            kind,
            start,
            end,
        }
    }

    /// Whether `at` falls within this entry's half-open interval.
    pub fn contains(&self, at: DayOffset) -> bool {
        at >= self.start && at < self.end
    }
}

/// Validation errors for schedule table construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("schedule table has no entries")]
    Empty,
    #[error("entry '{label}' has an empty or inverted interval ({start}..{end})")]
    InvertedEntry {
        label: String,
        start: DayOffset,
        end: DayOffset,
    },
    #[error("entry after '{label}' starts at {found}, expected {expected} (tables must be contiguous)")]
    Discontinuity {
        label: String,
        expected: DayOffset,
        found: DayOffset,
    },
    #[error("entry '{label}' is tagged end-of-day but is not the final entry")]
    MisplacedTerminal { label: String },
    #[error("final entry '{label}' is not tagged end-of-day")]
    MissingTerminal { label: String },
    #[error("final entry '{label}' ends at {end}, past the end of the day")]
    PastEndOfDay { label: String, end: DayOffset },
}

/// An ordered, contiguous sequence of timetable entries for one weekday class.
///
/// Invariants established at construction: the table is non-empty, every
/// entry's interval is non-empty, each entry ends exactly where the next
/// begins, only the final entry is tagged [`PeriodKind::EndOfDay`], and no
/// entry runs past 24:00.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleTable {
    entries: Vec<ScheduleEntry>,
}

impl ScheduleTable {
    /// Build a table, validating the interval invariants.
    pub fn new(entries: Vec<ScheduleEntry>) -> Result<Self, ScheduleError> {
        let last = entries.last().ok_or(ScheduleError::Empty)?;

        for entry in &entries {
            if entry.start >= entry.end {
                return Err(ScheduleError::InvertedEntry {
                    label: entry.label.clone(),
                    start: entry.start,
                    end: entry.end,
                });
            }
        }

        for pair in entries.windows(2) {
            if pair[1].start != pair[0].end {
                return Err(ScheduleError::Discontinuity {
                    label: pair[0].label.clone(),
                    expected: pair[0].end,
                    found: pair[1].start,
                });
            }
            if pair[0].kind == PeriodKind::EndOfDay {
                return Err(ScheduleError::MisplacedTerminal {
                    label: pair[0].label.clone(),
                });
            }
        }

        if last.kind != PeriodKind::EndOfDay {
            return Err(ScheduleError::MissingTerminal {
                label: last.label.clone(),
            });
        }
        if last.end > DayOffset::END_OF_DAY {
            return Err(ScheduleError::PastEndOfDay {
                label: last.label.clone(),
                end: last.end,
            });
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// The opening entry of the day. Tables are never empty.
    pub fn first(&self) -> &ScheduleEntry {
        &self.entries[0]
    }
}
