//! Whole-day classification: from a wall-clock instant to a display state.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::config::SchoolConfig;
use crate::models::{DayOffset, PeriodKind, ScheduleTable};
use crate::services::resolver;

/// What the display should be counting down to (or resting on) right now.
///
/// Recomputed from the live clock on every tick; ticks carry no state across.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayState {
    /// A date outside every configured term.
    Holidays,
    /// Saturday or Sunday inside a term.
    Weekend,
    /// A school morning before the cutoff hour, counting down to the opening
    /// entry. `remaining_ms` is a full date-time difference, not an
    /// offset-of-day difference, so it stays correct across midnight.
    BeforeSchool {
        first_label: String,
        remaining_ms: i64,
    },
    /// Inside a timetable entry.
    InPeriod {
        label: String,
        kind: PeriodKind,
        remaining_ms: i64,
        next_label: Option<String>,
    },
    /// Between the cutoff hour and the opening entry (or inside a table gap,
    /// were one ever configured), counting down to the next entry.
    BetweenPeriods {
        next_label: String,
        remaining_ms: i64,
    },
    /// Past the final entry of a table that closes out before midnight.
    SchoolOver,
}

/// Select the schedule table for `date`, or `None` on a non-school day.
///
/// Out-of-term dates and weekends have no table; Monday through Thursday use
/// the weekday table and Friday its own.
pub fn schedule_for(config: &SchoolConfig, date: NaiveDate) -> Option<&ScheduleTable> {
    if !config.terms.contains(date) {
        return None;
    }
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => None,
        Weekday::Fri => Some(&config.friday_table),
        _ => Some(&config.weekday_table),
    }
}

/// Classify an instant into the state the display should show.
pub fn classify(config: &SchoolConfig, now: DateTime<Local>) -> DayState {
    let date = now.date_naive();

    let Some(table) = schedule_for(config, date) else {
        if config.terms.contains(date) {
            return DayState::Weekend;
        }
        return DayState::Holidays;
    };

    let at = DayOffset::from_datetime(&now);
    let resolved = resolver::resolve(table, at);

    match (resolved.current, resolved.next) {
        (Some(entry), next) => DayState::InPeriod {
            label: entry.label.clone(),
            kind: entry.kind,
            remaining_ms: entry.end.value() - at.value(),
            next_label: next.map(|entry| entry.label.clone()),
        },
        (None, _) if now.hour() < config.before_school_cutoff_hour => {
            let first = table.first();
            let opening = first.start.to_naive_time().unwrap_or(NaiveTime::MIN);
            let remaining_ms = (date.and_time(opening) - now.naive_local()).num_milliseconds();
            DayState::BeforeSchool {
                first_label: first.label.clone(),
                remaining_ms,
            }
        }
        (None, Some(next)) => DayState::BetweenPeriods {
            next_label: next.label.clone(),
            remaining_ms: next.start.value() - at.value(),
        },
        (None, None) => DayState::SchoolOver,
    }
}
