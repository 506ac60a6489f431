//! Display-frame formatting.
//!
//! Turns a classified day state and letter label into the three text slots
//! the display exposes: day/date line, status line, and detail line.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::models::{PeriodKind, MS_PER_HOUR, MS_PER_SECOND};
use crate::services::DayState;

/// One tick's worth of display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFrame {
    /// Long-form weekday/date with the letter-day label appended.
    pub day_line: String,
    /// Current period name or day status.
    pub status_line: String,
    /// Countdown value and/or next-period hint.
    pub detail_line: String,
}

/// Format a millisecond duration as a zero-padded countdown.
///
/// `MM:SS` below one hour, `HH:MM:SS` at or above it. Negative durations
/// clamp to zero rather than rendering nonsense.
pub fn format_duration_ms(ms: i64) -> String {
    let total_seconds = ms.max(0) / MS_PER_SECOND;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    if ms >= MS_PER_HOUR {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// The day/date line: "Tuesday, 22 July 2025 (Day A)".
pub fn day_line(now: &DateTime<Local>, letter_label: &str) -> String {
    format!("{} ({})", now.format("%A, %-d %B %Y"), letter_label)
}

/// Assemble the full frame for one tick.
pub fn render(now: &DateTime<Local>, letter_label: &str, state: &DayState) -> DisplayFrame {
    let (status_line, detail_line) = match state {
        DayState::Holidays => (
            "School Holidays".to_string(),
            "School resumes next term.".to_string(),
        ),
        DayState::Weekend => (
            "Weekend".to_string(),
            "See you next school week!".to_string(),
        ),
        DayState::BeforeSchool {
            first_label,
            remaining_ms,
        } => (
            "Before School".to_string(),
            format!("{} until {}", format_duration_ms(*remaining_ms), first_label),
        ),
        DayState::InPeriod {
            label,
            kind: PeriodKind::EndOfDay,
            ..
        } => (label.clone(), "School's out!".to_string()),
        DayState::InPeriod {
            label,
            remaining_ms,
            next_label,
            ..
        } => {
            let countdown = format_duration_ms(*remaining_ms);
            let detail = match next_label {
                Some(next) => format!("{} (Next: {})", countdown, next),
                None => countdown,
            };
            (label.clone(), detail)
        }
        DayState::BetweenPeriods {
            next_label,
            remaining_ms,
        } => (
            "Waiting...".to_string(),
            format!("{} until {}", format_duration_ms(*remaining_ms), next_label),
        ),
        DayState::SchoolOver => (
            "After School".to_string(),
            "Enjoy your evening!".to_string(),
        ),
    };

    DisplayFrame {
        day_line: day_line(now, letter_label),
        status_line,
        detail_line,
    }
}
