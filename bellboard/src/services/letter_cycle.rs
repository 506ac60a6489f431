//! Letter-day computation.
//!
//! Successive school weekdays rotate through a fixed six-letter alphabet,
//! anchored to a reference date whose letter is known. The cycle is
//! independent of the Mon-Fri pattern: six school weekdays after any given
//! weekday carries the same letter again.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, CycleConfig};
use crate::models::TermCalendar;

/// The letter-cycle label for a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterDay {
    /// A school weekday carrying a cycle letter.
    Letter(char),
    /// Saturday or Sunday; the cycle does not advance.
    Weekend,
    /// A weekday outside every term.
    Holidays,
}

impl fmt::Display for LetterDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LetterDay::Letter(symbol) => write!(f, "Day {}", symbol),
            LetterDay::Weekend => write!(f, "Weekend"),
            LetterDay::Holidays => write!(f, "School Holidays"),
        }
    }
}

fn is_school_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Signed count of weekdays walked from `anchor` to `date`.
///
/// Counts Mon-Fri days in `(anchor, date]` going forward, and negatively in
/// `(date, anchor]` going backward. Iterates a day at a time: term breaks are
/// not weekday-aligned, so there is no safe closed-form shortcut.
fn weekdays_from_anchor(anchor: NaiveDate, date: NaiveDate) -> i64 {
    let mut count = 0;
    let mut cursor = anchor;
    while cursor < date {
        cursor = match cursor.succ_opt() {
            Some(next) => next,
            None => break,
        };
        if is_school_weekday(cursor) {
            count += 1;
        }
    }
    while cursor > date {
        if is_school_weekday(cursor) {
            count -= 1;
        }
        cursor = match cursor.pred_opt() {
            Some(previous) => previous,
            None => break,
        };
    }
    count
}

/// Compute the letter-day label for `date`.
///
/// Weekends and out-of-term weekdays short-circuit to their own labels. For
/// school weekdays the anchor letter is advanced by the signed weekday count,
/// wrapped with `rem_euclid` so retreats stay in range.
///
/// The count deliberately does not skip holiday weekdays inside or between
/// terms; the cycle runs on uninterrupted Mon-Fri counting. Flagged in
/// DESIGN.md pending product clarification.
///
/// Fails only when the anchor symbol is missing from the alphabet, which is
/// a configuration-integrity problem, not a resolution failure.
pub fn letter_for(
    cycle: &CycleConfig,
    calendar: &TermCalendar,
    date: NaiveDate,
) -> Result<LetterDay, ConfigError> {
    if !is_school_weekday(date) {
        return Ok(LetterDay::Weekend);
    }
    if !calendar.contains(date) {
        return Ok(LetterDay::Holidays);
    }

    let anchor_index = cycle
        .alphabet
        .iter()
        .position(|&symbol| symbol == cycle.anchor_symbol)
        .ok_or(ConfigError::AnchorSymbolMissing {
            symbol: cycle.anchor_symbol,
        })?;

    let distance = weekdays_from_anchor(cycle.anchor_date, date);
    let len = cycle.alphabet.len() as i64;
    let index = (anchor_index as i64 + distance).rem_euclid(len) as usize;
    Ok(LetterDay::Letter(cycle.alphabet[index]))
}
