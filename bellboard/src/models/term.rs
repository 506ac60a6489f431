//! School term date ranges.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A term ends before it starts.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("term '{name}' ends before it starts ({start}..{end})")]
pub struct InvalidTerm {
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// A contiguous calendar date range during which school is in session.
///
/// The end date is inclusive: a term containing `end` is still in session
/// through the last instant of that day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Term {
    pub fn new(name: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Result<Self, InvalidTerm> {
        let name = name.into();
        if start > end {
            return Err(InvalidTerm { name, start, end });
        }
        Ok(Self { name, start, end })
    }

    /// Whether `date` falls within this term, end date inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// The ordered list of configured terms.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TermCalendar {
    terms: Vec<Term>,
}

impl TermCalendar {
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    /// Whether `date` falls inside any configured term. An empty calendar
    /// means school is never in session (treated as holidays).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.terms.iter().any(|term| term.contains(date))
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn term_3() -> Term {
        Term::new("Term 3", date(2025, 7, 22), date(2025, 9, 24)).unwrap()
    }

    #[test]
    fn test_inverted_term_rejected() {
        let result = Term::new("Backwards", date(2025, 9, 24), date(2025, 7, 22));
        assert!(result.is_err());
    }

    #[test]
    fn test_term_contains_start_date() {
        assert!(term_3().contains(date(2025, 7, 22)));
    }

    #[test]
    fn test_term_end_date_is_inclusive() {
        let term = term_3();
        assert!(term.contains(date(2025, 9, 24)));
        assert!(!term.contains(date(2025, 9, 25)));
    }

    #[test]
    fn test_term_excludes_day_before_start() {
        assert!(!term_3().contains(date(2025, 7, 21)));
    }

    #[test]
    fn test_single_day_term() {
        let term = Term::new("Pupil Free", date(2025, 8, 1), date(2025, 8, 1)).unwrap();
        assert!(term.contains(date(2025, 8, 1)));
        assert!(!term.contains(date(2025, 8, 2)));
    }

    #[test]
    fn test_empty_calendar_is_always_holidays() {
        let calendar = TermCalendar::default();
        assert!(!calendar.contains(date(2025, 7, 22)));
    }

    #[test]
    fn test_calendar_spans_multiple_terms() {
        let calendar = TermCalendar::new(vec![
            term_3(),
            Term::new("Term 4", date(2025, 10, 13), date(2025, 12, 3)).unwrap(),
        ]);
        assert!(calendar.contains(date(2025, 8, 15)));
        assert!(calendar.contains(date(2025, 11, 1)));
        // Between terms: holidays
        assert!(!calendar.contains(date(2025, 10, 1)));
    }
}
