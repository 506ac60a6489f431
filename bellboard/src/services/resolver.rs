//! Period resolution: map a time-of-day offset onto a schedule table.

use crate::models::{DayOffset, ScheduleEntry, ScheduleTable};

/// Resolution result for one instant. Recomputed every tick, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPeriod<'a> {
    /// The entry whose half-open interval contains the instant, if any.
    pub current: Option<&'a ScheduleEntry>,
    /// The entry that starts next: the successor of `current`, or the first
    /// entry still ahead of the instant when nothing is active.
    pub next: Option<&'a ScheduleEntry>,
}

/// Scan `table` for the entry containing `at`.
///
/// Entries are sorted and contiguous (enforced at table construction), so the
/// first match is the only match: intervals are half-open, an offset exactly
/// on a boundary belongs to the later entry.
pub fn resolve(table: &ScheduleTable, at: DayOffset) -> ResolvedPeriod<'_> {
    for (index, entry) in table.entries().iter().enumerate() {
        if entry.contains(at) {
            return ResolvedPeriod {
                current: Some(entry),
                next: table.entries().get(index + 1),
            };
        }
        if at < entry.start {
            return ResolvedPeriod {
                current: None,
                next: Some(entry),
            };
        }
    }
    // Past the final entry's end.
    ResolvedPeriod {
        current: None,
        next: None,
    }
}
