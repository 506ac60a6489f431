use std::fmt;

use chrono::{DateTime, Local, NaiveTime, Timelike};
use serde::*;

/// Time-of-day offset in milliseconds since local midnight.
///
/// All timetable boundaries are expressed as offsets into the current day,
/// so a single day's schedule can be compared against the live clock with
/// plain integer arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DayOffset(i64);

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;

impl DayOffset {
    /// The exclusive upper bound of a day: 24:00:00.000.
    pub const END_OF_DAY: DayOffset = DayOffset(24 * MS_PER_HOUR);

    /// Create an offset from a raw millisecond count.
    pub fn new(ms: i64) -> Self {
        Self(ms)
    }

    /// Create an offset from an hour/minute pair.
    pub fn from_hm(hour: u32, minute: u32) -> Self {
        Self(i64::from(hour) * MS_PER_HOUR + i64::from(minute) * MS_PER_MINUTE)
    }

    /// Create an offset from an hour/minute/second triple.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Self {
        Self(
            i64::from(hour) * MS_PER_HOUR
                + i64::from(minute) * MS_PER_MINUTE
                + i64::from(second) * MS_PER_SECOND,
        )
    }

    /// Offset of a wall-clock instant within its local day.
    pub fn from_datetime(dt: &DateTime<Local>) -> Self {
        Self(
            i64::from(dt.num_seconds_from_midnight()) * MS_PER_SECOND
                + i64::from(dt.timestamp_subsec_millis()),
        )
    }

    /// Raw offset value in milliseconds.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Convert to a `NaiveTime`. Returns `None` for 24:00 and beyond, which
    /// have no time-of-day representation.
    pub fn to_naive_time(self) -> Option<NaiveTime> {
        if self.0 < 0 {
            return None;
        }
        let secs = (self.0 / MS_PER_SECOND) as u32;
        let nanos = ((self.0 % MS_PER_SECOND) * 1_000_000) as u32;
        NaiveTime::from_num_seconds_from_midnight_opt(secs, nanos)
    }
}

impl From<i64> for DayOffset {
    fn from(ms: i64) -> Self {
        DayOffset::new(ms)
    }
}

impl fmt::Display for DayOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_seconds = self.0 / MS_PER_SECOND;
        write!(
            f,
            "{:02}:{:02}:{:02}",
            total_seconds / 3600,
            (total_seconds % 3600) / 60,
            total_seconds % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_offset_from_hm() {
        let offset = DayOffset::from_hm(8, 39);
        assert_eq!(offset.value(), (8 * 3600 + 39 * 60) * 1000);
    }

    #[test]
    fn test_offset_from_hms() {
        let offset = DayOffset::from_hms(15, 0, 30);
        assert_eq!(offset.value(), (15 * 3600 + 30) * 1000);
    }

    #[test]
    fn test_offset_from_raw() {
        let offset: DayOffset = 42_000.into();
        assert_eq!(offset.value(), 42_000);
    }

    #[test]
    fn test_offset_ordering() {
        assert!(DayOffset::from_hm(8, 39) < DayOffset::from_hm(9, 22));
        assert!(DayOffset::from_hm(23, 59) < DayOffset::END_OF_DAY);
    }

    #[test]
    fn test_offset_from_datetime() {
        let dt = Local.with_ymd_and_hms(2025, 7, 22, 8, 39, 15).unwrap();
        let offset = DayOffset::from_datetime(&dt);
        assert_eq!(offset.value(), (8 * 3600 + 39 * 60 + 15) * 1000);
    }

    #[test]
    fn test_offset_to_naive_time() {
        let time = DayOffset::from_hm(10, 56).to_naive_time().unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(10, 56, 0).unwrap());
    }

    #[test]
    fn test_end_of_day_has_no_naive_time() {
        assert!(DayOffset::END_OF_DAY.to_naive_time().is_none());
    }

    #[test]
    fn test_offset_display() {
        assert_eq!(DayOffset::from_hm(9, 5).to_string(), "09:05:00");
        assert_eq!(DayOffset::END_OF_DAY.to_string(), "24:00:00");
    }
}
