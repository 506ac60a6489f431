//! Shared test doubles: a scripted clock and a recording display sink.

use bellboard::display::DisplaySink;
use bellboard::runtime::Clock;
use chrono::{DateTime, Local, TimeZone};

/// A clock pinned to one instant.
pub struct FixedClock(pub DateTime<Local>);

impl FixedClock {
    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self(
            Local
                .with_ymd_and_hms(year, month, day, hour, minute, second)
                .unwrap(),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Records every value written to each slot.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub day_lines: Vec<String>,
    pub status_lines: Vec<String>,
    pub detail_lines: Vec<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_day_line(&self) -> &str {
        self.day_lines.last().map(String::as_str).unwrap_or("")
    }

    pub fn last_status_line(&self) -> &str {
        self.status_lines.last().map(String::as_str).unwrap_or("")
    }

    pub fn last_detail_line(&self) -> &str {
        self.detail_lines.last().map(String::as_str).unwrap_or("")
    }
}

impl DisplaySink for RecordingSink {
    fn set_day_line(&mut self, text: &str) {
        self.day_lines.push(text.to_string());
    }

    fn set_status_line(&mut self, text: &str) {
        self.status_lines.push(text.to_string());
    }

    fn set_detail_line(&mut self, text: &str) {
        self.detail_lines.push(text.to_string());
    }
}
