//! Service layer: pure resolution logic over the configured tables.
//!
//! These functions take the configuration and a timestamp and produce the
//! transient resolution results consumed by the presenter. Nothing here
//! touches the clock or the display directly.

pub mod day_state;
pub mod letter_cycle;
pub mod resolver;

pub use day_state::{classify, schedule_for, DayState};
pub use letter_cycle::{letter_for, LetterDay};
pub use resolver::{resolve, ResolvedPeriod};
