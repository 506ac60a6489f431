pub mod schedule;
pub mod term;
pub mod time;

pub use schedule::*;
pub use term::*;
pub use time::*;
