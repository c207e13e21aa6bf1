//! Time source used by note assembly
//!
//! Every placeholder of one note is rendered from a single reading of the
//! clock, so `{{zettel-id}}` in the file name and `created` in the
//! front-matter always agree.

use chrono::{DateTime, FixedOffset, Local};

/// A wall-clock instant carrying the offset it should be displayed in
pub type Timestamp = DateTime<FixedOffset>;

/// Source of "now"
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Local::now().fixed_offset()
    }
}

/// A clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
